//! Alert definitions: backend kind, thresholds, pacing, and trigger state.
//!
//! This module provides the types describing one alert attached to an
//! endpoint:
//! - [`AlertKind`]: the closed set of notification backends
//! - [`Alert`]: threshold configuration plus the runtime trigger state that
//!   persists across check cycles
//! - [`AlertStatus`]: a read-only snapshot for status consumers

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The notification backend an alert is routed to.
///
/// This is a closed enumeration: the alerting configuration maps each kind
/// to at most one provider instance, and an alert referencing a kind with
/// no configured provider is treated as a delivery failure, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// A user-defined HTTP callout.
    Custom,
    /// Discord webhook.
    Discord,
    /// Email over SMTP.
    Email,
    /// Matrix room message.
    Matrix,
    /// Mattermost webhook.
    Mattermost,
    /// `MessageBird` SMS.
    Messagebird,
    /// `PagerDuty` incident.
    Pagerduty,
    /// Pushover push notification.
    Pushover,
    /// Slack webhook.
    Slack,
    /// Microsoft Teams webhook.
    Teams,
    /// Telegram bot message.
    Telegram,
    /// Twilio SMS/voice.
    Twilio,
}

impl AlertKind {
    /// Returns the kind as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Discord => "discord",
            Self::Email => "email",
            Self::Matrix => "matrix",
            Self::Mattermost => "mattermost",
            Self::Messagebird => "messagebird",
            Self::Pagerduty => "pagerduty",
            Self::Pushover => "pushover",
            Self::Slack => "slack",
            Self::Teams => "teams",
            Self::Telegram => "telegram",
            Self::Twilio => "twilio",
        }
    }
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_enabled() -> bool {
    true
}

/// One alert attached to an endpoint.
///
/// The threshold fields are configuration; `triggered` and `last_sent_at`
/// are runtime state that persists for the endpoint's lifetime but is never
/// serialized back into configuration. An alert's identity is its position
/// in the endpoint's ordered alert list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    /// The notification backend this alert is routed to.
    pub kind: AlertKind,
    /// Whether the alert participates in evaluation. Disabled alerts are
    /// skipped entirely and their runtime state is frozen; the endpoint's
    /// shared counters still advance.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Optional human-readable description forwarded to the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Consecutive failures required before the alert may trigger.
    #[serde(default)]
    pub failure_threshold: usize,
    /// Consecutive successes required before a triggered alert resolves.
    #[serde(default)]
    pub success_threshold: usize,
    /// Whether a resolution must also be notified.
    #[serde(default)]
    pub send_on_resolved: bool,
    /// Minimum spacing between repeated "still failing" notifications while
    /// the alert is triggered. Zero means never resend.
    #[serde(default)]
    pub minimum_repeat_interval_secs: u64,
    /// Whether the alert is currently firing. Set only after a trigger
    /// notification was accepted; cleared unconditionally on resolution.
    #[serde(skip)]
    pub triggered: bool,
    /// When a notification for this alert was last attempted.
    #[serde(skip)]
    pub last_sent_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Failure threshold applied when the configured value is zero.
    pub const DEFAULT_FAILURE_THRESHOLD: usize = 3;

    /// Success threshold applied when the configured value is zero.
    pub const DEFAULT_SUCCESS_THRESHOLD: usize = 2;

    /// Creates an enabled alert with default thresholds.
    #[must_use]
    pub const fn new(kind: AlertKind) -> Self {
        Self {
            kind,
            enabled: true,
            description: None,
            failure_threshold: Self::DEFAULT_FAILURE_THRESHOLD,
            success_threshold: Self::DEFAULT_SUCCESS_THRESHOLD,
            send_on_resolved: false,
            minimum_repeat_interval_secs: 0,
            triggered: false,
            last_sent_at: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the failure threshold.
    #[must_use]
    pub const fn with_failure_threshold(mut self, threshold: usize) -> Self {
        self.failure_threshold = threshold;
        self
    }

    /// Sets the success threshold.
    #[must_use]
    pub const fn with_success_threshold(mut self, threshold: usize) -> Self {
        self.success_threshold = threshold;
        self
    }

    /// Sets whether resolutions are notified.
    #[must_use]
    pub const fn with_send_on_resolved(mut self, send_on_resolved: bool) -> Self {
        self.send_on_resolved = send_on_resolved;
        self
    }

    /// Sets the minimum spacing between repeated notifications.
    #[must_use]
    pub const fn with_minimum_repeat_interval_secs(mut self, secs: u64) -> Self {
        self.minimum_repeat_interval_secs = secs;
        self
    }

    /// Sets whether the alert is enabled.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Replaces zero thresholds with their defaults.
    ///
    /// Deserialized configuration may omit thresholds entirely; both must be
    /// positive for the state machine to make progress.
    pub const fn normalize(&mut self) {
        if self.failure_threshold == 0 {
            self.failure_threshold = Self::DEFAULT_FAILURE_THRESHOLD;
        }
        if self.success_threshold == 0 {
            self.success_threshold = Self::DEFAULT_SUCCESS_THRESHOLD;
        }
    }

    /// Returns true when a repeat notification is due.
    ///
    /// Repeats are disabled while no interval is configured. A triggered
    /// alert that has somehow never been notified counts as due.
    #[must_use]
    pub fn repeat_interval_elapsed(&self, now: DateTime<Utc>) -> bool {
        if self.minimum_repeat_interval_secs == 0 {
            return false;
        }
        match self.last_sent_at {
            None => true,
            Some(last) => {
                now.signed_duration_since(last)
                    >= Duration::seconds(self.minimum_repeat_interval_secs as i64)
            }
        }
    }

    /// Records a notification attempt.
    ///
    /// Pacing advances on attempt, not on delivery success, so a failing
    /// provider is never retried faster than the configured interval.
    pub fn record_dispatch(&mut self, now: DateTime<Utc>) {
        self.last_sent_at = Some(now);
    }

    /// Returns a read-only snapshot of this alert.
    #[must_use]
    pub fn status(&self) -> AlertStatus {
        AlertStatus {
            kind: self.kind,
            enabled: self.enabled,
            triggered: self.triggered,
            last_sent_at: self.last_sent_at,
        }
    }
}

/// Read-only snapshot of one alert's runtime state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStatus {
    /// The notification backend the alert is routed to.
    pub kind: AlertKind,
    /// Whether the alert participates in evaluation.
    pub enabled: bool,
    /// Whether the alert is currently firing.
    pub triggered: bool,
    /// When a notification for this alert was last attempted.
    pub last_sent_at: Option<DateTime<Utc>>,
}
