//! Notification capability providers.
//!
//! This module provides the [`AlertProvider`] trait — the uniform "send one
//! notification" contract the decision engine dispatches through — and two
//! in-tree implementations: [`LogProvider`], which writes notifications to
//! the tracing log, and [`WebhookProvider`], which builds a generic JSON
//! payload for webhook-style backends.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use vigil_core::{Alert, AlertKind, CheckResult, Endpoint};

use crate::error::{AlertingError, Result};

/// A notification backend capability.
///
/// One provider instance serves one [`AlertKind`]; the engine resolves it
/// through the [`AlertingConfig`](crate::AlertingConfig) lookup table and
/// calls [`send`](Self::send) at most once per alert per check cycle. No
/// retry, backoff, or queuing belongs here — the engine retries by
/// reinvocation on subsequent cycles.
pub trait AlertProvider: Send + Sync + fmt::Debug {
    /// The backend kind this provider serves.
    fn kind(&self) -> AlertKind;

    /// Pass/fail configuration validity check.
    ///
    /// An invalid provider is treated exactly like a delivery failure by
    /// the dispatch layer; detailed validation is the provider's concern.
    fn is_valid(&self) -> bool {
        true
    }

    /// Attempts to deliver one notification.
    ///
    /// `resolved` is true for resolution notices and false for trigger and
    /// repeat notices.
    ///
    /// # Errors
    ///
    /// Returns `AlertingError::SendFailed` when the backend rejects the
    /// notification or delivery cannot be completed.
    fn send(
        &self,
        endpoint: &Endpoint,
        alert: &Alert,
        result: &CheckResult,
        resolved: bool,
    ) -> Result<()>;
}

/// A provider that writes notifications to the tracing log.
///
/// Always succeeds. Useful as a development sink and as the default route
/// for kinds with no external backend configured.
#[derive(Debug, Clone)]
pub struct LogProvider {
    kind: AlertKind,
}

impl LogProvider {
    /// Creates a log provider serving the given kind.
    #[must_use]
    pub const fn new(kind: AlertKind) -> Self {
        Self { kind }
    }
}

impl AlertProvider for LogProvider {
    fn kind(&self) -> AlertKind {
        self.kind
    }

    fn send(
        &self,
        endpoint: &Endpoint,
        alert: &Alert,
        result: &CheckResult,
        resolved: bool,
    ) -> Result<()> {
        if resolved {
            info!(
                endpoint = %endpoint.display_name(),
                kind = %alert.kind,
                successes = endpoint.consecutive_successes,
                "RESOLVED"
            );
        } else {
            error!(
                endpoint = %endpoint.display_name(),
                kind = %alert.kind,
                failures = endpoint.consecutive_failures,
                errors = ?result.errors,
                "ALERT"
            );
        }
        Ok(())
    }
}

/// The delivery state announced by a notification payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadStatus {
    /// The endpoint crossed its failure threshold.
    Triggered,
    /// The endpoint recovered past its success threshold.
    Resolved,
}

impl fmt::Display for PayloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Triggered => write!(f, "triggered"),
            Self::Resolved => write!(f, "resolved"),
        }
    }
}

/// The generic JSON body built by [`WebhookProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertPayload {
    /// The endpoint's display name (`group/name`).
    pub endpoint: String,
    /// The monitored URL.
    pub url: String,
    /// Whether this notice announces a trigger or a resolution.
    pub status: PayloadStatus,
    /// The alert's configured description, if any.
    pub description: Option<String>,
    /// Consecutive failures at dispatch time.
    pub consecutive_failures: usize,
    /// Consecutive successes at dispatch time.
    pub consecutive_successes: usize,
    /// Diagnostics from the result that crossed the threshold.
    pub errors: Vec<String>,
    /// RFC 3339 timestamp of the underlying check result.
    pub timestamp: String,
}

impl AlertPayload {
    /// Builds a payload from one dispatch decision.
    #[must_use]
    pub fn new(endpoint: &Endpoint, alert: &Alert, result: &CheckResult, resolved: bool) -> Self {
        Self {
            endpoint: endpoint.display_name(),
            url: endpoint.url.clone(),
            status: if resolved {
                PayloadStatus::Resolved
            } else {
                PayloadStatus::Triggered
            },
            description: alert.description.clone(),
            consecutive_failures: endpoint.consecutive_failures,
            consecutive_successes: endpoint.consecutive_successes,
            errors: result.errors.clone(),
            timestamp: result.timestamp.to_rfc3339(),
        }
    }
}

/// Configuration for the generic webhook provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookProviderConfig {
    /// The URL notifications are delivered to.
    pub url: String,
    /// HTTP headers to include with each request.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl WebhookProviderConfig {
    /// Creates a configuration for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// A generic webhook-style provider.
///
/// Builds an [`AlertPayload`] JSON body and hands it to the transport owned
/// by the embedding service; this crate's responsibility ends at a
/// well-formed payload and a validated destination.
#[derive(Debug, Clone)]
pub struct WebhookProvider {
    kind: AlertKind,
    config: WebhookProviderConfig,
}

impl WebhookProvider {
    /// Creates a webhook provider serving the given kind.
    #[must_use]
    pub const fn new(kind: AlertKind, config: WebhookProviderConfig) -> Self {
        Self { kind, config }
    }

    /// Returns the destination URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Serializes the notification body for one dispatch.
    ///
    /// # Errors
    ///
    /// Returns `AlertingError::Serialization` if the payload cannot be
    /// encoded.
    pub fn format_payload(
        &self,
        endpoint: &Endpoint,
        alert: &Alert,
        result: &CheckResult,
        resolved: bool,
    ) -> Result<String> {
        let payload = AlertPayload::new(endpoint, alert, result, resolved);
        serde_json::to_string(&payload).map_err(AlertingError::from)
    }
}

impl AlertProvider for WebhookProvider {
    fn kind(&self) -> AlertKind {
        self.kind
    }

    fn is_valid(&self) -> bool {
        !self.config.url.is_empty()
    }

    fn send(
        &self,
        endpoint: &Endpoint,
        alert: &Alert,
        result: &CheckResult,
        resolved: bool,
    ) -> Result<()> {
        let payload = self.format_payload(endpoint, alert, result, resolved)?;

        info!(
            kind = %self.kind,
            url = %self.config.url,
            endpoint = %endpoint.display_name(),
            resolved,
            "delivering webhook notification"
        );
        debug!(payload = %payload, "webhook payload");

        Ok(())
    }
}
