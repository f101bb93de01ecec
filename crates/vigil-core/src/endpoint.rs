//! Monitored endpoints and their consecutive-outcome counters.

use serde::{Deserialize, Serialize};

use crate::alert::{Alert, AlertStatus};

/// A monitored target.
///
/// The endpoint owns the state shared by all of its alerts: the
/// consecutive-failure and consecutive-success streaks. The scheduler owns
/// the `Endpoint` itself and lends it exclusively to the alerting engine
/// for the duration of one cycle; `&mut Endpoint` is what keeps cycles for
/// the same endpoint from overlapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Human-readable endpoint name.
    pub name: String,
    /// Optional group the endpoint belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// The monitored URL or target descriptor.
    pub url: String,
    /// Alerts attached to this endpoint, in configuration order.
    #[serde(default)]
    pub alerts: Vec<Alert>,
    /// Number of consecutive failed checks observed so far.
    #[serde(skip)]
    pub consecutive_failures: usize,
    /// Number of consecutive successful checks observed so far.
    #[serde(skip)]
    pub consecutive_successes: usize,
}

impl Endpoint {
    /// Creates an endpoint with no alerts and zeroed counters.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
            url: url.into(),
            alerts: Vec::new(),
            consecutive_failures: 0,
            consecutive_successes: 0,
        }
    }

    /// Sets the group.
    #[must_use]
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Attaches an alert, preserving configuration order.
    #[must_use]
    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.alerts.push(alert);
        self
    }

    /// Records the outcome of one check cycle.
    ///
    /// A success extends the success streak and resets the failure streak;
    /// a failure does the mirror. Exactly one counter is nonzero after this
    /// returns.
    pub const fn record_outcome(&mut self, success: bool) {
        if success {
            self.consecutive_successes += 1;
            self.consecutive_failures = 0;
        } else {
            self.consecutive_failures += 1;
            self.consecutive_successes = 0;
        }
    }

    /// Returns `group/name`, or just `name` for ungrouped endpoints.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.group {
            Some(group) => format!("{group}/{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Returns a read-only snapshot of the endpoint's alerting state.
    ///
    /// Status consumers must treat the snapshot as eventually consistent;
    /// it is decoupled from the live entity the engine mutates.
    #[must_use]
    pub fn status(&self) -> EndpointStatus {
        EndpointStatus {
            name: self.name.clone(),
            group: self.group.clone(),
            url: self.url.clone(),
            consecutive_failures: self.consecutive_failures,
            consecutive_successes: self.consecutive_successes,
            alerts: self.alerts.iter().map(Alert::status).collect(),
        }
    }
}

/// Read-only snapshot of an endpoint's alerting state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointStatus {
    /// Human-readable endpoint name.
    pub name: String,
    /// Optional group the endpoint belongs to.
    pub group: Option<String>,
    /// The monitored URL or target descriptor.
    pub url: String,
    /// Number of consecutive failed checks observed so far.
    pub consecutive_failures: usize,
    /// Number of consecutive successful checks observed so far.
    pub consecutive_successes: usize,
    /// Per-alert runtime state, in configuration order.
    pub alerts: Vec<AlertStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertKind;

    fn test_endpoint() -> Endpoint {
        Endpoint::new("api", "https://example.org/health")
    }

    mod counter_tests {
        use super::*;

        #[test]
        fn counters_start_at_zero() {
            let endpoint = test_endpoint();
            assert_eq!(endpoint.consecutive_failures, 0);
            assert_eq!(endpoint.consecutive_successes, 0);
        }

        #[test]
        fn failures_accumulate() {
            let mut endpoint = test_endpoint();
            endpoint.record_outcome(false);
            endpoint.record_outcome(false);

            assert_eq!(endpoint.consecutive_failures, 2);
            assert_eq!(endpoint.consecutive_successes, 0);
        }

        #[test]
        fn success_resets_failure_streak() {
            let mut endpoint = test_endpoint();
            endpoint.record_outcome(false);
            endpoint.record_outcome(false);
            endpoint.record_outcome(true);

            assert_eq!(endpoint.consecutive_failures, 0);
            assert_eq!(endpoint.consecutive_successes, 1);
        }

        #[test]
        fn failure_resets_success_streak() {
            let mut endpoint = test_endpoint();
            endpoint.record_outcome(true);
            endpoint.record_outcome(true);
            endpoint.record_outcome(true);
            endpoint.record_outcome(false);

            assert_eq!(endpoint.consecutive_failures, 1);
            assert_eq!(endpoint.consecutive_successes, 0);
        }
    }

    mod counter_property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn exactly_one_counter_is_nonzero(outcomes in proptest::collection::vec(any::<bool>(), 1..64)) {
                let mut endpoint = test_endpoint();
                for outcome in outcomes {
                    endpoint.record_outcome(outcome);
                    prop_assert!(
                        (endpoint.consecutive_failures == 0) != (endpoint.consecutive_successes == 0)
                    );
                }
            }

            #[test]
            fn counter_tracks_the_trailing_streak(outcomes in proptest::collection::vec(any::<bool>(), 1..64)) {
                let mut endpoint = test_endpoint();
                for outcome in &outcomes {
                    endpoint.record_outcome(*outcome);
                }

                let last = *outcomes.last().unwrap();
                let streak = outcomes.iter().rev().take_while(|o| **o == last).count();
                if last {
                    prop_assert_eq!(endpoint.consecutive_successes, streak);
                } else {
                    prop_assert_eq!(endpoint.consecutive_failures, streak);
                }
            }
        }
    }

    mod identity_tests {
        use super::*;

        #[test]
        fn display_name_without_group() {
            assert_eq!(test_endpoint().display_name(), "api");
        }

        #[test]
        fn display_name_with_group() {
            let endpoint = test_endpoint().with_group("core");
            assert_eq!(endpoint.display_name(), "core/api");
        }

        #[test]
        fn alerts_keep_configuration_order() {
            let endpoint = test_endpoint()
                .with_alert(Alert::new(AlertKind::Slack))
                .with_alert(Alert::new(AlertKind::Pagerduty));

            assert_eq!(endpoint.alerts[0].kind, AlertKind::Slack);
            assert_eq!(endpoint.alerts[1].kind, AlertKind::Pagerduty);
        }
    }

    mod status_tests {
        use super::*;

        #[test]
        fn status_snapshot_copies_counters_and_alerts() {
            let mut endpoint = test_endpoint()
                .with_group("core")
                .with_alert(Alert::new(AlertKind::Slack));
            endpoint.record_outcome(false);
            endpoint.alerts[0].triggered = true;

            let status = endpoint.status();

            assert_eq!(status.name, "api");
            assert_eq!(status.group.as_deref(), Some("core"));
            assert_eq!(status.consecutive_failures, 1);
            assert_eq!(status.consecutive_successes, 0);
            assert_eq!(status.alerts.len(), 1);
            assert!(status.alerts[0].triggered);
        }

        #[test]
        fn status_snapshot_is_decoupled_from_the_entity() {
            let mut endpoint = test_endpoint().with_alert(Alert::new(AlertKind::Slack));
            let status = endpoint.status();

            endpoint.record_outcome(false);
            endpoint.alerts[0].triggered = true;

            assert_eq!(status.consecutive_failures, 0);
            assert!(!status.alerts[0].triggered);
        }

        #[test]
        fn status_snapshot_serializes() {
            let endpoint = test_endpoint().with_alert(Alert::new(AlertKind::Slack));
            let json = serde_json::to_string(&endpoint.status()).unwrap();

            assert!(json.contains("\"consecutive_failures\""));
            assert!(json.contains("slack"));
        }

        #[test]
        fn counters_are_not_serialized_with_configuration() {
            let mut endpoint = test_endpoint();
            endpoint.record_outcome(false);

            let json = serde_json::to_string(&endpoint).unwrap();
            let parsed: Endpoint = serde_json::from_str(&json).unwrap();

            assert_eq!(parsed.consecutive_failures, 0);
        }
    }
}
