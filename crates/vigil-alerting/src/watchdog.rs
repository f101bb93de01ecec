//! The alerting decision engine.
//!
//! [`handle_alerting`] is called by the scheduler once per completed check,
//! after the result is produced and before the endpoint's next cycle
//! begins. It updates the endpoint's consecutive-outcome counters and runs
//! every enabled alert through a two-state machine:
//!
//! - `idle -> triggered` requires the failure threshold to be met **and**
//!   the trigger notification to be accepted by the provider. On a
//!   delivery failure the alert stays idle, and since the threshold still
//!   holds on the next failing cycle, the dispatch is retried once per
//!   cycle until a provider accepts it.
//! - `triggered -> idle` requires only the success threshold; the optional
//!   resolution notification is best-effort and its outcome never blocks
//!   the transition.
//! - `triggered -> triggered` may re-send a "still failing" notice, paced
//!   by the alert's minimum repeat interval.
//!
//! The engine holds no state of its own and never returns an error: every
//! notification failure is absorbed into the per-alert state machine and a
//! `warn` log. The `&mut Endpoint` argument is what serializes cycles for
//! a given endpoint; endpoints are independent of one another.

use chrono::Utc;
use tracing::{debug, info, warn};
use vigil_core::{CheckResult, Endpoint};

use crate::config::AlertingConfig;

/// Processes one check result for one endpoint.
///
/// A `None` alerting configuration makes the whole call a no-op, counters
/// included; the scheduler may call this unconditionally before alerting
/// is set up.
pub fn handle_alerting(
    endpoint: &mut Endpoint,
    result: &CheckResult,
    alerting: Option<&AlertingConfig>,
) {
    let Some(alerting) = alerting else {
        debug!(endpoint = %endpoint.display_name(), "alerting is not configured, nothing to do");
        return;
    };

    endpoint.record_outcome(result.success);

    if result.success {
        handle_alerts_to_resolve(endpoint, result, alerting);
    } else {
        handle_alerts_to_trigger(endpoint, result, alerting);
    }
}

// Providers borrow the whole endpoint during send, so alerts are addressed
// by index rather than through iter_mut in both walks below.

fn handle_alerts_to_trigger(
    endpoint: &mut Endpoint,
    result: &CheckResult,
    alerting: &AlertingConfig,
) {
    for i in 0..endpoint.alerts.len() {
        let alert = &endpoint.alerts[i];
        if !alert.enabled {
            continue;
        }
        let kind = alert.kind;

        if alert.triggered {
            // Persistent failure: no transition, at most a paced reminder.
            let now = Utc::now();
            if !alert.repeat_interval_elapsed(now) {
                continue;
            }
            debug!(
                endpoint = %endpoint.display_name(),
                kind = %kind,
                "alert is still failing, sending reminder"
            );
            let outcome = alerting.dispatch(endpoint, &endpoint.alerts[i], result, false);
            // Pacing advances on attempt, so a failing provider is not
            // retried faster than the configured interval.
            endpoint.alerts[i].record_dispatch(now);
            if let Err(error) = outcome {
                warn!(
                    endpoint = %endpoint.display_name(),
                    kind = %kind,
                    error = %error,
                    "failed to send reminder notification"
                );
            }
            continue;
        }

        if endpoint.consecutive_failures < alert.failure_threshold {
            continue;
        }

        // Threshold met and not yet triggered. The transition commits only
        // if the provider accepts the notification; on error the same
        // condition holds next cycle, which retries the dispatch.
        match alerting.dispatch(endpoint, &endpoint.alerts[i], result, false) {
            Ok(()) => {
                let now = Utc::now();
                let alert = &mut endpoint.alerts[i];
                alert.triggered = true;
                alert.record_dispatch(now);
                info!(
                    endpoint = %endpoint.display_name(),
                    kind = %kind,
                    failures = endpoint.consecutive_failures,
                    "alert triggered"
                );
            }
            Err(error) => {
                warn!(
                    endpoint = %endpoint.display_name(),
                    kind = %kind,
                    error = %error,
                    "failed to send trigger notification"
                );
            }
        }
    }
}

fn handle_alerts_to_resolve(
    endpoint: &mut Endpoint,
    result: &CheckResult,
    alerting: &AlertingConfig,
) {
    for i in 0..endpoint.alerts.len() {
        let alert = &endpoint.alerts[i];
        if !alert.enabled || !alert.triggered {
            continue;
        }
        if endpoint.consecutive_successes < alert.success_threshold {
            // Recovering but below the success threshold: hysteresis band,
            // not a resend point.
            continue;
        }
        let kind = alert.kind;

        if alert.send_on_resolved {
            if let Err(error) = alerting.dispatch(endpoint, &endpoint.alerts[i], result, true) {
                // `triggered` clears regardless of the dispatch outcome;
                // only the success threshold gates resolution.
                warn!(
                    endpoint = %endpoint.display_name(),
                    kind = %kind,
                    error = %error,
                    "failed to send resolution notification"
                );
            }
        }

        endpoint.alerts[i].triggered = false;
        info!(
            endpoint = %endpoint.display_name(),
            kind = %kind,
            successes = endpoint.consecutive_successes,
            "alert resolved"
        );
    }
}
