//! Alerting decision engine and notification dispatch for Vigil.
//!
//! `vigil-alerting` turns a stream of health-check results into trigger and
//! resolution notifications. It owns the per-alert state machine (idle or
//! triggered), the threshold hysteresis between the two states, repeat
//! pacing for long-lived incidents, and the provider abstraction that
//! delivers notifications to external backends.
//!
//! # Features
//!
//! - **Threshold hysteresis**: alerts trigger after N consecutive failures
//!   and resolve after M consecutive successes, independently per alert
//! - **Delivery-gated triggering**: an alert only becomes triggered once a
//!   provider accepts the notification, so delivery failures are retried
//!   on every subsequent qualifying cycle
//! - **Repeat pacing**: triggered alerts can re-notify at a configurable
//!   minimum interval while the endpoint keeps failing
//! - **Provider abstraction**: pluggable [`AlertProvider`] backends keyed
//!   by [`AlertKind`](vigil_core::AlertKind), with log and webhook
//!   providers in-tree
//!
//! # Example
//!
//! ```rust
//! use vigil_alerting::{AlertingConfig, LogProvider, handle_alerting};
//! use vigil_core::{Alert, AlertKind, CheckResult, Endpoint};
//!
//! // Route "custom" alerts to the log.
//! let alerting = AlertingConfig::new()
//!     .with_provider(Box::new(LogProvider::new(AlertKind::Custom)));
//!
//! // An endpoint that alerts after 2 consecutive failures and resolves
//! // after 1 consecutive success.
//! let mut endpoint = Endpoint::new("api", "https://example.org/health").with_alert(
//!     Alert::new(AlertKind::Custom)
//!         .with_failure_threshold(2)
//!         .with_success_threshold(1)
//!         .with_send_on_resolved(true),
//! );
//!
//! // Feed one result per check cycle.
//! handle_alerting(&mut endpoint, &CheckResult::unhealthy(), Some(&alerting));
//! assert!(!endpoint.alerts[0].triggered);
//!
//! handle_alerting(&mut endpoint, &CheckResult::unhealthy(), Some(&alerting));
//! assert!(endpoint.alerts[0].triggered);
//!
//! handle_alerting(&mut endpoint, &CheckResult::healthy(), Some(&alerting));
//! assert!(!endpoint.alerts[0].triggered);
//! ```
//!
//! The engine is synchronous and infallible by design: it is called once
//! per completed check with exclusive access to the endpoint, and every
//! delivery failure is absorbed into the state machine and the log rather
//! than surfaced to the scheduler.

#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/vigil-alerting/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod provider;
pub mod watchdog;

pub use config::AlertingConfig;
pub use error::{AlertingError, Result};
pub use provider::{
    AlertPayload, AlertProvider, LogProvider, PayloadStatus, WebhookProvider,
    WebhookProviderConfig,
};
pub use watchdog::handle_alerting;
