//! Entity model for the Vigil health-monitoring alerting core.
//!
//! `vigil-core` holds the state that survives across check cycles: each
//! monitored [`Endpoint`] owns its consecutive-outcome counters and an
//! ordered list of [`Alert`] definitions, and each alert carries both its
//! configuration (thresholds, backend kind, pacing) and its persistent
//! runtime trigger state. The ephemeral input to a cycle is a
//! [`CheckResult`] produced by the scheduler.
//!
//! # Features
//!
//! - **Consecutive-outcome counters**: exactly one of the failure/success
//!   streaks is nonzero after any processed result
//! - **Alert definitions**: backend kind, thresholds, resend pacing, and
//!   the authoritative `triggered` state
//! - **Status snapshots**: read-only, serializable views for status APIs
//!
//! # Example
//!
//! ```rust
//! use vigil_core::{Alert, AlertKind, Endpoint};
//!
//! let mut endpoint = Endpoint::new("api", "https://example.org/health")
//!     .with_alert(Alert::new(AlertKind::Slack).with_failure_threshold(2));
//!
//! endpoint.record_outcome(false);
//! assert_eq!(endpoint.consecutive_failures, 1);
//!
//! endpoint.record_outcome(true);
//! assert_eq!(endpoint.consecutive_failures, 0);
//! assert_eq!(endpoint.consecutive_successes, 1);
//! ```

#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/vigil-core/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alert;
pub mod endpoint;
pub mod result;

// Re-export main types at crate root
pub use alert::{Alert, AlertKind, AlertStatus};
pub use endpoint::{Endpoint, EndpointStatus};
pub use result::CheckResult;
