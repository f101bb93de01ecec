//! Per-cycle check results handed to the alerting engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The outcome of a single health check against an endpoint.
///
/// Produced once per cycle by the scheduler and consumed by the alerting
/// engine; the diagnostic fields are passed through to notification
/// providers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check succeeded.
    pub success: bool,
    /// When the check completed.
    pub timestamp: DateTime<Utc>,
    /// How long the check took, in milliseconds.
    pub duration_ms: u64,
    /// Diagnostic messages explaining a failed check.
    pub errors: Vec<String>,
}

impl CheckResult {
    /// Creates a successful result stamped with the current time.
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            success: true,
            timestamp: Utc::now(),
            duration_ms: 0,
            errors: Vec::new(),
        }
    }

    /// Creates a failed result stamped with the current time.
    #[must_use]
    pub fn unhealthy() -> Self {
        Self {
            success: false,
            timestamp: Utc::now(),
            duration_ms: 0,
            errors: Vec::new(),
        }
    }

    /// Appends a diagnostic message.
    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Sets the check duration.
    #[must_use]
    pub const fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Returns true if the result carries diagnostic messages.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_result() {
        let result = CheckResult::healthy();
        assert!(result.success);
        assert!(!result.has_errors());
        assert_eq!(result.duration_ms, 0);
    }

    #[test]
    fn unhealthy_result() {
        let result = CheckResult::unhealthy();
        assert!(!result.success);
        assert!(!result.has_errors());
    }

    #[test]
    fn result_with_errors() {
        let result = CheckResult::unhealthy()
            .with_error("connection refused")
            .with_error("timed out after 10s");

        assert!(result.has_errors());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0], "connection refused");
    }

    #[test]
    fn result_with_duration() {
        let result = CheckResult::healthy().with_duration_ms(42);
        assert_eq!(result.duration_ms, 42);
    }
}
