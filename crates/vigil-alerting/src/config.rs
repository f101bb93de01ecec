//! The kind-to-provider lookup table and the uniform dispatch layer.

use std::collections::HashMap;

use tracing::{debug, warn};
use vigil_core::{Alert, AlertKind, CheckResult, Endpoint};

use crate::error::{AlertingError, Result};
use crate::provider::AlertProvider;

/// Maps each [`AlertKind`] to the provider instance that serves it.
///
/// Built once at startup from the service configuration and read-only for
/// the duration of a check cycle. A kind with no entry is not an error at
/// lookup time; [`dispatch`](Self::dispatch) synthesizes a delivery failure
/// instead, so an unconfigured backend behaves exactly like an unreachable
/// one.
#[derive(Debug, Default)]
pub struct AlertingConfig {
    providers: HashMap<AlertKind, Box<dyn AlertProvider>>,
}

impl AlertingConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a provider under the kind it serves.
    ///
    /// Replaces any previously registered provider of the same kind.
    pub fn register(&mut self, provider: Box<dyn AlertProvider>) {
        let kind = provider.kind();
        if self.providers.insert(kind, provider).is_some() {
            warn!(kind = %kind, "replaced previously registered alerting provider");
        }
    }

    /// Registers a provider and returns self for chaining.
    #[must_use]
    pub fn with_provider(mut self, provider: Box<dyn AlertProvider>) -> Self {
        self.register(provider);
        self
    }

    /// Looks up the provider serving a kind.
    #[must_use]
    pub fn provider_for(&self, kind: AlertKind) -> Option<&dyn AlertProvider> {
        self.providers.get(&kind).map(AsRef::as_ref)
    }

    /// Returns true if no providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Dispatches one notification through the configured provider.
    ///
    /// Normalizes all three failure shapes into an [`AlertingError`]: a
    /// missing provider, a provider failing its validity check, and a
    /// delivery failure are indistinguishable to the caller's state
    /// machine.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotConfigured`, `InvalidProviderConfig`, or the
    /// provider's own `SendFailed`.
    pub fn dispatch(
        &self,
        endpoint: &Endpoint,
        alert: &Alert,
        result: &CheckResult,
        resolved: bool,
    ) -> Result<()> {
        let provider =
            self.provider_for(alert.kind)
                .ok_or(AlertingError::ProviderNotConfigured {
                    kind: alert.kind,
                })?;

        if !provider.is_valid() {
            return Err(AlertingError::InvalidProviderConfig {
                kind: alert.kind,
                reason: "provider failed its configuration validity check".to_string(),
            });
        }

        debug!(
            endpoint = %endpoint.display_name(),
            kind = %alert.kind,
            resolved,
            "dispatching notification"
        );
        provider.send(endpoint, alert, result, resolved)
    }
}
