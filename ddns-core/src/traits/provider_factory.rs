//! Provider factory abstract Trait

use std::sync::Arc;

use ddns_provider::{DnsProvider, ProviderCredentials, ProviderError, ProviderType};

/// Builds a Provider client for a single request.
///
/// Clients are request-scoped: one is built per dispatch and dropped after the
/// reconciliation run. Tests swap in a factory that hands out scripted mocks.
pub trait ProviderFactory: Send + Sync {
    /// Build a client, validating `credentials` before any I/O.
    ///
    /// # Errors
    /// `ProviderError::Configuration` when a required credential is missing or blank.
    fn create(
        &self,
        provider_type: ProviderType,
        credentials: &ProviderCredentials,
    ) -> Result<Arc<dyn DnsProvider>, ProviderError>;
}

/// Factory backed by the real HTTP clients
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProviderFactory;

impl ProviderFactory for DefaultProviderFactory {
    fn create(
        &self,
        provider_type: ProviderType,
        credentials: &ProviderCredentials,
    ) -> Result<Arc<dyn DnsProvider>, ProviderError> {
        ddns_provider::create_provider(provider_type, credentials)
    }
}
