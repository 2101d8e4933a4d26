//! Unified error type definition

use thiserror::Error;

// Re-export library error type
pub use ddns_provider::{CredentialValidationError, ProviderError};

/// Core layer error type
///
/// Only failures that abort a request before any result exists end up here.
/// Provider-reported failures and transport errors are folded into an
/// [`UpdateResult`](crate::types::UpdateResult) instead.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Credentials missing or blank; raised before any network call
    #[error("[{provider}] Configuration error: {reason}")]
    Configuration {
        provider: String,
        reason: CredentialValidationError,
    },

    /// Provider error that could not be turned into a result
    #[error("{0}")]
    Provider(ProviderError),
}

impl From<ProviderError> for CoreError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { provider, reason } => {
                Self::Configuration { provider, reason }
            }
            other => Self::Provider(other),
        }
    }
}

impl CoreError {
    /// Whether the error comes from the caller's input or the provider's data
    /// (bad credentials, missing domain) rather than from a fault.
    ///
    /// Log at `warn` when this returns `true` and at `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Configuration { .. } => true,
            Self::Provider(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
