//! Provider registry: token resolution and client construction.

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::providers::{AliyunProvider, CloudflareProvider, DnspodProvider};
use crate::traits::DnsProvider;
use crate::types::{ProviderCredentials, ProviderType};

/// The caller asked for a provider token outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnsupportedProviderError {
    /// The token as received.
    pub token: String,
    /// Every token [`resolve`] accepts.
    pub supported: Vec<&'static str>,
}

impl std::fmt::Display for UnsupportedProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported provider '{}', expected one of: {}",
            self.token,
            self.supported.join(", ")
        )
    }
}

impl std::error::Error for UnsupportedProviderError {}

/// Maps a provider token (`ali`, `dp`, `cf`) to its [`ProviderType`].
///
/// Pure lookup, no I/O.
///
/// # Examples
///
/// ```rust
/// use ddns_provider::{ProviderType, resolve};
///
/// assert_eq!(resolve("cf").unwrap(), ProviderType::Cloudflare);
/// assert!(resolve("route53").is_err());
/// ```
pub fn resolve(token: &str) -> std::result::Result<ProviderType, UnsupportedProviderError> {
    ProviderType::from_token(token).ok_or_else(|| UnsupportedProviderError {
        token: token.to_string(),
        supported: ProviderType::ALL.iter().map(|p| p.token()).collect(),
    })
}

/// Creates a [`DnsProvider`] for `provider_type` from caller-supplied credentials.
///
/// Credentials are validated here, before any network call; a missing or blank
/// field yields [`ProviderError::Configuration`](crate::ProviderError::Configuration).
///
/// ```rust,no_run
/// use ddns_provider::{ProviderCredentials, ProviderType, create_provider};
///
/// let provider = create_provider(
///     ProviderType::Dnspod,
///     &ProviderCredentials::new("12345", "your-token"),
/// ).unwrap();
/// ```
pub fn create_provider(
    provider_type: ProviderType,
    credentials: &ProviderCredentials,
) -> Result<Arc<dyn DnsProvider>> {
    Ok(match provider_type {
        ProviderType::Cloudflare => Arc::new(CloudflareProvider::new(credentials)?),
        ProviderType::Aliyun => Arc::new(AliyunProvider::new(credentials)?),
        ProviderType::Dnspod => Arc::new(DnspodProvider::new(credentials)?),
    })
}
