//! # ddns-provider
//!
//! DNS provider clients for dynamic DNS record reconciliation.
//!
//! ## Supported Providers
//!
//! | Token | Provider | Auth Method |
//! |-------|----------|-------------|
//! | `cf` | [Cloudflare](https://www.cloudflare.com/) | API Token, or email + Global API Key |
//! | `ali` | [Aliyun DNS](https://www.aliyun.com/product/dns) | ACS3-HMAC-SHA256 |
//! | `dp` | [DNSPod](https://www.dnspod.cn/) | `login_token` (`dnsapi.cn`) |
//!
//! ## TLS Backend
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ddns_provider::{
//!     DesiredRecordState, LookupOutcome, ProviderCredentials, create_provider, resolve,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider_type = resolve("cf")?;
//!     let provider = create_provider(provider_type, &ProviderCredentials {
//!         id: None,
//!         key: Some("your-api-token".to_string()),
//!     })?;
//!
//!     let desired = DesiredRecordState::new("example.com", "home", "203.0.113.7");
//!     match provider.lookup(&desired).await? {
//!         LookupOutcome::Found(id) => { provider.update(&id, &desired).await?; }
//!         LookupOutcome::NotFound => { provider.create(&desired).await?; }
//!         LookupOutcome::LookupError(detail) => eprintln!("lookup failed: {detail}"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Provider calls return [`Result<T, ProviderError>`](ProviderError), but only
//! transport and response-shape problems come back as `Err`:
//!
//! - [`ProviderError::NetworkError`]: connection or body read failure
//! - [`ProviderError::Timeout`]: the 10 second request timeout elapsed
//! - [`ProviderError::ParseError`]: the body was not the expected JSON
//!
//! Failures reported by the provider API itself are outcomes
//! ([`LookupOutcome::LookupError`], [`MutationOutcome::Failure`]) carrying the
//! provider's payload verbatim. Nothing is retried.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export registry functions
pub use factory::{UnsupportedProviderError, create_provider, resolve};

// Re-export core trait only (internal traits are not exported)
pub use traits::DnsProvider;

// Re-export types
pub use types::{
    CredentialValidationError, DesiredRecordState, LookupOutcome, MutationOutcome,
    ProviderCredentials, ProviderFailure, ProviderType, Ttl,
};

// Re-export concrete providers
pub use providers::{AliyunProvider, CloudflareProvider, DnspodProvider};
