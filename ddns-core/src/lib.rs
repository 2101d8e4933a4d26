//! DDNS Core Library
//!
//! Reconciliation workflow on top of `ddns-provider`:
//! - Reconciler: lookup → create or update
//! - Dispatcher (`DdnsService`): token → client → reconciler
//! - Result normalizer: debug-flag redaction of failure details
//!
//! The library is transport-independent; the HTTP boundary lives in `ddns-web`.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{DdnsService, finalize, reconcile};
pub use traits::{DefaultProviderFactory, ProviderFactory};
pub use types::{UpdateResult, codes};
