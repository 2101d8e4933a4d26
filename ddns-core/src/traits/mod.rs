//! Dependency seams of the core layer

mod provider_factory;

pub use provider_factory::{DefaultProviderFactory, ProviderFactory};
