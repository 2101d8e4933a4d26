//! DNS Provider implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod aliyun;
mod cloudflare;
mod dnspod;

pub use aliyun::AliyunProvider;
pub use cloudflare::CloudflareProvider;
pub use dnspod::DnspodProvider;
