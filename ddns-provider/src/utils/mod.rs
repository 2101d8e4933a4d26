//! Utility modules.

/// Keeps provider response bodies in logs short.
pub mod log_sanitizer;
