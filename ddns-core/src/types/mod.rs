//! 类型定义模块

mod response;

pub use response::{
    MESSAGE_COMPLETE, MESSAGE_REDACTED, MESSAGE_REQUEST_ERROR, UpdateResult, codes,
};

// Re-export provider library types
pub use ddns_provider::{
    DesiredRecordState, LookupOutcome, MutationOutcome, ProviderCredentials, ProviderFailure,
    ProviderType, Ttl,
};
