use serde::Serialize;

use crate::types::CredentialValidationError;

/// Error type shared by every provider client.
///
/// Every variant names the `provider` it came from. The whole enum serializes
/// with a `code` tag so it can be placed in a result payload as-is.
///
/// Transport and response-shape failures (`NetworkError`, `Timeout`,
/// `ParseError`, `SerializationError`) abort the call and come back as `Err`.
/// The remaining variants classify failures the provider API itself reported;
/// they ride along in [`ProviderFailure`](crate::ProviderFailure) next to the
/// verbatim payload.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// Connection refused, DNS resolution failure, body read failure...
    NetworkError { provider: String, detail: String },

    /// The 10 second request timeout elapsed.
    Timeout { provider: String, detail: String },

    /// A required credential was missing or blank; raised before any request.
    Configuration {
        provider: String,
        reason: CredentialValidationError,
    },

    InvalidCredentials {
        provider: String,
        raw_message: Option<String>,
    },

    /// Same name and type (and usually value) already present.
    RecordExists {
        provider: String,
        record_name: String,
        raw_message: Option<String>,
    },

    RecordNotFound {
        provider: String,
        record_id: String,
        raw_message: Option<String>,
    },

    /// `param` names the rejected field, e.g. `ip` or `ttl`.
    InvalidParameter {
        provider: String,
        param: String,
        detail: String,
    },

    QuotaExceeded {
        provider: String,
        raw_message: Option<String>,
    },

    RateLimited {
        provider: String,
        raw_message: Option<String>,
    },

    /// The zone for the requested domain does not exist in the account.
    DomainNotFound {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    DomainLocked {
        provider: String,
        domain: String,
        raw_message: Option<String>,
    },

    PermissionDenied {
        provider: String,
        raw_message: Option<String>,
    },

    /// The response body was not the JSON shape the client expected.
    ParseError { provider: String, detail: String },

    /// Request parameters could not be encoded.
    SerializationError { provider: String, detail: String },

    /// Provider error code without a mapping above.
    Unknown {
        provider: String,
        raw_code: Option<String>,
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（凭证错误、记录冲突、参数不合法等），用于日志分级。
    ///
    /// `true` 记 `warn`，`false` 记 `error`。新增变体时同步更新。
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. }
                | Self::InvalidCredentials { .. }
                | Self::RecordExists { .. }
                | Self::RecordNotFound { .. }
                | Self::InvalidParameter { .. }
                | Self::QuotaExceeded { .. }
                | Self::DomainNotFound { .. }
                | Self::DomainLocked { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// Timeouts are reported as provider outcomes rather than pipeline failures.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Serialized form of the error, suitable for a result payload.
    #[must_use]
    pub fn to_detail(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::Value::String(self.to_string()))
    }
}

/// `"{text}"`, or `"{text}: {raw}"` when the provider sent a message
fn write_with_raw(
    f: &mut std::fmt::Formatter<'_>,
    text: std::fmt::Arguments<'_>,
    raw_message: Option<&String>,
) -> std::fmt::Result {
    match raw_message {
        Some(msg) => write!(f, "{text}: {msg}"),
        None => write!(f, "{text}"),
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => write!(f, "[{provider}] Timed out: {detail}"),
            Self::Configuration { provider, reason } => {
                write!(f, "[{provider}] Configuration error: {reason}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Invalid credentials"),
                raw_message.as_ref(),
            ),
            Self::RecordExists {
                provider,
                record_name,
                ..
            } => write!(f, "[{provider}] Record '{record_name}' already exists"),
            Self::RecordNotFound {
                provider,
                record_id,
                ..
            } => write!(f, "[{provider}] Record '{record_id}' not found"),
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => write!(f, "[{provider}] Invalid {param}: {detail}"),
            Self::QuotaExceeded {
                provider,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Record quota exceeded"),
                raw_message.as_ref(),
            ),
            Self::RateLimited {
                provider,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Rate limited"),
                raw_message.as_ref(),
            ),
            Self::DomainNotFound {
                provider,
                domain,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Domain '{domain}' not found"),
                raw_message.as_ref(),
            ),
            Self::DomainLocked {
                provider,
                domain,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Domain '{domain}' is locked"),
                raw_message.as_ref(),
            ),
            Self::PermissionDenied {
                provider,
                raw_message,
            } => write_with_raw(
                f,
                format_args!("[{provider}] Permission denied"),
                raw_message.as_ref(),
            ),
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Unexpected response: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Could not encode request: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code: Some(code),
                raw_message,
            } => write!(f, "[{provider}] {code}: {raw_message}"),
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => write!(f, "[{provider}] {raw_message}"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// `Result<T, ProviderError>`
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProviderType;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "test".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[test] Network error: connection refused");
    }

    #[test]
    fn display_configuration_error() {
        let e = ProviderError::Configuration {
            provider: "dnspod".to_string(),
            reason: CredentialValidationError::MissingField {
                provider: ProviderType::Dnspod,
                field: "id".to_string(),
                label: "Token ID".to_string(),
            },
        };
        assert_eq!(
            e.to_string(),
            "[dnspod] Configuration error: Missing required field: Token ID"
        );
    }

    #[test]
    fn display_invalid_credentials_with_message() {
        let e = ProviderError::InvalidCredentials {
            provider: "aliyun".to_string(),
            raw_message: Some("bad key".to_string()),
        };
        assert_eq!(e.to_string(), "[aliyun] Invalid credentials: bad key");
    }

    #[test]
    fn display_record_exists() {
        let e = ProviderError::RecordExists {
            provider: "dnspod".to_string(),
            record_name: "home".to_string(),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[dnspod] Record 'home' already exists");
    }

    #[test]
    fn display_domain_not_found_with_message() {
        let e = ProviderError::DomainNotFound {
            provider: "cloudflare".to_string(),
            domain: "example.com".to_string(),
            raw_message: Some("zone not found".to_string()),
        };
        assert_eq!(
            e.to_string(),
            "[cloudflare] Domain 'example.com' not found: zone not found"
        );
    }

    #[test]
    fn display_unknown() {
        let e = ProviderError::Unknown {
            provider: "test".to_string(),
            raw_code: Some("E001".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "[test] E001: something broke");
    }

    #[test]
    fn detail_is_tagged_with_variant_name() {
        let e = ProviderError::Timeout {
            provider: "aliyun".to_string(),
            detail: "operation timed out".to_string(),
        };
        let detail = e.to_detail();
        assert_eq!(detail["code"], "Timeout");
        assert_eq!(detail["provider"], "aliyun");
        assert_eq!(detail["detail"], "operation timed out");
    }

    #[test]
    fn expected_vs_unexpected() {
        assert!(
            ProviderError::QuotaExceeded {
                provider: "t".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ProviderError::NetworkError {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::Unknown {
                provider: "t".into(),
                raw_code: None,
                raw_message: "x".into(),
            }
            .is_expected()
        );
    }

    #[test]
    fn only_timeout_is_timeout() {
        assert!(
            ProviderError::Timeout {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_timeout()
        );
        assert!(
            !ProviderError::NetworkError {
                provider: "t".into(),
                detail: "x".into(),
            }
            .is_timeout()
        );
    }
}
