use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderError;

// ============ Provider identity ============

/// Supported DNS provider types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Cloudflare DNS.
    Cloudflare,
    /// Aliyun (China) DNS.
    Aliyun,
    /// DNSPod (legacy `dnsapi.cn` token API).
    Dnspod,
}

impl ProviderType {
    /// Every provider the registry knows about, in token order.
    pub const ALL: [Self; 3] = [Self::Aliyun, Self::Dnspod, Self::Cloudflare];

    /// The short token callers use to select this provider.
    pub fn token(self) -> &'static str {
        match self {
            Self::Aliyun => "ali",
            Self::Dnspod => "dp",
            Self::Cloudflare => "cf",
        }
    }

    /// Looks up a provider by its token. Matching is exact.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cloudflare => write!(f, "cloudflare"),
            Self::Aliyun => write!(f, "aliyun"),
            Self::Dnspod => write!(f, "dnspod"),
        }
    }
}

// ============ Credentials ============

/// Caller-supplied credentials.
///
/// The meaning of `id`/`key` depends on the provider:
///
/// | Provider | `id` | `key` |
/// |----------|------|-------|
/// | Cloudflare | account email (optional) | global API key, or API token when `id` is absent |
/// | Aliyun | `AccessKey` ID | `AccessKey` secret |
/// | `DNSPod` | token ID | token |
#[derive(Clone, Default, Deserialize)]
pub struct ProviderCredentials {
    pub id: Option<String>,
    pub key: Option<String>,
}

impl ProviderCredentials {
    pub fn new(id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            key: Some(key.into()),
        }
    }

    /// Non-empty `id`, if one was supplied.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Returns a required field, rejecting absent and whitespace-only values.
    pub(crate) fn require(
        value: Option<&String>,
        provider: ProviderType,
        field: &str,
        label: &str,
    ) -> Result<String, ProviderError> {
        let reason = match value {
            None => CredentialValidationError::MissingField {
                provider,
                field: field.to_string(),
                label: label.to_string(),
            },
            Some(v) if v.trim().is_empty() => CredentialValidationError::EmptyField {
                provider,
                field: field.to_string(),
                label: label.to_string(),
            },
            Some(v) => return Ok(v.trim().to_string()),
        };
        Err(ProviderError::Configuration {
            provider: provider.to_string(),
            reason,
        })
    }
}

// Keys never end up in logs.
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderCredentials")
            .field("id", &self.id)
            .field("key", &self.key.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Credential validation error with field-level detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CredentialValidationError {
    /// A required credential field is missing entirely.
    MissingField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
    /// A credential field is present but empty/whitespace-only.
    EmptyField {
        /// Which provider the error relates to.
        provider: ProviderType,
        /// Machine-readable field key.
        field: String,
        /// Human-readable field label.
        label: String,
    },
}

impl std::fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { label, .. } => write!(f, "Missing required field: {label}"),
            Self::EmptyField { label, .. } => write!(f, "Field must not be empty: {label}"),
        }
    }
}

impl std::error::Error for CredentialValidationError {}

// ============ Desired state ============

/// TTL as supplied by the caller: either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ttl {
    Seconds(u32),
    Text(String),
}

impl Ttl {
    /// Numeric value, if the TTL is a number or a numeric string.
    pub fn seconds(&self) -> Option<u32> {
        match self {
            Self::Seconds(s) => Some(*s),
            Self::Text(t) => t.trim().parse().ok(),
        }
    }

    /// The TTL rendered as a request parameter.
    pub fn as_param(&self) -> String {
        match self {
            Self::Seconds(s) => s.to_string(),
            Self::Text(t) => t.trim().to_string(),
        }
    }
}

impl From<u32> for Ttl {
    fn from(value: u32) -> Self {
        Self::Seconds(value)
    }
}

fn default_record_type() -> String {
    "A".to_string()
}

/// The record a reconciliation run should leave behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredRecordState {
    /// Registered domain, e.g. `example.com`.
    pub domain: String,
    /// Subdomain label, e.g. `home` or `way.to.home`.
    pub record: String,
    /// Record type, `A` unless stated otherwise.
    #[serde(rename = "type", default = "default_record_type")]
    pub record_type: String,
    /// The address the record should point at.
    pub ip: String,
    /// Provider default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<Ttl>,
}

impl DesiredRecordState {
    pub fn new(
        domain: impl Into<String>,
        record: impl Into<String>,
        ip: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            record: record.into(),
            record_type: default_record_type(),
            ip: ip.into(),
            ttl: None,
        }
    }

    #[must_use]
    pub fn with_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = record_type.into();
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: impl Into<Ttl>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }

    /// Fully-qualified record name, e.g. `home.example.com`.
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.record, self.domain)
    }

    /// Caller TTL as a number, or `default` when absent or not numeric.
    pub fn ttl_or(&self, default: u32) -> u32 {
        self.ttl.as_ref().and_then(Ttl::seconds).unwrap_or(default)
    }

    /// Caller TTL as a request parameter, or `default` when absent.
    pub fn ttl_param_or(&self, default: u32) -> String {
        self.ttl
            .as_ref()
            .map_or_else(|| default.to_string(), Ttl::as_param)
    }
}

// ============ Outcomes ============

/// Result of looking up the existing record.
///
/// The three cases drive the create-vs-update decision and must never be collapsed.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// A matching record exists; carries the provider's record identifier.
    Found(String),
    /// The provider positively reported zero matching records.
    NotFound,
    /// The provider reported an error; carries its payload verbatim.
    LookupError(Value),
}

/// A provider-reported failure: the verbatim payload plus its classification.
#[derive(Debug, Clone)]
pub struct ProviderFailure {
    /// Provider payload, passed through unchanged.
    pub detail: Value,
    /// Classification on the shared error taxonomy.
    pub error: ProviderError,
}

/// Result of a create or update call.
#[derive(Debug, Clone)]
pub enum MutationOutcome {
    /// The provider's success marker was present.
    Success(Value),
    /// The provider reported a failure.
    Failure(ProviderFailure),
}

impl MutationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The payload that goes into a result's `data` field.
    pub fn into_data(self) -> Value {
        match self {
            Self::Success(data) => data,
            Self::Failure(failure) => failure.detail,
        }
    }
}
