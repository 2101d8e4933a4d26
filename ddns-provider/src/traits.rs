use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::types::{DesiredRecordState, LookupOutcome, MutationOutcome, ProviderFailure};

/// 原始 API 错误（内部使用）
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// 错误码（各 Provider 格式不同）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// 错误上下文信息（内部使用）
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// 记录名称（用于 `RecordExists` 等错误）
    pub record_name: Option<String>,
    /// 记录 ID（用于 `RecordNotFound` 等错误）
    pub record_id: Option<String>,
    /// 域名（用于 `DomainNotFound` 等错误）
    pub domain: Option<String>,
}

impl ErrorContext {
    pub fn for_record(desired: &DesiredRecordState, record_id: Option<&str>) -> Self {
        Self {
            record_name: Some(desired.record.clone()),
            record_id: record_id.map(str::to_string),
            domain: Some(desired.domain.clone()),
        }
    }
}

/// Provider 错误映射 Trait（内部使用）
/// 各 Provider 实现此 trait 以将原始 API 错误映射到统一错误类型
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 将原始 API 错误映射到统一错误类型
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// 快捷方法：解析错误
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未知错误（fallback）
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }

    /// Classifies a provider-reported failure and keeps its payload verbatim.
    fn failure(&self, raw: RawApiError, context: ErrorContext, detail: Value) -> ProviderFailure {
        let error = self.map_error(raw, context);
        if error.is_expected() {
            log::warn!("[{}] {error}", self.provider_name());
        } else {
            log::error!("[{}] {error}", self.provider_name());
        }
        ProviderFailure { detail, error }
    }

    /// 查询阶段的失败：同样分级记录日志，只保留原始载荷
    fn lookup_error(
        &self,
        raw: RawApiError,
        context: ErrorContext,
        detail: Value,
    ) -> LookupOutcome {
        LookupOutcome::LookupError(self.failure(raw, context, detail).detail)
    }
}

/// DNS 提供商 Trait
///
/// The three operations a reconciliation run needs. None of the supported APIs
/// offers an idempotent upsert, so callers look up first and then pick
/// [`create`](Self::create) or [`update`](Self::update).
///
/// `Err` is reserved for transport and response-shape failures. Anything the
/// provider itself reports comes back as [`LookupOutcome::LookupError`] or
/// [`MutationOutcome::Failure`].
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Finds the record matching `desired.fqdn()` and `desired.record_type`.
    ///
    /// When several records match, the first one the provider returns wins.
    /// The APIs give no ordering guarantee, so this tie-break is arbitrary.
    async fn lookup(&self, desired: &DesiredRecordState) -> Result<LookupOutcome>;

    /// Creates the record, using the provider's default TTL when none was given.
    async fn create(&self, desired: &DesiredRecordState) -> Result<MutationOutcome>;

    /// Points the record identified by `record_id` at `desired.ip`.
    async fn update(&self, record_id: &str, desired: &DesiredRecordState)
    -> Result<MutationOutcome>;
}
