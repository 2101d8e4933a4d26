//! `DNSPod` error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::DnspodProvider;

/// `DNSPod` 状态码映射（`dnsapi.cn` 的数字状态码）
/// Reference: <https://docs.dnspod.cn/api/>
impl ProviderErrorMapper for DnspodProvider {
    fn provider_name(&self) -> &'static str {
        "dnspod"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        let invalid = |param: &str, detail: String| ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail,
        };

        match raw.code.as_deref() {
            // -1: 登录失败
            Some("-1") => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },

            // -2: API 使用超出限制; -8: 登录失败次数过多，帐号被暂时封禁
            Some("-2" | "-8") => ProviderError::RateLimited {
                provider,
                raw_message: Some(raw.message),
            },

            // -15: 域名已被封禁; 21: 域名被锁定
            Some("-15" | "21") => ProviderError::DomainLocked {
                provider,
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // 6: 域名 ID 错误（域名不存在）
            Some("6") => ProviderError::DomainNotFound {
                provider,
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // 7: 不是域名所有者或没有权限
            Some("7") => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            },

            // 8: 记录 ID 错误
            Some("8") => ProviderError::RecordNotFound {
                provider,
                record_id: context.record_id.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // 23: 子域名级数超出限制; 24: 泛解析级数超出限制
            Some("23" | "24") => ProviderError::QuotaExceeded {
                provider,
                raw_message: Some(raw.message),
            },

            // 104: 记录已经存在
            Some("104") => ProviderError::RecordExists {
                provider,
                record_name: context.record_name.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            Some("22") => invalid("record", raw.message),
            Some("26") => invalid("line", raw.message),
            Some("27") => invalid("type", raw.message),
            Some("34" | "35" | "36") => invalid("ip", raw.message),
            Some("33") => invalid("ttl", raw.message),

            _ => self.unknown_error(raw),
        }
    }
}
