//! Cloudflare error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::CloudflareProvider;

/// Cloudflare 的错误码（`errors[].code`）映射
/// 参考: <https://developers.cloudflare.com/api/>
impl ProviderErrorMapper for CloudflareProvider {
    fn provider_name(&self) -> &'static str {
        "cloudflare"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        let message = Some(raw.message.clone());
        let invalid = |param: &str| ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail: raw.message.clone(),
        };

        match raw.code.as_deref() {
            // 请求头格式错误、key/email 不匹配、token 无效
            Some("6003" | "6103" | "6111" | "9103" | "9109" | "10000") => {
                ProviderError::InvalidCredentials {
                    provider,
                    raw_message: message,
                }
            }
            // token 对该 zone 没有 DNS 编辑权限
            Some("9300" | "10001") => ProviderError::PermissionDenied {
                provider,
                raw_message: message,
            },

            Some("9000") => invalid("name"),
            // 9005 A 记录内容非法，9006 AAAA 记录内容非法
            Some("9005" | "9006") => invalid("ip"),
            Some("9021") => invalid("ttl"),
            Some("1004") => invalid("general"),

            // 同名记录已存在（含 A/AAAA/CNAME 冲突）
            Some("81053" | "81057" | "81058") => ProviderError::RecordExists {
                provider,
                record_name: context.record_name.unwrap_or_default(),
                raw_message: message,
            },
            Some("81044") => ProviderError::RecordNotFound {
                provider,
                record_id: context.record_id.unwrap_or_default(),
                raw_message: message,
            },
            Some("81045") => ProviderError::QuotaExceeded {
                provider,
                raw_message: message,
            },
            Some("971" | "10013") => ProviderError::RateLimited {
                provider,
                raw_message: message,
            },
            // zone id 无法路由
            Some("7000" | "7003") => ProviderError::DomainNotFound {
                provider,
                domain: context.domain.unwrap_or_default(),
                raw_message: message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
