//! 阿里云错误映射

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::AliyunProvider;

/// 阿里云错误码映射
/// 参考: <https://api.aliyun.com/document/Alidns/2015-01-09/errorCode>
impl ProviderErrorMapper for AliyunProvider {
    fn provider_name(&self) -> &'static str {
        "aliyun"
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        let invalid = |param: &str, detail: String| ProviderError::InvalidParameter {
            provider: self.provider_name().to_string(),
            param: param.to_string(),
            detail,
        };

        match raw.code.as_deref() {
            Some(
                "InvalidAccessKeyId.NotFound"
                | "InvalidAccessKeyId.Inactive"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature",
            ) => ProviderError::InvalidCredentials {
                provider,
                raw_message: Some(raw.message),
            },

            // 同名同值记录已存在，DDNS 场景下通常说明 IP 未变化
            Some("DomainRecordDuplicate" | "DomainRecordConflict") => ProviderError::RecordExists {
                provider,
                record_name: context.record_name.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            Some("DomainRecordNotBelongToUser" | "InvalidRecordId.NotFound") => {
                ProviderError::RecordNotFound {
                    provider,
                    record_id: context.record_id.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }

            Some("InvalidDomainName.NoExist" | "InvalidDomainName.Format" | "DomainNotFound") => {
                ProviderError::DomainNotFound {
                    provider,
                    domain: context.domain.unwrap_or_default(),
                    raw_message: Some(raw.message),
                }
            }

            // TTL 低于套餐下限也以 QuotaExceeded 开头，先于配额匹配
            Some("SubDomainInvalid.TTL" | "QuotaExceeded.TTL.Min") => invalid("ttl", raw.message),

            Some(code) if code.starts_with("QuotaExceeded") => ProviderError::QuotaExceeded {
                provider,
                raw_message: Some(raw.message),
            },

            Some("Throttling" | "Throttling.User" | "Throttling.Api") => {
                ProviderError::RateLimited {
                    provider,
                    raw_message: Some(raw.message),
                }
            }

            Some(
                "DomainRecordLocked" | "DomainExpiredDNSForbidden" | "Forbidden.DomainExpired",
            ) => ProviderError::DomainLocked {
                provider,
                domain: context.domain.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            Some(
                "Forbidden"
                | "Forbidden.RAM"
                | "Forbidden.RiskControl"
                | "OperationDomain.NoPermission"
                | "IncorrectDomainUser",
            ) => ProviderError::PermissionDenied {
                provider,
                raw_message: Some(raw.message),
            },

            Some("InvalidRR.AValue" | "InvalidRR.AAAAValue" | "InvalidRecordValue") => {
                invalid("ip", raw.message)
            }
            Some("InvalidRR.Format" | "InvalidRR.RrEmpty" | "InvalidRR.Length") => {
                invalid("record", raw.message)
            }
            Some("SubDomainInvalid.Type" | "InvalidRR.TypeEmpty") => invalid("type", raw.message),

            _ => self.unknown_error(raw),
        }
    }
}
