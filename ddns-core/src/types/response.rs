//! 对外响应类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result codes carried in [`UpdateResult::code`].
///
/// `SUCCESS` means the pipeline ran to completion; whether the provider accepted
/// the change is reported inside `data`. Every non-zero code is a dispatch-level
/// failure.
pub mod codes {
    /// 流程完成（provider 的结果在 `data` 中）
    pub const SUCCESS: i32 = 0;
    /// 调和过程中出现未处理的失败
    pub const UNKNOWN_ERROR: i32 = 1000;
    /// 不支持的 provider token
    pub const UNSUPPORTED_TYPE: i32 = 1001;

    /// Whether `code` belongs to the known failure taxonomy.
    pub fn is_known_failure(code: i32) -> bool {
        matches!(code, UNKNOWN_ERROR | UNSUPPORTED_TYPE)
    }
}

/// `code == 0` 时的消息
pub const MESSAGE_COMPLETE: &str = "operation complete";
/// `UNKNOWN_ERROR` 的消息
pub const MESSAGE_REQUEST_ERROR: &str = "request error";
/// 非调试模式下替换失败详情的消息
pub const MESSAGE_REDACTED: &str = "update failed";

/// 一次调和的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// See [`codes`].
    pub code: i32,
    pub message: String,
    /// Provider payload or error detail, passed through unchanged
    pub data: Value,
    /// `true` only when the provider accepted the create/update
    pub ok: bool,
}

impl UpdateResult {
    /// 流程完成；`ok` 表示 provider 是否接受了变更
    #[must_use]
    pub fn completed(data: Value, ok: bool) -> Self {
        Self {
            code: codes::SUCCESS,
            message: MESSAGE_COMPLETE.to_string(),
            data,
            ok,
        }
    }

    /// 网络错误、响应格式异常等未处理失败
    #[must_use]
    pub fn unknown_error(data: Value) -> Self {
        Self {
            code: codes::UNKNOWN_ERROR,
            message: MESSAGE_REQUEST_ERROR.to_string(),
            data,
            ok: false,
        }
    }

    /// 不支持的 provider token
    #[must_use]
    pub fn unsupported(token: &str, supported: &[&str]) -> Self {
        Self {
            code: codes::UNSUPPORTED_TYPE,
            message: format!(
                "unsupported DDNS type '{token}', supported: {}",
                supported.join(", ")
            ),
            data: serde_json::json!({ "token": token, "supported": supported }),
            ok: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn completed_serializes_envelope() {
        let result = UpdateResult::completed(json!({"recordId": "1"}), true);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "code": 0,
                "message": "operation complete",
                "data": {"recordId": "1"},
                "ok": true
            })
        );
    }

    #[test]
    fn unsupported_lists_tokens() {
        let result = UpdateResult::unsupported("he", &["ali", "dp", "cf"]);
        assert_eq!(result.code, codes::UNSUPPORTED_TYPE);
        assert_eq!(result.data["supported"], json!(["ali", "dp", "cf"]));
        assert!(result.message.contains("ali, dp, cf"));
        assert!(!result.ok);
    }

    #[test]
    fn known_failures() {
        assert!(!codes::is_known_failure(codes::SUCCESS));
        assert!(codes::is_known_failure(codes::UNKNOWN_ERROR));
        assert!(codes::is_known_failure(codes::UNSUPPORTED_TYPE));
        assert!(!codes::is_known_failure(42));
    }
}
