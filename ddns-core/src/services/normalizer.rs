//! 结果规范化：按调试开关决定是否隐藏失败详情

use serde_json::{Value, json};

use crate::types::{MESSAGE_REDACTED, UpdateResult, codes};

/// Render `result` as the externally visible envelope.
///
/// With `debug` off, a recognized failure code is reduced to
/// `{code, message: "update failed"}`. Code 0 and unrecognized codes pass
/// through with full detail.
#[must_use]
pub fn finalize(result: &UpdateResult, debug: bool) -> Value {
    if !debug && codes::is_known_failure(result.code) {
        return json!({
            "code": result.code,
            "message": MESSAGE_REDACTED,
        });
    }
    serde_json::to_value(result).unwrap_or_else(|e| {
        log::error!("Failed to serialize result: {e}");
        json!({ "code": result.code, "message": result.message })
    })
}
