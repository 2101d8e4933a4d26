//! `DNSPod` API 类型定义

use serde::Deserialize;
use serde_json::Value;

use crate::providers::common::json_str;

/// `dnsapi.cn` 通用响应
///
/// 所有接口都返回 HTTP 200，成功与否只看 `status.code`。
#[derive(Debug, Deserialize)]
pub struct DnspodResponse {
    #[serde(default)]
    pub status: Value,
    /// 仅 `Record.List` 返回
    #[serde(default)]
    pub records: Vec<Value>,
}

impl DnspodResponse {
    /// `status.code`，字符串和数字都接受
    pub fn code(&self) -> Option<i64> {
        json_str(&self.status, "code").and_then(|c| c.trim().parse().ok())
    }

    pub fn message(&self) -> String {
        self.status
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string()
    }

    /// 第一条记录的 id
    pub fn first_record_id(&self) -> Option<String> {
        self.records.first().and_then(|r| json_str(r, "id"))
    }
}
