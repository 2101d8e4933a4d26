//! Cloudflare API 类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cloudflare API 通用响应
#[derive(Debug, Deserialize)]
pub struct CloudflareResponse<T> {
    pub success: bool,
    pub result: Option<T>,
    /// 失败时原样透传给调用方
    #[serde(default)]
    pub errors: Value,
}

impl<T> CloudflareResponse<T> {
    /// 第一条错误的 (code, message)
    pub fn first_error(&self) -> (Option<String>, String) {
        let first = self.errors.as_array().and_then(|errors| errors.first());
        let code = first.and_then(|e| crate::providers::common::json_str(e, "code"));
        let message = first
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        (code, message)
    }
}

/// Cloudflare Zone 结构
#[derive(Debug, Deserialize)]
pub struct CloudflareZone {
    pub id: String,
    pub name: String,
}

/// Cloudflare DNS Record 结构（响应，只取需要的字段）
#[derive(Debug, Deserialize)]
pub struct CloudflareDnsRecord {
    pub id: String,
}

/// 创建/更新记录的请求体
#[derive(Debug, Serialize)]
pub struct RecordBody<'a> {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: &'a str,
    pub content: &'a str,
    pub ttl: u32,
}
