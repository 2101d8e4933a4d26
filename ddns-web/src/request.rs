//! 入站请求解析：路径 token + 查询参数 + JSON 请求体

use std::collections::HashMap;

use ddns_provider::{DesiredRecordState, ProviderCredentials, Ttl};
use serde_json::{Map, Value};

/// 解析失败；边界层据此返回 404（或调试模式下的错误文本）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    InvalidQuery(String),
    InvalidBody(String),
    MissingParam(&'static str),
    InvalidParam { name: &'static str, detail: String },
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuery(detail) => write!(f, "invalid query string: {detail}"),
            Self::InvalidBody(detail) => write!(f, "invalid request body: {detail}"),
            Self::MissingParam(name) => write!(f, "missing required parameter: {name}"),
            Self::InvalidParam { name, detail } => {
                write!(f, "invalid parameter {name}: {detail}")
            }
        }
    }
}

impl std::error::Error for RequestError {}

/// 一次更新请求
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    pub token: String,
    pub credentials: ProviderCredentials,
    pub desired: DesiredRecordState,
}

/// 路径中第一个非空段，多余的斜杠会被忽略
pub fn provider_token(path: &str) -> &str {
    path.split('/').find(|s| !s.is_empty()).unwrap_or_default()
}

/// 查询参数与 JSON 请求体合并，请求体优先
pub fn merge_params(query: &str, body: &[u8]) -> Result<Map<String, Value>, RequestError> {
    let mut params: Map<String, Value> =
        actix_web::web::Query::<HashMap<String, String>>::from_query(query)
            .map_err(|e| RequestError::InvalidQuery(e.to_string()))?
            .into_inner()
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();

    if body.iter().any(|b| !b.is_ascii_whitespace()) {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => params.extend(fields),
            Ok(_) => return Err(RequestError::InvalidBody("expected a JSON object".to_string())),
            Err(e) => return Err(RequestError::InvalidBody(e.to_string())),
        }
    }

    Ok(params)
}

/// `debug=1`（字符串或数字）关闭结果脱敏
pub fn is_debug(params: &Map<String, Value>) -> bool {
    params.get("debug").and_then(scalar_text).as_deref() == Some("1")
}

impl UpdateRequest {
    pub fn from_params(token: &str, params: &Map<String, Value>) -> Result<Self, RequestError> {
        let required = |name: &'static str| {
            params
                .get(name)
                .and_then(scalar_text)
                .filter(|v| !v.is_empty())
                .ok_or(RequestError::MissingParam(name))
        };

        let mut desired =
            DesiredRecordState::new(required("domain")?, required("record")?, required("ip")?);
        if let Some(record_type) = params
            .get("type")
            .and_then(scalar_text)
            .filter(|v| !v.is_empty())
        {
            desired = desired.with_type(record_type);
        }
        if let Some(ttl) = params.get("ttl").filter(|v| !v.is_null()) {
            let ttl: Ttl =
                serde_json::from_value(ttl.clone()).map_err(|e| RequestError::InvalidParam {
                    name: "ttl",
                    detail: e.to_string(),
                })?;
            desired = desired.with_ttl(ttl);
        }

        Ok(Self {
            token: token.to_string(),
            credentials: ProviderCredentials {
                id: params.get("id").and_then(scalar_text),
                key: params.get("key").and_then(scalar_text),
            },
            desired,
        })
    }
}

/// 字符串、数字、布尔值转为文本；对象、数组和 null 视为缺失
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
