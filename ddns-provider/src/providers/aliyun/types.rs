//! 阿里云 API 类型定义和辅助函数

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ProviderError, Result};

/// 将参数结构体序列化为按 key 排序、RFC3986 编码的 query string
///
/// 参数都是扁平的，`None` 字段直接跳过。
pub fn serialize_to_query_string<T: Serialize>(params: &T) -> Result<String> {
    let value = serde_json::to_value(params).map_err(|e| ProviderError::SerializationError {
        provider: "aliyun".to_string(),
        detail: e.to_string(),
    })?;

    let Value::Object(map) = value else {
        return Err(ProviderError::SerializationError {
            provider: "aliyun".to_string(),
            detail: "request parameters must be an object".to_string(),
        });
    };

    let sorted: BTreeMap<String, String> = map
        .into_iter()
        .filter_map(|(k, v)| match v {
            Value::String(s) => Some((k, s)),
            Value::Number(n) => Some((k, n.to_string())),
            Value::Bool(b) => Some((k, b.to_string())),
            _ => None,
        })
        .collect();

    Ok(sorted
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&"))
}

// ============ 请求参数 ============

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSubDomainRecordsParams<'a> {
    pub domain_name: &'a str,
    /// 完整域名，如 `home.example.com`
    pub sub_domain: String,
    #[serde(rename = "Type")]
    pub record_type: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddDomainRecordParams<'a> {
    pub domain_name: &'a str,
    #[serde(rename = "RR")]
    pub rr: &'a str,
    #[serde(rename = "Type")]
    pub record_type: &'a str,
    pub value: &'a str,
    #[serde(rename = "TTL")]
    pub ttl: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateDomainRecordParams<'a> {
    pub record_id: &'a str,
    #[serde(rename = "RR")]
    pub rr: &'a str,
    #[serde(rename = "Type")]
    pub record_type: &'a str,
    pub value: &'a str,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
}

// ============ 响应 ============

#[derive(Debug, Deserialize)]
pub struct DescribeSubDomainRecordsResponse {
    #[serde(rename = "TotalCount")]
    pub total_count: Option<i64>,
    #[serde(rename = "DomainRecords")]
    pub domain_records: Option<DomainRecordsWrapper>,
}

#[derive(Debug, Deserialize)]
pub struct DomainRecordsWrapper {
    #[serde(rename = "Record", default)]
    pub record: Vec<RecordIdResponse>,
}

/// `AddDomainRecord` / `UpdateDomainRecord` 成功时只关心 `RecordId`
#[derive(Debug, Deserialize)]
pub struct RecordIdResponse {
    #[serde(rename = "RecordId")]
    pub record_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_is_sorted_and_encoded() {
        let params = AddDomainRecordParams {
            domain_name: "example.com",
            rr: "way.to.home",
            record_type: "AAAA",
            value: "2001:db8::1",
            ttl: "600".to_string(),
        };
        assert_eq!(
            serialize_to_query_string(&params).unwrap(),
            "DomainName=example.com&RR=way.to.home&TTL=600&Type=AAAA&Value=2001%3Adb8%3A%3A1"
        );
    }

    #[test]
    fn update_omits_ttl_when_absent() {
        let params = UpdateDomainRecordParams {
            record_id: "123",
            rr: "home",
            record_type: "A",
            value: "1.2.3.4",
            ttl: None,
        };
        assert_eq!(
            serialize_to_query_string(&params).unwrap(),
            "RR=home&RecordId=123&Type=A&Value=1.2.3.4"
        );
    }

    #[test]
    fn query_string_encodes_spaces_and_unicode() {
        let params = DescribeSubDomainRecordsParams {
            domain_name: "例子.com",
            sub_domain: "a b.例子.com".to_string(),
            record_type: "A",
        };
        let qs = serialize_to_query_string(&params).unwrap();
        assert!(qs.starts_with("DomainName=%E4%BE%8B%E5%AD%90.com&SubDomain=a%20b."));
    }
}
