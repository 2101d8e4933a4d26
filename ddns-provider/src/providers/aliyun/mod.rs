//! 阿里云 DNS Provider

mod error;
mod http;
mod provider;
mod sign;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::{ProviderCredentials, ProviderType};

pub(crate) use types::{
    AddDomainRecordParams, DescribeSubDomainRecordsParams, DescribeSubDomainRecordsResponse,
    RecordIdResponse, UpdateDomainRecordParams, serialize_to_query_string,
};

pub(crate) const ALIYUN_DNS_HOST: &str = "alidns.aliyuncs.com";
pub(crate) const ALIYUN_DNS_VERSION: &str = "2015-01-09";
/// 空 body 的 SHA256 hash (固定值)
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
/// 阿里云未指定 TTL 时的默认值（秒）
pub(crate) const DEFAULT_TTL: u32 = 600;

/// Aliyun DNS provider implementation.
///
/// Authenticates via ACS3-HMAC-SHA256 signing with Access Key ID/Secret
/// (`id` / `key` in [`ProviderCredentials`]).
pub struct AliyunProvider {
    pub(crate) client: Client,
    pub(crate) access_key_id: String,
    pub(crate) access_key_secret: String,
}

impl AliyunProvider {
    pub fn new(credentials: &ProviderCredentials) -> Result<Self> {
        let access_key_id = ProviderCredentials::require(
            credentials.id.as_ref(),
            ProviderType::Aliyun,
            "id",
            "AccessKey ID",
        )?;
        let access_key_secret = ProviderCredentials::require(
            credentials.key.as_ref(),
            ProviderType::Aliyun,
            "key",
            "AccessKey Secret",
        )?;

        Ok(Self {
            client: create_http_client("aliyun")?,
            access_key_id,
            access_key_secret,
        })
    }
}
