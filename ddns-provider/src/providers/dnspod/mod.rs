//! `DNSPod` Provider（`dnsapi.cn` token API）

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::{ProviderCredentials, ProviderType};

pub(crate) use types::DnspodResponse;

pub(crate) const DNSPOD_API_BASE: &str = "https://dnsapi.cn";
/// `DNSPod` 未指定 TTL 时的默认值（秒）
pub(crate) const DEFAULT_TTL: u32 = 60;
/// 默认线路
pub(crate) const DEFAULT_LINE_ID: &str = "0";

/// `DNSPod` Provider
///
/// 使用 `login_token = "<id>,<token>"` 认证，参数以表单 POST 提交。
pub struct DnspodProvider {
    pub(crate) client: Client,
    pub(crate) login_token: String,
}

impl DnspodProvider {
    pub fn new(credentials: &ProviderCredentials) -> Result<Self> {
        let token_id = ProviderCredentials::require(
            credentials.id.as_ref(),
            ProviderType::Dnspod,
            "id",
            "Token ID",
        )?;
        let token = ProviderCredentials::require(
            credentials.key.as_ref(),
            ProviderType::Dnspod,
            "key",
            "Token",
        )?;

        Ok(Self {
            client: create_http_client("dnspod")?,
            login_token: format!("{token_id},{token}"),
        })
    }
}
