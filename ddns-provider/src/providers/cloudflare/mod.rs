//! Cloudflare DNS Provider

mod error;
mod http;
mod provider;
mod types;

use std::sync::OnceLock;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::create_http_client;
use crate::types::{ProviderCredentials, ProviderType};

pub(crate) use types::{CloudflareDnsRecord, CloudflareResponse, CloudflareZone, RecordBody};

pub(crate) const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare 未指定 TTL 时的默认值（秒）
pub(crate) const DEFAULT_TTL: u32 = 60;

/// 认证方式
#[derive(Clone)]
pub(crate) enum CloudflareAuth {
    /// Global API Key：`X-Auth-Email` + `X-Auth-Key`
    GlobalKey { email: String, key: String },
    /// API Token：`Authorization: Bearer`
    Token(String),
}

/// Cloudflare DNS Provider
pub struct CloudflareProvider {
    pub(crate) client: Client,
    pub(crate) auth: CloudflareAuth,
    /// API 根地址，默认为 [`CF_API_BASE`]
    pub(crate) base_url: String,
    /// 已解析的 (domain, zone id)，同一实例内复用
    pub(crate) zone: OnceLock<(String, String)>,
}

impl CloudflareProvider {
    /// `key` 必填；提供 `id` 时按邮箱 + Global API Key 认证，否则按 API Token 认证
    pub fn new(credentials: &ProviderCredentials) -> Result<Self> {
        let key = ProviderCredentials::require(
            credentials.key.as_ref(),
            ProviderType::Cloudflare,
            "key",
            "API Key / Token",
        )?;
        let auth = match credentials.id() {
            Some(email) => CloudflareAuth::GlobalKey {
                email: email.to_string(),
                key,
            },
            None => CloudflareAuth::Token(key),
        };

        Ok(Self {
            client: create_http_client("cloudflare")?,
            auth,
            base_url: CF_API_BASE.to_string(),
            zone: OnceLock::new(),
        })
    }
}
