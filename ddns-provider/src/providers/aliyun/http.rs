//! Alibaba Cloud HTTP request method

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::ProviderErrorMapper;

use super::{
    ALIYUN_DNS_HOST, ALIYUN_DNS_VERSION, AliyunProvider, EMPTY_BODY_SHA256,
    serialize_to_query_string,
};

impl AliyunProvider {
    /// Execute an Alibaba Cloud API request (RPC style: parameters go in the query string)
    ///
    /// Returns the response body as JSON whatever the HTTP status. Aliyun reports
    /// business errors as HTTP 4xx with a `Code`/`Message` body, and that body is
    /// what callers pass through as the failure detail.
    pub(crate) async fn request<P: Serialize>(&self, action: &str, params: &P) -> Result<Value> {
        let query_string = serialize_to_query_string(params)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();
        let authorization = self.sign(action, &query_string, &timestamp, &nonce);

        let url = format!("https://{ALIYUN_DNS_HOST}/?{query_string}");

        let request = self
            .client
            .post(&url)
            .header("Host", ALIYUN_DNS_HOST)
            .header("x-acs-action", action)
            .header("x-acs-version", ALIYUN_DNS_VERSION)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization);

        let (status, response_text) = HttpUtils::execute_request(
            request,
            self.provider_name(),
            "POST",
            &format!("Action: {action}"),
        )
        .await?;

        if status >= 400 {
            log::debug!("[{}] {action} answered HTTP {status}", self.provider_name());
        }

        HttpUtils::parse_json(&response_text, self.provider_name())
    }
}
