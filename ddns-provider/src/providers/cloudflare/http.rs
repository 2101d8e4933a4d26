//! Cloudflare HTTP 请求方法

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::ProviderErrorMapper;

use super::{CloudflareAuth, CloudflareProvider, CloudflareResponse, RecordBody};

impl CloudflareProvider {
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            CloudflareAuth::GlobalKey { email, key } => request
                .header("X-Auth-Email", email)
                .header("X-Auth-Key", key),
            CloudflareAuth::Token(token) => request.bearer_auth(token),
        }
    }

    /// 执行请求并解析 Cloudflare 通用响应
    ///
    /// 不检查 `success`，由调用方决定成功与否。
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&RecordBody<'_>>,
    ) -> Result<CloudflareResponse<T>> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            log::debug!(
                "[{}] Request Body: {}",
                self.provider_name(),
                serde_json::to_string(body).unwrap_or_default()
            );
            request = request.json(body);
        }

        let (_status, response_text) = HttpUtils::execute_request(
            self.authorize(request),
            self.provider_name(),
            method.as_str(),
            &url,
        )
        .await?;

        HttpUtils::parse_json(&response_text, self.provider_name())
    }
}
