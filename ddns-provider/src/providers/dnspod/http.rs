//! `DNSPod` HTTP 请求方法

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::ProviderErrorMapper;

use super::{DNSPOD_API_BASE, DnspodProvider, DnspodResponse};

impl DnspodProvider {
    /// 以表单 POST 调用 `dnsapi.cn/<action>`
    ///
    /// 返回 (原始响应体, 解析结果)：成功时整个响应体就是结果数据。
    pub(crate) async fn request(
        &self,
        action: &str,
        params: &[(&str, String)],
    ) -> Result<(serde_json::Value, DnspodResponse)> {
        let url = format!("{DNSPOD_API_BASE}/{action}");

        let mut form: Vec<(&str, &str)> =
            vec![("login_token", self.login_token.as_str()), ("format", "json")];
        form.extend(params.iter().map(|(k, v)| (*k, v.as_str())));

        let request = self.client.post(&url).form(&form);
        let (_status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), "POST", &url).await?;

        let body: serde_json::Value = HttpUtils::parse_json(&response_text, self.provider_name())?;
        let parsed = serde_json::from_value(body.clone()).map_err(|e| self.parse_error(e))?;
        Ok((body, parsed))
    }
}
