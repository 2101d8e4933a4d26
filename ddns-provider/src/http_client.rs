//! Shared request execution for the provider clients.
//!
//! Each client builds and signs its own `RequestBuilder`; this module only sends
//! it, logs the exchange and turns transport failures into [`ProviderError`]s.
//! The HTTP status is handed back untouched: DNSPod and Cloudflare both answer
//! 200 on some application-level failures, so success is read from the body.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ProviderError;
use crate::utils::log_sanitizer::truncate_for_log;

pub struct HttpUtils;

impl HttpUtils {
    /// Sends `request` and reads the whole body as text.
    ///
    /// `method` and `target` only feed the debug log.
    ///
    /// Returns `(status, body)` for every HTTP status, 4xx/5xx included.
    /// Fails with [`ProviderError::Timeout`] once the client timeout elapses and
    /// with [`ProviderError::NetworkError`] for any other transport problem.
    pub async fn execute_request(
        request: RequestBuilder,
        provider_name: &str,
        method: &str,
        target: &str,
    ) -> Result<(u16, String), ProviderError> {
        log::debug!("[{provider_name}] {method} {target}");

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(&e, provider_name))?;

        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                transport_error(&e, provider_name)
            } else {
                ProviderError::NetworkError {
                    provider: provider_name.to_string(),
                    detail: format!("reading body failed: {e}"),
                }
            }
        })?;

        log::debug!(
            "[{provider_name}] <- {status} {}",
            truncate_for_log(&body)
        );

        Ok((status, body))
    }

    /// Deserializes a response body, mapping failures to [`ProviderError::ParseError`].
    pub fn parse_json<T>(response_text: &str, provider_name: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!(
                "[{provider_name}] Unexpected response ({e}): {}",
                truncate_for_log(response_text)
            );
            ProviderError::ParseError {
                provider: provider_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

fn transport_error(e: &reqwest::Error, provider_name: &str) -> ProviderError {
    if e.is_timeout() {
        log::warn!("[{provider_name}] Request timed out: {e}");
        ProviderError::Timeout {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    } else {
        ProviderError::NetworkError {
            provider: provider_name.to_string(),
            detail: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ProviderError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<serde_json::Value, ProviderError> =
            HttpUtils::parse_json("<html>502 Bad Gateway</html>", "test");
        assert!(
            matches!(&result, Err(ProviderError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let client = reqwest::Client::new();
        // Port 9 (discard) on localhost is closed on test machines.
        let request = client.get("http://127.0.0.1:9/");
        let result = HttpUtils::execute_request(request, "test", "GET", "/").await;
        assert!(
            matches!(&result, Err(ProviderError::NetworkError { .. })),
            "unexpected result: {result:?}"
        );
    }
}
