//! Cloudflare DnsProvider trait 实现

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};

use crate::error::{ProviderError, Result};
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::{DesiredRecordState, LookupOutcome, MutationOutcome, ProviderFailure};

use super::{
    CloudflareDnsRecord, CloudflareProvider, CloudflareResponse, CloudflareZone, DEFAULT_TTL,
    RecordBody,
};

impl CloudflareProvider {
    fn raw_error<T>(resp: &CloudflareResponse<T>) -> RawApiError {
        match resp.first_error() {
            (Some(code), message) => RawApiError::with_code(code, message),
            (None, message) => RawApiError::new(message),
        }
    }

    /// `GET /zones?name=` 的结果 → zone id
    ///
    /// 空列表说明该账号下没有这个域名，不再继续查询记录。
    pub(crate) fn zone_from_response(
        &self,
        resp: CloudflareResponse<Vec<CloudflareZone>>,
        desired: &DesiredRecordState,
    ) -> std::result::Result<String, ProviderFailure> {
        if !resp.success {
            let raw = Self::raw_error(&resp);
            return Err(self.failure(raw, ErrorContext::for_record(desired, None), resp.errors));
        }

        match resp.result.unwrap_or_default().into_iter().next() {
            Some(zone) => {
                log::info!(
                    "[{}] Zone for {} is {} ({})",
                    self.provider_name(),
                    desired.domain,
                    zone.id,
                    zone.name
                );
                Ok(zone.id)
            }
            None => {
                let error = ProviderError::DomainNotFound {
                    provider: self.provider_name().to_string(),
                    domain: desired.domain.clone(),
                    raw_message: Some("zone not found".to_string()),
                };
                log::warn!("[{}] {error}", self.provider_name());
                Err(ProviderFailure {
                    detail: json!({ "error": "zone not found", "domain": desired.domain }),
                    error,
                })
            }
        }
    }

    /// `GET /zones/{zone}/dns_records` 的结果 → 三态查询结果
    pub(crate) fn lookup_from_response(
        &self,
        resp: CloudflareResponse<Vec<CloudflareDnsRecord>>,
        desired: &DesiredRecordState,
    ) -> LookupOutcome {
        if !resp.success {
            let raw = Self::raw_error(&resp);
            return self.lookup_error(raw, ErrorContext::for_record(desired, None), resp.errors);
        }

        match resp.result.unwrap_or_default().into_iter().next() {
            Some(record) => {
                log::info!(
                    "[{}] Found {} record {}: {}",
                    self.provider_name(),
                    desired.record_type,
                    desired.fqdn(),
                    record.id
                );
                LookupOutcome::Found(record.id)
            }
            None => {
                log::info!(
                    "[{}] No {} record for {}",
                    self.provider_name(),
                    desired.record_type,
                    desired.fqdn()
                );
                LookupOutcome::NotFound
            }
        }
    }

    /// 创建/更新的结果：`success` 为真时返回 `result`，否则透传 `errors`
    pub(crate) fn mutation_from_response(
        &self,
        resp: CloudflareResponse<Value>,
        desired: &DesiredRecordState,
        record_id: Option<&str>,
    ) -> MutationOutcome {
        if resp.success {
            log::info!(
                "[{}] {} record {} now points at {}",
                self.provider_name(),
                desired.record_type,
                desired.fqdn(),
                desired.ip
            );
            return MutationOutcome::Success(resp.result.unwrap_or(Value::Null));
        }

        let raw = Self::raw_error(&resp);
        MutationOutcome::Failure(self.failure(
            raw,
            ErrorContext::for_record(desired, record_id),
            resp.errors,
        ))
    }

    /// 解析 zone id，同一实例只请求一次
    async fn resolve_zone(
        &self,
        desired: &DesiredRecordState,
    ) -> Result<std::result::Result<String, ProviderFailure>> {
        if let Some((domain, zone_id)) = self.zone.get()
            && *domain == desired.domain
        {
            return Ok(Ok(zone_id.clone()));
        }

        let resp: CloudflareResponse<Vec<CloudflareZone>> = self
            .request(Method::GET, "/zones", &[("name", desired.domain.as_str())], None)
            .await?;
        let zone = self.zone_from_response(resp, desired);
        if let Ok(zone_id) = &zone {
            let _ = self.zone.set((desired.domain.clone(), zone_id.clone()));
        }
        Ok(zone)
    }

    fn record_body<'a>(desired: &'a DesiredRecordState) -> RecordBody<'a> {
        RecordBody {
            name: desired.fqdn(),
            record_type: &desired.record_type,
            content: &desired.ip,
            ttl: desired.ttl_or(DEFAULT_TTL),
        }
    }
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn lookup(&self, desired: &DesiredRecordState) -> Result<LookupOutcome> {
        let zone_id = match self.resolve_zone(desired).await? {
            Ok(zone_id) => zone_id,
            Err(failure) => return Ok(LookupOutcome::LookupError(failure.detail)),
        };

        let fqdn = desired.fqdn();
        let resp: CloudflareResponse<Vec<CloudflareDnsRecord>> = self
            .request(
                Method::GET,
                &format!("/zones/{zone_id}/dns_records"),
                &[("name", fqdn.as_str()), ("type", desired.record_type.as_str())],
                None,
            )
            .await?;

        Ok(self.lookup_from_response(resp, desired))
    }

    async fn create(&self, desired: &DesiredRecordState) -> Result<MutationOutcome> {
        let zone_id = match self.resolve_zone(desired).await? {
            Ok(zone_id) => zone_id,
            Err(failure) => return Ok(MutationOutcome::Failure(failure)),
        };

        let resp: CloudflareResponse<Value> = self
            .request(
                Method::POST,
                &format!("/zones/{zone_id}/dns_records"),
                &[],
                Some(&Self::record_body(desired)),
            )
            .await?;

        Ok(self.mutation_from_response(resp, desired, None))
    }

    async fn update(
        &self,
        record_id: &str,
        desired: &DesiredRecordState,
    ) -> Result<MutationOutcome> {
        let zone_id = match self.resolve_zone(desired).await? {
            Ok(zone_id) => zone_id,
            Err(failure) => return Ok(MutationOutcome::Failure(failure)),
        };

        let resp: CloudflareResponse<Value> = self
            .request(
                Method::PUT,
                &format!("/zones/{zone_id}/dns_records/{record_id}"),
                &[],
                Some(&Self::record_body(desired)),
            )
            .await?;

        Ok(self.mutation_from_response(resp, desired, Some(record_id)))
    }
}
