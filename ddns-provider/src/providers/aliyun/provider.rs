//! 阿里云 DnsProvider trait 实现

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::error::Result;
use crate::providers::common::json_str;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::{DesiredRecordState, LookupOutcome, MutationOutcome, Ttl};

use super::{
    AddDomainRecordParams, AliyunProvider, DEFAULT_TTL, DescribeSubDomainRecordsParams,
    DescribeSubDomainRecordsResponse, RecordIdResponse, UpdateDomainRecordParams,
};

impl AliyunProvider {
    /// 错误响应体中的 `Code` / `Message`
    fn raw_error(body: &Value) -> RawApiError {
        let message = body
            .get("Message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        match json_str(body, "Code") {
            Some(code) => RawApiError::with_code(code, message),
            None => RawApiError::new(message),
        }
    }

    /// `DescribeSubDomainRecords` 的结果 → 三态查询结果
    ///
    /// `TotalCount > 0` 取第一条记录，`== 0` 为不存在，其余（包括错误响应）都是查询失败。
    pub(crate) fn lookup_from_response(
        &self,
        body: Value,
        desired: &DesiredRecordState,
    ) -> LookupOutcome {
        let parsed = serde_json::from_value::<DescribeSubDomainRecordsResponse>(body.clone()).ok();
        let total = parsed.as_ref().and_then(|r| r.total_count);

        match total {
            Some(0) => {
                log::info!(
                    "[{}] No {} record for {}",
                    self.provider_name(),
                    desired.record_type,
                    desired.fqdn()
                );
                LookupOutcome::NotFound
            }
            Some(n) if n > 0 => {
                let record_id = parsed
                    .and_then(|r| r.domain_records)
                    .and_then(|w| w.record.into_iter().next())
                    .and_then(|r| r.record_id);
                if let Some(record_id) = record_id {
                    log::info!(
                        "[{}] Found {} record {}: {record_id}",
                        self.provider_name(),
                        desired.record_type,
                        desired.fqdn()
                    );
                    return LookupOutcome::Found(record_id);
                }
                let raw = RawApiError::new("TotalCount > 0 but no RecordId in response");
                self.lookup_error(raw, ErrorContext::for_record(desired, None), body)
            }
            _ => {
                let raw = Self::raw_error(&body);
                self.lookup_error(raw, ErrorContext::for_record(desired, None), body)
            }
        }
    }

    /// `AddDomainRecord` / `UpdateDomainRecord` 的结果：有 `RecordId` 才算成功
    pub(crate) fn mutation_from_response(
        &self,
        body: Value,
        desired: &DesiredRecordState,
        record_id: Option<&str>,
    ) -> MutationOutcome {
        let returned_id = serde_json::from_value::<RecordIdResponse>(body.clone())
            .ok()
            .and_then(|r| r.record_id);

        if let Some(returned_id) = returned_id {
            log::info!(
                "[{}] {} record {} now points at {}",
                self.provider_name(),
                desired.record_type,
                desired.fqdn(),
                desired.ip
            );
            return MutationOutcome::Success(json!({ "recordId": returned_id }));
        }

        let raw = Self::raw_error(&body);
        MutationOutcome::Failure(self.failure(
            raw,
            ErrorContext::for_record(desired, record_id),
            body,
        ))
    }
}

impl AliyunProvider {
    /// `DescribeSubDomainRecords`：按完整子域名和类型查询
    pub(crate) fn describe_params(
        desired: &DesiredRecordState,
    ) -> DescribeSubDomainRecordsParams<'_> {
        DescribeSubDomainRecordsParams {
            domain_name: &desired.domain,
            sub_domain: desired.fqdn(),
            record_type: &desired.record_type,
        }
    }

    /// `AddDomainRecord`：未指定 TTL 时为 [`DEFAULT_TTL`]
    pub(crate) fn add_params(desired: &DesiredRecordState) -> AddDomainRecordParams<'_> {
        AddDomainRecordParams {
            domain_name: &desired.domain,
            rr: &desired.record,
            record_type: &desired.record_type,
            value: &desired.ip,
            ttl: desired.ttl_param_or(DEFAULT_TTL),
        }
    }

    /// `UpdateDomainRecord`：未指定 TTL 时不发送，保留记录原值
    pub(crate) fn update_params<'a>(
        record_id: &'a str,
        desired: &'a DesiredRecordState,
    ) -> UpdateDomainRecordParams<'a> {
        UpdateDomainRecordParams {
            record_id,
            rr: &desired.record,
            record_type: &desired.record_type,
            value: &desired.ip,
            ttl: desired.ttl.as_ref().map(Ttl::as_param),
        }
    }
}

#[async_trait]
impl DnsProvider for AliyunProvider {
    fn id(&self) -> &'static str {
        "aliyun"
    }

    async fn lookup(&self, desired: &DesiredRecordState) -> Result<LookupOutcome> {
        let params = Self::describe_params(desired);
        let body = self.request("DescribeSubDomainRecords", &params).await?;
        Ok(self.lookup_from_response(body, desired))
    }

    async fn create(&self, desired: &DesiredRecordState) -> Result<MutationOutcome> {
        let body = self.request("AddDomainRecord", &Self::add_params(desired)).await?;
        Ok(self.mutation_from_response(body, desired, None))
    }

    async fn update(
        &self,
        record_id: &str,
        desired: &DesiredRecordState,
    ) -> Result<MutationOutcome> {
        let params = Self::update_params(record_id, desired);
        let body = self.request("UpdateDomainRecord", &params).await?;
        Ok(self.mutation_from_response(body, desired, Some(record_id)))
    }
}
