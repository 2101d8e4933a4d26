//! `DNSPod` DnsProvider trait 实现

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::traits::{DnsProvider, ErrorContext, ProviderErrorMapper, RawApiError};
use crate::types::{DesiredRecordState, LookupOutcome, MutationOutcome};

use super::{DEFAULT_LINE_ID, DEFAULT_TTL, DnspodProvider, DnspodResponse};

/// 操作成功
const STATUS_OK: i64 = 1;
/// `Record.List`: 记录列表为空
const STATUS_NO_RECORDS: i64 = 10;

impl DnspodProvider {
    fn raw_error(resp: &DnspodResponse) -> RawApiError {
        match resp.code() {
            Some(code) => RawApiError::with_code(code.to_string(), resp.message()),
            None => RawApiError::new(resp.message()),
        }
    }

    /// `Record.List` 的结果 → 三态查询结果
    pub(crate) fn lookup_from_response(
        &self,
        resp: DnspodResponse,
        desired: &DesiredRecordState,
    ) -> LookupOutcome {
        match resp.code() {
            Some(STATUS_OK) => {
                if let Some(record_id) = resp.first_record_id() {
                    log::info!(
                        "[{}] Found {} record {}: {record_id}",
                        self.provider_name(),
                        desired.record_type,
                        desired.fqdn()
                    );
                    return LookupOutcome::Found(record_id);
                }
                log::info!(
                    "[{}] No {} record for {}",
                    self.provider_name(),
                    desired.record_type,
                    desired.fqdn()
                );
                LookupOutcome::NotFound
            }
            Some(STATUS_NO_RECORDS) => {
                log::info!(
                    "[{}] No {} record for {}",
                    self.provider_name(),
                    desired.record_type,
                    desired.fqdn()
                );
                LookupOutcome::NotFound
            }
            _ => {
                let raw = Self::raw_error(&resp);
                self.lookup_error(raw, ErrorContext::for_record(desired, None), resp.status)
            }
        }
    }

    /// `Record.Create` / `Record.Ddns` 的结果：成功时返回整个响应体，失败时透传 `status`
    pub(crate) fn mutation_from_response(
        &self,
        body: Value,
        resp: DnspodResponse,
        desired: &DesiredRecordState,
        record_id: Option<&str>,
    ) -> MutationOutcome {
        if resp.code() == Some(STATUS_OK) {
            log::info!(
                "[{}] {} record {} now points at {}",
                self.provider_name(),
                desired.record_type,
                desired.fqdn(),
                desired.ip
            );
            return MutationOutcome::Success(body);
        }

        let raw = Self::raw_error(&resp);
        MutationOutcome::Failure(self.failure(
            raw,
            ErrorContext::for_record(desired, record_id),
            resp.status,
        ))
    }
}

/// 表单参数，不含 `login_token` / `format`
type Form = Vec<(&'static str, String)>;

impl DnspodProvider {
    /// `Record.List`
    pub(crate) fn list_form(desired: &DesiredRecordState) -> Form {
        vec![
            ("domain", desired.domain.clone()),
            ("sub_domain", desired.record.clone()),
            ("record_type", desired.record_type.clone()),
        ]
    }

    /// `Record.Create`：默认线路，未指定 TTL 时为 [`DEFAULT_TTL`]
    pub(crate) fn create_form(desired: &DesiredRecordState) -> Form {
        let mut form = Self::list_form(desired);
        form.extend([
            ("record_line_id", DEFAULT_LINE_ID.to_string()),
            ("value", desired.ip.clone()),
            ("ttl", desired.ttl_param_or(DEFAULT_TTL)),
        ]);
        form
    }

    /// `Record.Ddns`：只改记录值，不带 TTL
    pub(crate) fn ddns_form(record_id: &str, desired: &DesiredRecordState) -> Form {
        let mut form = vec![("record_id", record_id.to_string())];
        form.extend(Self::list_form(desired));
        form.extend([
            ("record_line_id", DEFAULT_LINE_ID.to_string()),
            ("value", desired.ip.clone()),
        ]);
        form
    }
}

#[async_trait]
impl DnsProvider for DnspodProvider {
    fn id(&self) -> &'static str {
        "dnspod"
    }

    async fn lookup(&self, desired: &DesiredRecordState) -> Result<LookupOutcome> {
        let (_body, resp) = self.request("Record.List", &Self::list_form(desired)).await?;
        Ok(self.lookup_from_response(resp, desired))
    }

    async fn create(&self, desired: &DesiredRecordState) -> Result<MutationOutcome> {
        let (body, resp) = self.request("Record.Create", &Self::create_form(desired)).await?;
        Ok(self.mutation_from_response(body, resp, desired, None))
    }

    async fn update(
        &self,
        record_id: &str,
        desired: &DesiredRecordState,
    ) -> Result<MutationOutcome> {
        let form = Self::ddns_form(record_id, desired);
        let (body, resp) = self.request("Record.Ddns", &form).await?;
        Ok(self.mutation_from_response(body, resp, desired, Some(record_id)))
    }
}
