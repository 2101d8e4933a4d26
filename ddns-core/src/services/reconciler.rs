//! 记录调和流程：查询 → 创建或更新

use ddns_provider::{
    DesiredRecordState, DnsProvider, LookupOutcome, MutationOutcome, ProviderError,
};

use crate::types::UpdateResult;

/// Drive one reconciliation run against `provider`.
///
/// 1. `lookup` the record by name and type
/// 2. `Found(id)` → `update(id)`; `NotFound` → `create`
/// 3. `LookupError` ends the run with the provider payload as `data`
///
/// Provider-reported failures complete with `code = 0`. Transport and
/// response-shape errors become `UNKNOWN_ERROR`, except timeouts, which are
/// reported like a provider failure.
pub async fn reconcile(provider: &dyn DnsProvider, desired: &DesiredRecordState) -> UpdateResult {
    let name = provider.id();

    let lookup = match provider.lookup(desired).await {
        Ok(outcome) => outcome,
        Err(e) => return from_error(name, "lookup", &e),
    };

    let mutation = match lookup {
        LookupOutcome::LookupError(detail) => {
            log::warn!("[{name}] Lookup of {} failed, nothing changed", desired.fqdn());
            return UpdateResult::completed(detail, false);
        }
        LookupOutcome::Found(record_id) => {
            log::debug!("[{name}] Updating record {record_id}");
            provider.update(&record_id, desired).await
        }
        LookupOutcome::NotFound => {
            log::debug!("[{name}] Creating record {}", desired.fqdn());
            provider.create(desired).await
        }
    };

    match mutation {
        Ok(outcome) => from_mutation(name, outcome),
        Err(e) => from_error(name, "mutation", &e),
    }
}

// provider 在分类失败时已经按级别记录过日志
fn from_mutation(name: &str, outcome: MutationOutcome) -> UpdateResult {
    let ok = outcome.is_success();
    log::debug!("[{name}] Mutation finished, accepted: {ok}");
    UpdateResult::completed(outcome.into_data(), ok)
}

fn from_error(name: &str, stage: &str, err: &ProviderError) -> UpdateResult {
    if err.is_timeout() {
        log::warn!("[{name}] {stage} timed out");
        return UpdateResult::completed(err.to_detail(), false);
    }
    log::error!("[{name}] {stage} aborted: {err}");
    UpdateResult::unknown_error(err.to_detail())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockProvider, network_error, timeout_error};
    use crate::types::codes;
    use serde_json::json;

    fn desired() -> DesiredRecordState {
        DesiredRecordState::new("example.com", "home", "1.2.3.4")
    }

    #[tokio::test]
    async fn not_found_creates_once() {
        let mock = MockProvider::new()
            .with_lookup(Ok(LookupOutcome::NotFound))
            .with_create(Ok(MutationOutcome::Success(json!({"recordId": "9999985"}))));

        let result = reconcile(&mock, &desired()).await;

        assert_eq!(result.code, codes::SUCCESS);
        assert_eq!(result.message, "operation complete");
        assert_eq!(result.data, json!({"recordId": "9999985"}));
        assert!(result.ok);
        assert_eq!(mock.calls(), (1, 1, 0));
    }

    #[tokio::test]
    async fn found_updates_once_with_its_id() {
        let mock = MockProvider::new()
            .with_lookup(Ok(LookupOutcome::Found("42".to_string())))
            .with_update(Ok(MutationOutcome::Success(json!({"status": {"code": "1"}}))));

        let result = reconcile(&mock, &desired()).await;

        assert_eq!(result.code, codes::SUCCESS);
        assert!(result.ok);
        assert_eq!(mock.calls(), (1, 0, 1));
        assert_eq!(mock.updated_ids(), vec!["42".to_string()]);
    }

    #[tokio::test]
    async fn lookup_error_stops_before_mutation() {
        let detail = json!({"error": "zone not found", "domain": "example.com"});
        let mock = MockProvider::new().with_lookup(Ok(LookupOutcome::LookupError(detail.clone())));

        let result = reconcile(&mock, &desired()).await;

        assert_eq!(result.code, codes::SUCCESS);
        assert_eq!(result.data, detail);
        assert!(!result.ok);
        assert_eq!(mock.calls(), (1, 0, 0));
    }

    #[tokio::test]
    async fn provider_failure_is_data_with_code_zero() {
        let detail = json!([{"code": 81057, "message": "Record already exists."}]);
        let mock = MockProvider::new()
            .with_lookup(Ok(LookupOutcome::NotFound))
            .with_create(Ok(MockProvider::failure(detail.clone())));

        let result = reconcile(&mock, &desired()).await;

        assert_eq!(result.code, codes::SUCCESS);
        assert_eq!(result.data, detail);
        assert!(!result.ok);
    }

    #[tokio::test]
    async fn transport_failure_is_unknown_error() {
        let mock = MockProvider::new().with_lookup(Err(network_error()));

        let result = reconcile(&mock, &desired()).await;

        assert_eq!(result.code, codes::UNKNOWN_ERROR);
        assert_eq!(result.message, "request error");
        assert_eq!(result.data["code"], "NetworkError");
        assert_eq!(mock.calls(), (1, 0, 0));
    }

    #[tokio::test]
    async fn transport_failure_during_update_is_unknown_error() {
        let mock = MockProvider::new()
            .with_lookup(Ok(LookupOutcome::Found("7".to_string())))
            .with_update(Err(network_error()));

        let result = reconcile(&mock, &desired()).await;

        assert_eq!(result.code, codes::UNKNOWN_ERROR);
        assert_eq!(mock.calls(), (1, 0, 1));
    }

    #[tokio::test]
    async fn timeout_is_reported_as_outcome() {
        let mock = MockProvider::new().with_lookup(Err(timeout_error()));

        let result = reconcile(&mock, &desired()).await;

        assert_eq!(result.code, codes::SUCCESS);
        assert_eq!(result.data["code"], "Timeout");
        assert!(!result.ok);
    }

    #[tokio::test]
    async fn repeated_runs_update_each_time() {
        let mock = MockProvider::new()
            .with_lookup(Ok(LookupOutcome::Found("42".to_string())))
            .with_update(Ok(MutationOutcome::Success(json!({}))));

        let first = reconcile(&mock, &desired()).await;
        let second = reconcile(&mock, &desired()).await;

        assert_eq!(first.code, codes::SUCCESS);
        assert_eq!(second.code, codes::SUCCESS);
        assert_eq!(mock.calls(), (2, 0, 2));
    }
}
