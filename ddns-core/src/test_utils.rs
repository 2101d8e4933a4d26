//! 测试辅助模块
//!
//! 提供脚本化的 mock provider 与 mock 工厂。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ddns_provider::{
    DesiredRecordState, DnsProvider, LookupOutcome, MutationOutcome, ProviderCredentials,
    ProviderError, ProviderFailure, ProviderType, Result,
};
use serde_json::Value;

use crate::traits::ProviderFactory;

// ===== MockProvider =====

/// 按脚本返回结果的 provider，并记录每个方法的调用次数
pub struct MockProvider {
    lookup: Result<LookupOutcome>,
    create: Result<MutationOutcome>,
    update: Result<MutationOutcome>,
    lookup_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    updated_ids: Mutex<Vec<String>>,
}

impl MockProvider {
    /// 默认：查询失败，变更返回空成功
    pub fn new() -> Self {
        Self {
            lookup: Ok(LookupOutcome::LookupError(Value::Null)),
            create: Ok(MutationOutcome::Success(Value::Null)),
            update: Ok(MutationOutcome::Success(Value::Null)),
            lookup_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            updated_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn with_lookup(mut self, result: Result<LookupOutcome>) -> Self {
        self.lookup = result;
        self
    }

    pub fn with_create(mut self, result: Result<MutationOutcome>) -> Self {
        self.create = result;
        self
    }

    pub fn with_update(mut self, result: Result<MutationOutcome>) -> Self {
        self.update = result;
        self
    }

    /// provider 报告的失败，分类为 `RecordExists`
    pub fn failure(detail: Value) -> MutationOutcome {
        MutationOutcome::Failure(ProviderFailure {
            detail,
            error: ProviderError::RecordExists {
                provider: "mock".to_string(),
                record_name: "home".to_string(),
                raw_message: None,
            },
        })
    }

    /// `(lookup, create, update)` 调用次数
    pub fn calls(&self) -> (usize, usize, usize) {
        (
            self.lookup_calls.load(Ordering::SeqCst),
            self.create_calls.load(Ordering::SeqCst),
            self.update_calls.load(Ordering::SeqCst),
        )
    }

    pub fn updated_ids(&self) -> Vec<String> {
        self.updated_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn lookup(&self, _desired: &DesiredRecordState) -> Result<LookupOutcome> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.lookup.clone()
    }

    async fn create(&self, _desired: &DesiredRecordState) -> Result<MutationOutcome> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create.clone()
    }

    async fn update(
        &self,
        record_id: &str,
        _desired: &DesiredRecordState,
    ) -> Result<MutationOutcome> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.updated_ids.lock().unwrap().push(record_id.to_string());
        self.update.clone()
    }
}

pub fn network_error() -> ProviderError {
    ProviderError::NetworkError {
        provider: "mock".to_string(),
        detail: "connection reset by peer".to_string(),
    }
}

pub fn timeout_error() -> ProviderError {
    ProviderError::Timeout {
        provider: "mock".to_string(),
        detail: "operation timed out".to_string(),
    }
}

// ===== MockProviderFactory =====

/// 总是返回同一个 mock 的工厂；凭证校验交给真实工厂
pub struct MockProviderFactory {
    provider: Arc<MockProvider>,
    created: AtomicUsize,
}

impl MockProviderFactory {
    pub fn new(provider: Arc<MockProvider>) -> Self {
        Self {
            provider,
            created: AtomicUsize::new(0),
        }
    }

    /// 已构造的 client 数量
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl ProviderFactory for MockProviderFactory {
    fn create(
        &self,
        provider_type: ProviderType,
        credentials: &ProviderCredentials,
    ) -> std::result::Result<Arc<dyn DnsProvider>, ProviderError> {
        // 与真实 client 相同的构造期校验
        ddns_provider::create_provider(provider_type, credentials)?;
        self.created.fetch_add(1, Ordering::SeqCst);
        Ok(self.provider.clone())
    }
}
