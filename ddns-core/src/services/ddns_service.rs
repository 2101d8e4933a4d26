//! DDNS 分发服务

use std::sync::Arc;

use ddns_provider::{DesiredRecordState, ProviderCredentials};

use crate::error::CoreResult;
use crate::services::reconcile;
use crate::traits::{DefaultProviderFactory, ProviderFactory};
use crate::types::UpdateResult;

/// DDNS 分发服务
///
/// token → provider 类型 → 按请求构造 client → 调和。
pub struct DdnsService {
    factory: Arc<dyn ProviderFactory>,
}

impl DdnsService {
    /// 使用指定工厂创建服务实例
    #[must_use]
    pub fn new(factory: Arc<dyn ProviderFactory>) -> Self {
        Self { factory }
    }

    /// 处理一次更新请求
    ///
    /// 不支持的 token 返回 `UNSUPPORTED_TYPE`，不会构造任何 client。
    ///
    /// # Errors
    /// 凭证缺失或为空时返回 `CoreError::Configuration`，此时尚未发出任何请求。
    pub async fn update(
        &self,
        token: &str,
        credentials: &ProviderCredentials,
        desired: &DesiredRecordState,
    ) -> CoreResult<UpdateResult> {
        let provider_type = match ddns_provider::resolve(token) {
            Ok(provider_type) => provider_type,
            Err(e) => {
                log::warn!("{e}");
                return Ok(UpdateResult::unsupported(&e.token, &e.supported));
            }
        };

        let provider = self.factory.create(provider_type, credentials)?;

        log::info!(
            "[{provider_type}] Reconciling {} {} -> {}",
            desired.record_type,
            desired.fqdn(),
            desired.ip
        );
        Ok(reconcile(provider.as_ref(), desired).await)
    }
}

impl Default for DdnsService {
    fn default() -> Self {
        Self::new(Arc::new(DefaultProviderFactory))
    }
}
