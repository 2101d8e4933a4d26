//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use ddns_provider::{
    DesiredRecordState, DnsProvider, ProviderCredentials, ProviderType, create_provider,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 测试用的固定记录名；重复运行时走更新分支，不会堆积记录
pub const TEST_RECORD: &str = "_ddns-test";

/// 测试上下文 - 封装 Provider 和测试域名
pub struct TestContext {
    pub provider: Arc<dyn DnsProvider>,
    pub domain: String,
}

impl TestContext {
    fn build(provider_type: ProviderType, id: Option<String>, key: String) -> Option<Self> {
        let domain = env::var("TEST_DOMAIN").ok()?;
        let provider = create_provider(provider_type, &ProviderCredentials { id, key: Some(key) })
            .ok()?;
        Some(Self { provider, domain })
    }

    /// 创建 Cloudflare 测试上下文（`CLOUDFLARE_EMAIL` 可选）
    pub fn cloudflare() -> Option<Self> {
        let key = env::var("CLOUDFLARE_API_KEY").ok()?;
        Self::build(ProviderType::Cloudflare, env::var("CLOUDFLARE_EMAIL").ok(), key)
    }

    /// 创建 Aliyun 测试上下文
    pub fn aliyun() -> Option<Self> {
        let id = env::var("ALIYUN_ACCESS_KEY_ID").ok()?;
        let key = env::var("ALIYUN_ACCESS_KEY_SECRET").ok()?;
        Self::build(ProviderType::Aliyun, Some(id), key)
    }

    /// 创建 `DNSPod` 测试上下文
    pub fn dnspod() -> Option<Self> {
        let id = env::var("DNSPOD_TOKEN_ID").ok()?;
        let key = env::var("DNSPOD_TOKEN").ok()?;
        Self::build(ProviderType::Dnspod, Some(id), key)
    }

    /// 指向 TEST-NET-1 地址的期望状态
    pub fn desired(&self, ip: &str) -> DesiredRecordState {
        DesiredRecordState::new(self.domain.clone(), TEST_RECORD, ip).with_ttl(600)
    }
}

/// 生成 lookup / upsert 两个集成测试
#[macro_export]
macro_rules! reconcile_tests {
    ($ctor:ident, $($var:expr),+) => {
        #[tokio::test]
        #[ignore]
        async fn lookup_is_not_an_error() {
            skip_if_no_credentials!($($var),+, "TEST_DOMAIN");

            let ctx = TestContext::$ctor().expect("创建测试上下文失败");
            let outcome = ctx.provider.lookup(&ctx.desired("192.0.2.1")).await;

            assert!(outcome.is_ok(), "lookup 调用失败: {outcome:?}");
            let outcome = outcome.unwrap();
            assert!(
                !matches!(outcome, LookupOutcome::LookupError(_)),
                "lookup 返回错误: {outcome:?}"
            );
            println!("✓ lookup 测试通过: {outcome:?}");
        }

        #[tokio::test]
        #[ignore]
        async fn upsert_then_update() {
            skip_if_no_credentials!($($var),+, "TEST_DOMAIN");

            let ctx = TestContext::$ctor().expect("创建测试上下文失败");

            // 1. 不存在则创建，存在则更新
            let first = ctx.desired("192.0.2.1");
            let outcome = match ctx.provider.lookup(&first).await.expect("lookup 失败") {
                LookupOutcome::Found(id) => ctx.provider.update(&id, &first).await,
                LookupOutcome::NotFound => ctx.provider.create(&first).await,
                LookupOutcome::LookupError(detail) => panic!("lookup 返回错误: {detail}"),
            }
            .expect("写入失败");
            assert!(outcome.is_success(), "写入被拒绝: {outcome:?}");
            println!("  ✓ 第一次写入成功");

            // 2. 此时一定能查到，且走更新分支
            let second = ctx.desired("192.0.2.2");
            let record_id = match ctx.provider.lookup(&second).await.expect("lookup 失败") {
                LookupOutcome::Found(id) => id,
                other => panic!("写入后应能查到记录: {other:?}"),
            };
            let outcome = ctx
                .provider
                .update(&record_id, &second)
                .await
                .expect("update 失败");
            assert!(outcome.is_success(), "更新被拒绝: {outcome:?}");
            println!("✓ upsert 测试通过: id={record_id}");
        }
    };
}
