//! 请求级视图数据解析与缓存
//!
//! DataContext 的生命周期为单次请求：首次请求某个视图模型时调用其
//! Provider 并缓存结果，同一请求内的后续访问直接命中缓存。
//! 关键不变量：每个 (请求, 视图模型) 组合最多调用一次 Provider

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::component::ComponentRegistry;
use super::view_model::{ViewModel, ViewModelKind};

/// 渲染管线错误
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// 请求的视图模型没有注册 Provider（配置错误，启动校验应拦截）
    #[error("no provider registered for view model '{0}'")]
    ProviderUnregistered(ViewModelKind),
    /// Provider 返回的变体与注册的类型标识不符（编程错误）
    #[error("provider for '{expected}' returned view model '{found}'")]
    ViewModelMismatch {
        expected: ViewModelKind,
        found: ViewModelKind,
    },
    /// Provider 取数失败（下游 I/O 错误）
    #[error("provider for '{kind}' failed: {message}")]
    Provider {
        kind: ViewModelKind,
        message: String,
    },
    /// 渲染函数在有效数据上失败
    #[error("component '{component}' failed to render: {message}")]
    Render {
        component: &'static str,
        message: String,
    },
}

/// 视图模型 Provider
///
/// 计算一个视图模型实例，通常涉及 I/O（读存储、查数据库）。
/// 实现方必须返回与 `kind()` 一致的变体
#[async_trait]
pub trait ViewModelProvider: Send + Sync {
    /// 提供的视图模型类型
    fn kind(&self) -> ViewModelKind;

    /// 计算视图模型
    async fn provide(&self) -> Result<ViewModel, RenderError>;
}

/// Provider 注册表
///
/// 进程启动时构建一次，请求处理期间只读
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<ViewModelKind, Arc<dyn ViewModelProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 Provider，以其声明的类型标识为键
    pub fn register(mut self, provider: Arc<dyn ViewModelProvider>) -> Self {
        self.providers.insert(provider.kind(), provider);
        self
    }

    /// 查找某个类型标识对应的 Provider
    pub fn get(&self, kind: ViewModelKind) -> Option<&Arc<dyn ViewModelProvider>> {
        self.providers.get(&kind)
    }

    /// 启动期校验：每个已注册组件依赖的视图模型都必须有 Provider
    ///
    /// 缺失属配置错误，宁可拒绝启动也不留到首个请求才暴露
    pub fn validate_components(&self, registry: &ComponentRegistry) -> Result<(), RenderError> {
        for component in registry.components() {
            for kind in component.dependencies().kinds() {
                if !self.providers.contains_key(&kind) {
                    return Err(RenderError::ProviderUnregistered(kind));
                }
            }
        }
        Ok(())
    }
}

/// 请求级视图数据缓存
///
/// 不跨请求共享；调用方保证单请求内只有一个逻辑任务访问，
/// 因此内部无需加锁。缓存值为 `Arc<ViewModel>`，
/// 重复取值返回同一实例
pub struct DataContext<'a> {
    providers: &'a ProviderRegistry,
    cache: HashMap<ViewModelKind, Arc<ViewModel>>,
}

impl<'a> DataContext<'a> {
    /// 为一次请求创建空缓存
    pub fn new(providers: &'a ProviderRegistry) -> Self {
        Self {
            providers,
            cache: HashMap::new(),
        }
    }

    /// 取视图模型：命中缓存直接返回，否则调用 Provider 并缓存
    ///
    /// 同一请求内对同一类型重复调用是幂等的，Provider 只会被调用一次
    pub async fn get(&mut self, kind: ViewModelKind) -> Result<Arc<ViewModel>, RenderError> {
        if let Some(cached) = self.cache.get(&kind) {
            return Ok(Arc::clone(cached));
        }

        let provider = self
            .providers
            .get(kind)
            .ok_or(RenderError::ProviderUnregistered(kind))?;

        debug!(view_model = %kind, "resolving view model");
        let value = provider.provide().await?;
        if value.kind() != kind {
            return Err(RenderError::ViewModelMismatch {
                expected: kind,
                found: value.kind(),
            });
        }

        let value = Arc::new(value);
        self.cache.insert(kind, Arc::clone(&value));
        Ok(value)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 计数假 Provider：每次调用递增计数器，返回固定视图模型
    pub struct CountingProvider {
        kind: ViewModelKind,
        value: ViewModel,
        pub calls: AtomicUsize,
    }

    impl CountingProvider {
        pub fn new(kind: ViewModelKind, value: ViewModel) -> Self {
            Self {
                kind,
                value,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ViewModelProvider for CountingProvider {
        fn kind(&self) -> ViewModelKind {
            self.kind
        }

        async fn provide(&self) -> Result<ViewModel, RenderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.value.clone())
        }
    }

    /// 恒定失败的 Provider
    pub struct FailingProvider {
        pub kind: ViewModelKind,
    }

    #[async_trait]
    impl ViewModelProvider for FailingProvider {
        fn kind(&self) -> ViewModelKind {
            self.kind
        }

        async fn provide(&self) -> Result<ViewModel, RenderError> {
            Err(RenderError::Provider {
                kind: self.kind,
                message: "backing store unavailable".to_string(),
            })
        }
    }

    /// 返回错误变体的 Provider，用于标签检查测试
    pub struct MismatchedProvider {
        pub claims: ViewModelKind,
        pub returns: ViewModel,
    }

    #[async_trait]
    impl ViewModelProvider for MismatchedProvider {
        fn kind(&self) -> ViewModelKind {
            self.claims
        }

        async fn provide(&self) -> Result<ViewModel, RenderError> {
            Ok(self.returns.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{CountingProvider, MismatchedProvider};
    use super::*;
    use crate::domain::view::{AccountView, TodoStatsView};

    fn stats_view() -> ViewModel {
        ViewModel::TodoStats(TodoStatsView {
            total: 3,
            completed: 1,
            remaining: 2,
        })
    }

    #[tokio::test]
    async fn test_get_memoizes_provider_result() {
        let provider = Arc::new(CountingProvider::new(ViewModelKind::TodoStats, stats_view()));
        let registry = ProviderRegistry::new().register(provider.clone());

        let mut ctx = DataContext::new(&registry);
        let first = ctx.get(ViewModelKind::TodoStats).await.unwrap();
        let second = ctx.get(ViewModelKind::TodoStats).await.unwrap();

        // 同一请求内 Provider 只调用一次，且返回同一实例
        assert_eq!(provider.call_count(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_get_unregistered_kind_fails() {
        let registry = ProviderRegistry::new();
        let mut ctx = DataContext::new(&registry);

        let err = ctx.get(ViewModelKind::Account).await.unwrap_err();
        assert!(matches!(
            err,
            RenderError::ProviderUnregistered(ViewModelKind::Account)
        ));
    }

    #[tokio::test]
    async fn test_get_rejects_mismatched_variant() {
        let provider = Arc::new(MismatchedProvider {
            claims: ViewModelKind::Account,
            returns: stats_view(),
        });
        let registry = ProviderRegistry::new().register(provider);

        let mut ctx = DataContext::new(&registry);
        let err = ctx.get(ViewModelKind::Account).await.unwrap_err();
        assert!(matches!(err, RenderError::ViewModelMismatch { .. }));
    }

    #[tokio::test]
    async fn test_separate_contexts_do_not_share_cache() {
        let provider = Arc::new(CountingProvider::new(
            ViewModelKind::Account,
            ViewModel::Account(AccountView {
                display_name: "dev".to_string(),
                email: "dev@example.com".to_string(),
            }),
        ));
        let registry = ProviderRegistry::new().register(provider.clone());

        let mut first = DataContext::new(&registry);
        first.get(ViewModelKind::Account).await.unwrap();
        let mut second = DataContext::new(&registry);
        second.get(ViewModelKind::Account).await.unwrap();

        // 每个请求独立缓存，不跨请求泄漏
        assert_eq!(provider.call_count(), 2);
    }
}
