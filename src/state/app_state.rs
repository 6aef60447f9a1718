//! 应用状态

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::config::env::EnvConfig;
use crate::domain::Account;
use crate::render::{ComponentRegistry, ProviderRegistry, RenderError};
use crate::services::providers::{AccountProvider, TodoListProvider, TodoStatsProvider};

use super::account_store::AccountStore;
use super::todo_store::TodoStore;

/// 全局 shutdown token，用于优雅关闭
static GLOBAL_SHUTDOWN: std::sync::OnceLock<CancellationToken> = std::sync::OnceLock::new();

/// 获取全局 shutdown token
pub fn get_shutdown_token() -> CancellationToken {
    GLOBAL_SHUTDOWN.get_or_init(CancellationToken::new).clone()
}

/// 触发全局 shutdown
pub fn trigger_shutdown() {
    if let Some(token) = GLOBAL_SHUTDOWN.get() {
        token.cancel();
    }
}

/// 应用状态
///
/// 启动时构建一次，以 `Arc` 共享给所有请求。
/// 组件注册表与 Provider 注册表在此之后只读
pub struct AppState {
    /// 环境配置
    pub config: EnvConfig,
    /// 服务启动时间
    pub started_at: DateTime<Utc>,
    /// 待办存储
    pub todos: TodoStore,
    /// 账户存储
    pub account: AccountStore,
    /// 视图模型 Provider 注册表
    pub providers: ProviderRegistry,
    /// 服务端组件注册表
    pub components: ComponentRegistry,
}

impl AppState {
    /// 构建应用状态并校验组件依赖的 Provider 均已注册
    pub fn new(config: EnvConfig) -> Result<Arc<Self>, RenderError> {
        let todos = TodoStore::new();
        let account = AccountStore::new(Account::new(
            config.account_display_name.clone(),
            config.account_email.clone(),
        ));

        let providers = ProviderRegistry::new()
            .register(Arc::new(TodoListProvider::new(todos.clone())))
            .register(Arc::new(TodoStatsProvider::new(todos.clone())))
            .register(Arc::new(AccountProvider::new(account.clone())));
        let components = ComponentRegistry::standard();

        // 缺 Provider 属配置错误，启动阶段直接失败
        providers.validate_components(&components)?;

        Ok(Arc::new(Self {
            config,
            started_at: Utc::now(),
            todos,
            account,
            providers,
            components,
        }))
    }
}
