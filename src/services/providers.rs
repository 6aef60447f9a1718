//! 视图模型 Provider 实现
//!
//! 每个 Provider 读取进程内存储并构建对应的视图模型，
//! 启动时按其类型标识注册到 ProviderRegistry

use async_trait::async_trait;

use crate::domain::view::{AccountView, TodoListView, TodoStatsView};
use crate::render::{RenderError, ViewModel, ViewModelKind, ViewModelProvider};
use crate::state::{AccountStore, TodoStore};

/// 待办列表视图 Provider
pub struct TodoListProvider {
    todos: TodoStore,
}

impl TodoListProvider {
    pub fn new(todos: TodoStore) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl ViewModelProvider for TodoListProvider {
    fn kind(&self) -> ViewModelKind {
        ViewModelKind::TodoList
    }

    async fn provide(&self) -> Result<ViewModel, RenderError> {
        let todos = self.todos.list().await;
        Ok(ViewModel::TodoList(TodoListView::from_todos(&todos)))
    }
}

/// 待办统计视图 Provider
pub struct TodoStatsProvider {
    todos: TodoStore,
}

impl TodoStatsProvider {
    pub fn new(todos: TodoStore) -> Self {
        Self { todos }
    }
}

#[async_trait]
impl ViewModelProvider for TodoStatsProvider {
    fn kind(&self) -> ViewModelKind {
        ViewModelKind::TodoStats
    }

    async fn provide(&self) -> Result<ViewModel, RenderError> {
        let todos = self.todos.list().await;
        Ok(ViewModel::TodoStats(TodoStatsView::from_todos(&todos)))
    }
}

/// 账户面板视图 Provider
pub struct AccountProvider {
    account: AccountStore,
}

impl AccountProvider {
    pub fn new(account: AccountStore) -> Self {
        Self { account }
    }
}

#[async_trait]
impl ViewModelProvider for AccountProvider {
    fn kind(&self) -> ViewModelKind {
        ViewModelKind::Account
    }

    async fn provide(&self) -> Result<ViewModel, RenderError> {
        let account = self.account.get().await;
        Ok(ViewModel::Account(AccountView {
            display_name: account.display_name,
            email: account.email,
        }))
    }
}
