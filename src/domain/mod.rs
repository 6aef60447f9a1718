//! 领域模型模块
//!
//! 纯数据结构，不依赖 axum/tokio

pub mod account;
pub mod todo;
pub mod view;

// Re-exports for convenience
pub use account::Account;
pub use todo::Todo;
pub use view::{AccountView, TodoItemView, TodoListView, TodoStatsView};

/// 数据域名称常量
///
/// 变更（DataMutations）和组件依赖都以这些名称为键，
/// 生产方和消费方通过这里的常量约定，避免散落的字符串字面量
pub mod data_domains {
    /// 待办列表相关状态
    pub const TODOS: &str = "todos";
    /// 账户资料相关状态
    pub const ACCOUNT: &str = "account";
}
