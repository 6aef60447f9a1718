//! 视图模型类型标识与标签联合
//!
//! DataContext 以 `ViewModelKind` 为缓存键；取值时对 `ViewModel`
//! 的变体做标签检查，类型不符时显式报错而不是依赖反射

use crate::domain::data_domains;
use crate::domain::view::{AccountView, TodoListView, TodoStatsView};

/// 视图模型类型标识
///
/// 封闭枚举，每个视图模型形状对应一个标识。
/// 同时作为 Provider 注册表的查找键（即规格中的 ProviderRef）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewModelKind {
    TodoList,
    TodoStats,
    Account,
}

impl ViewModelKind {
    /// 稳定的字符串标识（日志与错误信息用）
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewModelKind::TodoList => "todo_list",
            ViewModelKind::TodoStats => "todo_stats",
            ViewModelKind::Account => "account",
        }
    }

    /// 该视图模型读取的数据域
    ///
    /// 依赖对到数据域的映射在此显式声明，不做任何推断
    pub fn domains(&self) -> &'static [&'static str] {
        match self {
            ViewModelKind::TodoList => &[data_domains::TODOS],
            ViewModelKind::TodoStats => &[data_domains::TODOS],
            ViewModelKind::Account => &[data_domains::ACCOUNT],
        }
    }
}

impl std::fmt::Display for ViewModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 视图模型标签联合
///
/// Provider 的返回值，每个变体对应一个 `ViewModelKind`
#[derive(Clone, Debug, PartialEq)]
pub enum ViewModel {
    TodoList(TodoListView),
    TodoStats(TodoStatsView),
    Account(AccountView),
}

impl ViewModel {
    /// 变体对应的类型标识
    pub fn kind(&self) -> ViewModelKind {
        match self {
            ViewModel::TodoList(_) => ViewModelKind::TodoList,
            ViewModel::TodoStats(_) => ViewModelKind::TodoStats,
            ViewModel::Account(_) => ViewModelKind::Account,
        }
    }

    /// 取待办列表视图，变体不符时返回 None
    pub fn as_todo_list(&self) -> Option<&TodoListView> {
        match self {
            ViewModel::TodoList(v) => Some(v),
            _ => None,
        }
    }

    /// 取待办统计视图，变体不符时返回 None
    pub fn as_todo_stats(&self) -> Option<&TodoStatsView> {
        match self {
            ViewModel::TodoStats(v) => Some(v),
            _ => None,
        }
    }

    /// 取账户视图，变体不符时返回 None
    pub fn as_account(&self) -> Option<&AccountView> {
        match self {
            ViewModel::Account(v) => Some(v),
            _ => None,
        }
    }
}
