//! 视图模型
//!
//! Provider 计算出的请求级只读数据，供组件渲染函数消费。
//! 每个视图模型所属的数据域在 `render::view_model` 中声明

use serde::Serialize;
use uuid::Uuid;

use super::todo::Todo;

/// 待办列表项视图
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TodoItemView {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

impl From<&Todo> for TodoItemView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            completed: todo.completed,
        }
    }
}

/// 待办列表视图
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TodoListView {
    /// 按创建顺序排列的列表项
    pub items: Vec<TodoItemView>,
    /// 未完成数量
    pub remaining: usize,
}

impl TodoListView {
    /// 从领域对象构建列表视图
    pub fn from_todos(todos: &[Todo]) -> Self {
        let remaining = todos.iter().filter(|t| !t.completed).count();
        Self {
            items: todos.iter().map(TodoItemView::from).collect(),
            remaining,
        }
    }
}

/// 待办统计视图
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TodoStatsView {
    pub total: usize,
    pub completed: usize,
    pub remaining: usize,
}

impl TodoStatsView {
    /// 从领域对象构建统计视图
    pub fn from_todos(todos: &[Todo]) -> Self {
        let completed = todos.iter().filter(|t| t.completed).count();
        Self {
            total: todos.len(),
            completed,
            remaining: todos.len() - completed,
        }
    }
}

/// 账户面板视图
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AccountView {
    pub display_name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_view_counts_remaining() {
        let mut todos = vec![Todo::new("a"), Todo::new("b"), Todo::new("c")];
        todos[1].toggle();

        let view = TodoListView::from_todos(&todos);
        assert_eq!(view.items.len(), 3);
        assert_eq!(view.remaining, 2);
    }

    #[test]
    fn test_stats_view_totals() {
        let mut todos = vec![Todo::new("a"), Todo::new("b")];
        todos[0].toggle();

        let view = TodoStatsView::from_todos(&todos);
        assert_eq!(view.total, 2);
        assert_eq!(view.completed, 1);
        assert_eq!(view.remaining, 1);
    }
}
