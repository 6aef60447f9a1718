//! 待办事项领域模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 待办事项
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// 唯一标识
    pub id: Uuid,
    /// 标题
    pub title: String,
    /// 是否已完成
    pub completed: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// 创建新的待办事项（未完成状态）
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// 切换完成状态
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_is_pending() {
        let todo = Todo::new("write report");
        assert_eq!(todo.title, "write report");
        assert!(!todo.completed);
    }

    #[test]
    fn test_toggle_flips_completion() {
        let mut todo = Todo::new("x");
        todo.toggle();
        assert!(todo.completed);
        todo.toggle();
        assert!(!todo.completed);
    }
}
