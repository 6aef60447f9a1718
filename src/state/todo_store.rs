//! 待办事项存储
//!
//! 进程内存储，按创建顺序维护列表

use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Todo;

/// 待办事项存储
///
/// 句柄可廉价克隆，内部共享同一份数据
#[derive(Clone, Default)]
pub struct TodoStore {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl TodoStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 按创建顺序返回全部待办
    pub async fn list(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    /// 当前数量
    pub async fn count(&self) -> usize {
        self.todos.read().await.len()
    }

    /// 追加新待办
    pub async fn insert(&self, todo: Todo) {
        self.todos.write().await.push(todo);
    }

    /// 切换完成状态，返回是否找到该 id
    pub async fn toggle(&self, id: Uuid) -> bool {
        let mut todos = self.todos.write().await;
        match todos.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.toggle();
                true
            }
            None => false,
        }
    }

    /// 删除待办，返回是否找到该 id
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|t| t.id != id);
        todos.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_list_preserve_order() {
        let store = TodoStore::new();
        store.insert(Todo::new("first")).await;
        store.insert(Todo::new("second")).await;

        let todos = store.list().await;
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "first");
        assert_eq!(todos[1].title, "second");
    }

    #[tokio::test]
    async fn test_toggle_known_and_unknown_id() {
        let store = TodoStore::new();
        let todo = Todo::new("x");
        let id = todo.id;
        store.insert(todo).await;

        assert!(store.toggle(id).await);
        assert!(store.list().await[0].completed);
        assert!(!store.toggle(Uuid::new_v4()).await);
    }

    #[tokio::test]
    async fn test_remove_known_and_unknown_id() {
        let store = TodoStore::new();
        let todo = Todo::new("x");
        let id = todo.id;
        store.insert(todo).await;

        assert!(!store.remove(Uuid::new_v4()).await);
        assert_eq!(store.count().await, 1);
        assert!(store.remove(id).await);
        assert_eq!(store.count().await, 0);
    }
}
