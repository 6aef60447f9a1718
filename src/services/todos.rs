//! 待办工作流
//!
//! 每个交互执行后返回结果与其写入的数据域声明（DataMutations），
//! 供重渲染选择器决定需要刷新的组件

use tracing::info;
use uuid::Uuid;

use crate::config::env::constants::MAX_TITLE_LEN;
use crate::domain::{data_domains, Todo};
use crate::error::{ApiError, ApiResult};
use crate::render::DataMutations;
use crate::state::AppState;

/// 新建待办
///
/// 校验失败时不发生任何变更，也不触发重渲染
pub async fn add_todo(state: &AppState, title: &str) -> ApiResult<(Todo, DataMutations)> {
    let title = title.trim();
    if title.is_empty() {
        return Err(ApiError::bad_request("todo title must not be empty"));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(ApiError::bad_request(format!(
            "todo title exceeds {} characters",
            MAX_TITLE_LEN
        )));
    }

    let todo = Todo::new(title);
    state.todos.insert(todo.clone()).await;
    info!(todo_id = %todo.id, "todo created");

    Ok((todo, DataMutations::of([data_domains::TODOS])))
}

/// 切换待办完成状态
pub async fn toggle_todo(state: &AppState, id: Uuid) -> ApiResult<DataMutations> {
    if !state.todos.toggle(id).await {
        return Err(ApiError::not_found("todo"));
    }
    info!(todo_id = %id, "todo toggled");
    Ok(DataMutations::of([data_domains::TODOS]))
}

/// 删除待办
///
/// 删除没有可见回显，但列表仍需刷新掉被移除的条目，
/// 因此依旧声明写入 "todos" 域
pub async fn remove_todo(state: &AppState, id: Uuid) -> ApiResult<DataMutations> {
    if !state.todos.remove(id).await {
        return Err(ApiError::not_found("todo"));
    }
    info!(todo_id = %id, "todo removed");
    Ok(DataMutations::of([data_domains::TODOS]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::EnvConfig;

    fn test_state() -> std::sync::Arc<AppState> {
        AppState::new(EnvConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_add_todo_declares_todos_domain() {
        let state = test_state();
        let (todo, mutations) = add_todo(&state, "  write tests  ").await.unwrap();

        assert_eq!(todo.title, "write tests");
        assert!(mutations.contains(data_domains::TODOS));
        assert_eq!(state.todos.count().await, 1);
    }

    #[tokio::test]
    async fn test_add_todo_rejects_blank_title() {
        let state = test_state();
        let err = add_todo(&state, "   ").await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(state.todos.count().await, 0);
    }

    #[tokio::test]
    async fn test_add_todo_rejects_oversized_title() {
        let state = test_state();
        let title = "x".repeat(MAX_TITLE_LEN + 1);
        let err = add_todo(&state, &title).await.unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_toggle_unknown_todo_is_not_found() {
        let state = test_state();
        let err = toggle_todo(&state, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_remove_declares_todos_domain() {
        let state = test_state();
        let (todo, _) = add_todo(&state, "x").await.unwrap();

        let mutations = remove_todo(&state, todo.id).await.unwrap();
        assert!(mutations.contains(data_domains::TODOS));
        assert_eq!(state.todos.count().await, 0);
    }
}
