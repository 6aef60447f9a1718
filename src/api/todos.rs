//! 待办管理 API
//!
//! 包含 /todos, /todos/:id/toggle, /todos/:id 端点。
//! 变更类端点的响应体是受影响组件的 HTML 片段（局部更新语义）

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
    http::StatusCode,
    routing::{delete, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::services::todos;
use crate::state::AppState;

/// 新建待办请求
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

/// 创建待办管理路由
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todos", post(create_todo))
        .route("/todos/:id/toggle", post(toggle_todo))
        .route("/todos/:id", delete(delete_todo))
}

/// 新建待办，返回受影响组件的片段
///
/// POST /todos
async fn create_todo(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTodoRequest>,
) -> ApiResult<impl IntoResponse> {
    let (_todo, mutations) = todos::add_todo(&state, &req.title).await?;
    let body = super::rerender(&state, &mutations).await?;
    Ok((StatusCode::CREATED, body))
}

/// 切换完成状态，返回受影响组件的片段
///
/// POST /todos/:id/toggle
async fn toggle_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_todo_id(&id)?;
    let mutations = todos::toggle_todo(&state, id).await?;
    super::rerender(&state, &mutations).await
}

/// 删除待办，返回受影响组件的片段
///
/// DELETE /todos/:id
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_todo_id(&id)?;
    let mutations = todos::remove_todo(&state, id).await?;
    super::rerender(&state, &mutations).await
}

/// 解析路径中的待办 id
fn parse_todo_id(raw: &str) -> ApiResult<Uuid> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("invalid todo id"))
}
