//! 账户资料 API
//!
//! 包含 /account 端点

use axum::{
    extract::State,
    response::Html,
    routing::put,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiResult;
use crate::services::account;
use crate::state::AppState;

/// 更新账户资料请求
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub display_name: String,
    pub email: String,
}

/// 创建账户路由
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/account", put(update_account))
}

/// 更新账户资料，返回受影响组件的片段
///
/// PUT /account
async fn update_account(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateAccountRequest>,
) -> ApiResult<Html<String>> {
    let (_account, mutations) = account::update_account(&state, &req.display_name, &req.email).await?;
    super::rerender(&state, &mutations).await
}
