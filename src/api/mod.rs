//! API 模块
//!
//! HTTP handlers 和路由组装

pub mod account;
pub mod health;
pub mod pages;
pub mod todos;

use axum::response::Html;
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::ApiResult;
use crate::render::{self, DataContext, DataMutations};
use crate::state::AppState;

/// 构建完整的 API 路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages
        .merge(pages::router())
        // Health & Status
        .merge(health::router())
        // Todos
        .merge(todos::router())
        // Account
        .merge(account::router())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 按交互声明的变更做局部重渲染，返回拼接后的片段响应
///
/// DataContext 为本次请求新建，选中组件共享同一份缓存
pub(crate) async fn rerender(state: &AppState, mutations: &DataMutations) -> ApiResult<Html<String>> {
    let mut ctx = DataContext::new(&state.providers);
    let fragments = render::render_affected(&state.components, &mut ctx, mutations).await?;
    Ok(Html(render::to_body(&fragments)))
}
