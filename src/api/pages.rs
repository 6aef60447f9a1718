//! 整页渲染
//!
//! GET / 通过同一份 DataContext 渲染全部已注册组件，
//! 外层包装的元素 id 与局部更新响应一致，客户端按 id 替换片段

use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;

use crate::config::env::constants::SERVICE_NAME;
use crate::error::ApiResult;
use crate::render::{self, DataContext};
use crate::state::AppState;

/// 创建页面路由
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

/// 片段替换脚本
///
/// 提交后把响应里的片段按元素 id 换入当前页面，未被选中的组件保持原状
const SWAP_SCRIPT: &str = r#"<script>
async function swapFragments(resp) {
  const holder = document.createElement('div');
  holder.innerHTML = await resp.text();
  for (const next of holder.children) {
    const current = document.getElementById(next.id);
    if (current) current.replaceWith(next);
  }
}
document.getElementById('add-todo').addEventListener('submit', async (e) => {
  e.preventDefault();
  const input = e.target.elements.title;
  const resp = await fetch('/todos', {
    method: 'POST',
    headers: {'content-type': 'application/json'},
    body: JSON.stringify({title: input.value}),
  });
  if (resp.ok) { input.value = ''; await swapFragments(resp); }
});
</script>"#;

/// 整页：页面外壳 + 全部组件
///
/// GET /
async fn index(State(state): State<Arc<AppState>>) -> ApiResult<Html<String>> {
    let mut ctx = DataContext::new(&state.providers);
    let fragments = render::render_all(&state.components, &mut ctx).await?;

    let mut page = String::new();
    page.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    page.push_str(&format!("<title>{}</title></head><body>", SERVICE_NAME));
    page.push_str("<h1>Todos</h1>");
    page.push_str(
        "<form id=\"add-todo\">\
         <input name=\"title\" placeholder=\"What needs doing?\">\
         <button type=\"submit\">Add</button></form>",
    );
    page.push_str(&render::to_body(&fragments));
    page.push_str(SWAP_SCRIPT);
    page.push_str("</body></html>");

    Ok(Html(page))
}
