//! 服务端组件与组件注册表
//!
//! 组件是封闭的变体集合，通过模式匹配分发渲染，不走虚调用。
//! 注册表在进程启动时构建一次，之后只读，可被多请求无锁并发读取

use super::context::{DataContext, RenderError};
use super::dependencies::DataDependencies;
use super::view_model::ViewModelKind;
use crate::domain::view::{AccountView, TodoListView, TodoStatsView};

/// 服务端组件
///
/// 每个变体对应一个可渲染的页面片段，暴露稳定 id、
/// 数据依赖声明和纯渲染函数
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    /// 待办列表
    TodoList,
    /// 待办统计条
    TodoStats,
    /// 账户面板
    AccountPanel,
}

impl ComponentKind {
    /// 稳定组件 id，客户端按此 id 做片段替换
    pub fn id(&self) -> &'static str {
        match self {
            ComponentKind::TodoList => "todo-list",
            ComponentKind::TodoStats => "todo-stats",
            ComponentKind::AccountPanel => "account-panel",
        }
    }

    /// 组件的数据依赖声明
    pub fn dependencies(&self) -> DataDependencies {
        match self {
            ComponentKind::TodoList => DataDependencies::on(&[ViewModelKind::TodoList]),
            ComponentKind::TodoStats => DataDependencies::on(&[ViewModelKind::TodoStats]),
            ComponentKind::AccountPanel => DataDependencies::on(&[ViewModelKind::Account]),
        }
    }

    /// 渲染组件内容（不含外层包装）
    pub async fn render(&self, ctx: &mut DataContext<'_>) -> Result<String, RenderError> {
        match self {
            ComponentKind::TodoList => {
                let vm = ctx.get(ViewModelKind::TodoList).await?;
                let view = vm.as_todo_list().ok_or(RenderError::Render {
                    component: self.id(),
                    message: "todo list view missing".to_string(),
                })?;
                Ok(render_todo_list(view))
            }
            ComponentKind::TodoStats => {
                let vm = ctx.get(ViewModelKind::TodoStats).await?;
                let view = vm.as_todo_stats().ok_or(RenderError::Render {
                    component: self.id(),
                    message: "todo stats view missing".to_string(),
                })?;
                Ok(render_todo_stats(view))
            }
            ComponentKind::AccountPanel => {
                let vm = ctx.get(ViewModelKind::Account).await?;
                let view = vm.as_account().ok_or(RenderError::Render {
                    component: self.id(),
                    message: "account view missing".to_string(),
                })?;
                Ok(render_account_panel(view))
            }
        }
    }
}

/// 组件注册表
///
/// 保持注册顺序，选中的组件按此顺序渲染，保证输出确定
pub struct ComponentRegistry {
    components: Vec<ComponentKind>,
}

impl ComponentRegistry {
    /// 按给定顺序注册组件
    pub fn new(components: Vec<ComponentKind>) -> Self {
        Self { components }
    }

    /// 应用默认的组件集合
    pub fn standard() -> Self {
        Self::new(vec![
            ComponentKind::TodoList,
            ComponentKind::TodoStats,
            ComponentKind::AccountPanel,
        ])
    }

    /// 按注册顺序遍历组件
    pub fn components(&self) -> impl Iterator<Item = ComponentKind> + '_ {
        self.components.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// HTML 转义用户提供的文本
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_todo_list(view: &TodoListView) -> String {
    let mut html = String::from("<ul class=\"todos\">");
    for item in &view.items {
        let class = if item.completed { "todo done" } else { "todo" };
        html.push_str(&format!(
            "<li class=\"{}\" data-id=\"{}\">{}</li>",
            class,
            item.id,
            escape_html(&item.title)
        ));
    }
    html.push_str("</ul>");
    html
}

fn render_todo_stats(view: &TodoStatsView) -> String {
    format!(
        "<p class=\"stats\">{} total, {} done, {} remaining</p>",
        view.total, view.completed, view.remaining
    )
}

fn render_account_panel(view: &AccountView) -> String {
    format!(
        "<p class=\"account\">{} &lt;{}&gt;</p>",
        escape_html(&view.display_name),
        escape_html(&view.email)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view::TodoItemView;
    use uuid::Uuid;

    #[test]
    fn test_component_ids_unique() {
        let registry = ComponentRegistry::standard();
        let ids: Vec<_> = registry.components().map(|c| c.id()).collect();
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn test_todo_list_markup_escapes_title() {
        let view = TodoListView {
            items: vec![TodoItemView {
                id: Uuid::nil(),
                title: "<script>alert(1)</script>".to_string(),
                completed: false,
            }],
            remaining: 1,
        };
        let html = render_todo_list(&view);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_completed_item_gets_done_class() {
        let view = TodoListView {
            items: vec![TodoItemView {
                id: Uuid::nil(),
                title: "ship it".to_string(),
                completed: true,
            }],
            remaining: 0,
        };
        assert!(render_todo_list(&view).contains("todo done"));
    }
}
