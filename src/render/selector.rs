//! 重渲染选择器
//!
//! 选中规则：组件依赖隐含的数据域与本次交互写入的数据域交集非空。
//! 选中的组件按注册顺序、共享同一 DataContext 渲染，
//! 任一组件失败则整批中止，不输出部分片段

use tracing::debug;

use super::component::{ComponentKind, ComponentRegistry};
use super::context::{DataContext, RenderError};
use super::dependencies::DataMutations;

/// 渲染结果片段
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    /// 所属组件 id
    pub component_id: &'static str,
    /// 渲染出的标记文本
    pub html: String,
}

impl Fragment {
    /// 带外层包装的片段：客户端按元素 id 替换
    pub fn wrapped(&self) -> String {
        format!("<div id=\"{}\">{}</div>", self.component_id, self.html)
    }
}

/// 选出受变更影响的组件（不渲染）
///
/// 空变更集选不中任何组件；变更中没有组件声明的数据域是合法的空操作
pub fn select(registry: &ComponentRegistry, mutations: &DataMutations) -> Vec<ComponentKind> {
    if mutations.is_empty() {
        return Vec::new();
    }
    registry
        .components()
        .filter(|c| c.dependencies().intersects(mutations))
        .collect()
}

/// 渲染受变更影响的组件，按选中顺序返回片段
pub async fn render_affected(
    registry: &ComponentRegistry,
    ctx: &mut DataContext<'_>,
    mutations: &DataMutations,
) -> Result<Vec<Fragment>, RenderError> {
    let selected = select(registry, mutations);
    debug!(
        selected = selected.len(),
        registered = registry.len(),
        "re-render selection complete"
    );

    let mut fragments = Vec::with_capacity(selected.len());
    for component in selected {
        let html = component.render(ctx).await?;
        fragments.push(Fragment {
            component_id: component.id(),
            html,
        });
    }
    Ok(fragments)
}

/// 渲染注册表中的全部组件（整页渲染用），与变更选择共用同一渲染契约
pub async fn render_all(
    registry: &ComponentRegistry,
    ctx: &mut DataContext<'_>,
) -> Result<Vec<Fragment>, RenderError> {
    let mut fragments = Vec::with_capacity(registry.len());
    for component in registry.components() {
        let html = component.render(ctx).await?;
        fragments.push(Fragment {
            component_id: component.id(),
            html,
        });
    }
    Ok(fragments)
}

/// 将片段序列拼接为响应体
pub fn to_body(fragments: &[Fragment]) -> String {
    fragments.iter().map(Fragment::wrapped).collect()
}
