//! 局部重渲染核心
//!
//! 交互执行后声明写入的数据域（DataMutations），选择器将其与每个
//! 已注册组件声明的数据依赖（DataDependencies）求交集，只重新渲染
//! 受影响的组件。视图数据通过请求级缓存（DataContext）按需解析，
//! 同一请求内每个视图模型最多计算一次

pub mod component;
pub mod context;
pub mod dependencies;
pub mod selector;
pub mod view_model;

pub use component::{ComponentKind, ComponentRegistry};
pub use context::{DataContext, ProviderRegistry, RenderError, ViewModelProvider};
pub use dependencies::{DataDependencies, DataMutations};
pub use selector::{render_affected, render_all, select, to_body, Fragment};
pub use view_model::{ViewModel, ViewModelKind};
