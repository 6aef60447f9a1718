//! 业务服务模块
//!
//! 工作流执行交互并声明写入的数据域；Provider 为组件渲染计算视图数据

pub mod account;
pub mod providers;
pub mod todos;
