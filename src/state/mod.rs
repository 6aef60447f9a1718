//! 运行时状态模块
//!
//! 管理应用状态与进程内存储

pub mod account_store;
pub mod app_state;
pub mod todo_store;

pub use account_store::AccountStore;
pub use app_state::{get_shutdown_token, trigger_shutdown, AppState};
pub use todo_store::TodoStore;
