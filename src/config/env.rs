//! 环境变量配置加载

use std::env;

/// 常量定义
pub mod constants {
    /// 服务版本
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    /// 服务名称
    pub const SERVICE_NAME: &str = "todo-fragments";
    /// 默认监听端口
    pub const DEFAULT_PORT: u16 = 8807;
    /// 待办标题最大长度
    pub const MAX_TITLE_LEN: usize = 200;
}

/// 环境配置
#[derive(Clone, Debug)]
pub struct EnvConfig {
    /// 监听地址
    pub bind_addr: String,
    /// 服务监听端口
    pub port: u16,
    /// 初始账户显示名称
    pub account_display_name: String,
    /// 初始账户邮箱
    pub account_email: String,
}

impl EnvConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(constants::DEFAULT_PORT);

        let account_display_name =
            env::var("ACCOUNT_DISPLAY_NAME").unwrap_or_else(|_| "Guest".to_string());
        let account_email =
            env::var("ACCOUNT_EMAIL").unwrap_or_else(|_| "guest@example.com".to_string());

        Self {
            bind_addr,
            port,
            account_display_name,
            account_email,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: constants::DEFAULT_PORT,
            account_display_name: "Guest".to_string(),
            account_email: "guest@example.com".to_string(),
        }
    }
}

/// 运行时配置（命令行覆盖）
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    /// 端口覆盖
    pub port_override: Option<u16>,
}
