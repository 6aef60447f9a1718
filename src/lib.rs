//! Todo Fragments - 数据依赖驱动的局部重渲染服务
//!
//! 库入口

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod services;
pub mod state;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

pub use config::{EnvConfig, RuntimeConfig};

/// 初始化并运行服务
///
/// 加载配置、构建应用状态（含启动期 Provider 校验）、
/// 启动 HTTP 服务并等待优雅关闭
pub async fn init_and_run(runtime: RuntimeConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = EnvConfig::from_env();
    if let Some(port) = runtime.port_override {
        config.port = port;
    }

    let state = match state::AppState::new(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "startup validation failed");
            std::process::exit(1);
        }
    };

    let addr = format!("{}:{}", config.bind_addr, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, addr = %addr, "failed to bind");
            std::process::exit(1);
        }
    };
    info!(
        addr = %addr,
        version = config::env::constants::VERSION,
        components = state.components.len(),
        "todo-fragments listening"
    );

    let app = api::router(state);
    let shutdown = state::get_shutdown_token();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        tokio::select! {
            _ = shutdown.cancelled() => {}
            _ = tokio::signal::ctrl_c() => {
                info!("ctrl-c received, shutting down");
            }
        }
    });

    if let Err(e) = server.await {
        error!(error = %e, "server exited with error");
    }
    info!("shutdown complete");
}
