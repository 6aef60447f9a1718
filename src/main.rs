//! Todo Fragments - 数据依赖驱动的局部重渲染服务
//!
//! Usage:
//! - Normal mode: `todo-fragments`
//! - With custom port: `todo-fragments --port 8900`

use todo_fragments::RuntimeConfig;

/// 解析命令行参数
fn parse_args() -> RuntimeConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = RuntimeConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" if i + 1 < args.len() => {
                config.port_override = args[i + 1].parse().ok();
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    config
}

fn print_help() {
    println!("Todo Fragments - 数据依赖驱动的局部重渲染服务");
    println!();
    println!("USAGE:");
    println!("    todo-fragments [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --port <PORT>    Override the listening port");
    println!("    -h, --help       Print help information");
    println!();
    println!("EXAMPLES:");
    println!("    todo-fragments                # Normal mode");
    println!("    todo-fragments --port 8900    # Custom port");
}

fn main() {
    let config = parse_args();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    rt.block_on(async {
        todo_fragments::init_and_run(config).await;
    });
}
