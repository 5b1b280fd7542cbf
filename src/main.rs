//! pii-gateway - PII 检测与匿名化服务的 REST API
//!
//! 启动流程：加载配置 → 初始化日志 → 构建静态路由表 → 启动 HTTP 服务器

use pii_gateway::config::{load_config, print_config, LogConfig};
use pii_gateway::infrastructure::gateway::RouteTable;
use pii_gateway::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("pii-gateway v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 路由表启动时构建一次，之后只读
    let state = AppState::new(RouteTable::v1());

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，`RUST_LOG` 优先于配置
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},tower_http=debug", log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
