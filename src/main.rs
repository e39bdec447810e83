mod api;
mod application;
mod domain;
mod infrastructure;
mod ports;

use api::AppState;
use application::OrderQueryService;
use infrastructure::{AppConfig, ChannelAdapterRegistry, ChannelTransport, MySqlChannelDirectory};
use sqlx::MySqlPool;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // 加载环境变量
    dotenvy::dotenv().ok();

    info!("Starting Channel Adapter Service...");

    // 加载应用配置
    let config = AppConfig::from_env();

    // 创建数据库连接池
    info!("Connecting to database...");
    let pool = MySqlPool::connect(&config.database_url).await?;
    info!("Database connected successfully");

    // 创建渠道目录
    let directory = Arc::new(MySqlChannelDirectory::new(Arc::new(pool)));

    // 创建渠道传输层与适配器注册表
    let transport = ChannelTransport::new(config.channel_timeout())?;
    let registry = Arc::new(ChannelAdapterRegistry::with_builtin_channels(transport));
    info!(
        "Registered channels: {}",
        registry.supported_channels().join(", ")
    );

    // 创建查单服务
    let query_service = Arc::new(OrderQueryService::new(directory, registry));

    // 创建应用状态
    let app_state = AppState { query_service };

    // 创建路由
    let app = api::create_router(app_state);

    // 启动服务器
    let addr = config.server_addr();
    info!("Server listening on {}", addr);
    info!("Available endpoints:");
    info!("  GET  /health - Health check");
    info!("  POST /api/orders/query - Query order status from channel");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
