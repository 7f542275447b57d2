//! WordPress AI Assistant - Rust Backend
//!
//! 使用 axum 框架构建的后端服务：WordPress 问答、主题生成与主题压缩包下载。

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod llm;
mod models;
mod services;
mod state;

use api::create_api_routes;
use config::AppConfig;
use state::create_shared_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 读取 .env（若存在）
    dotenv::dotenv().ok();

    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wp_assistant=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting WordPress AI Assistant backend...");

    // 加载配置，API 密钥必须在启动时注入
    let config = AppConfig::load().context("failed to load configuration")?;
    if config.api_key.trim().is_empty() {
        anyhow::bail!(
            "API key is not configured: set WP_ASSISTANT_API_KEY (or GEMINI_API_KEY) or api_key in config.json"
        );
    }
    info!(
        "Configuration loaded: model={}, environment={:?}",
        config.model, config.environment
    );

    let addr = config.socket_addr()?;

    // 创建共享状态
    let state = create_shared_state(config).context("failed to create LLM client")?;

    // 配置 CORS（允许所有来源）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建路由
    let app = Router::new()
        .merge(create_api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    info!("Server listening on: {}", addr);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
