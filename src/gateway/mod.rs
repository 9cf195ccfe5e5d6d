//! Gateway 应用层
//!
//! HTTP 服务器、路由和静态资源

mod handlers;
mod middleware;
mod state;

pub use state::AppState;

use anyhow::Result;
use axum::{
    http::StatusCode,
    middleware as axum_middleware,
    routing::post,
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::inference::GitHubModelsClient;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// 练习报告建议接口路径
pub const REPORT_PATH: &str = "/api/ai-report";

/// 部署模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    /// API + 跨域头 + 静态资源
    Full,
    /// 仅 API，不带跨域头，不提供静态资源
    ApiOnly,
}

pub async fn serve(config: Config, mode: DeploymentMode) -> Result<()> {
    let client = GitHubModelsClient::new(&config.endpoint, config.token.clone(), config.model.clone())?;
    let state = AppState::new(Arc::new(client));

    if mode == DeploymentMode::Full && !config.static_root().join("index.html").is_file() {
        tracing::warn!(
            "No index.html found in {}, GET / will return 404",
            config.static_root().display()
        );
    }

    let app = build_router(state, config.static_root(), mode);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(model = %config.model, ?mode, "Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn build_router(state: AppState, static_root: &Path, mode: DeploymentMode) -> Router {
    let app = match mode {
        DeploymentMode::Full => {
            let api_routes = Router::new().route(
                REPORT_PATH,
                post(handlers::handle_ai_report).options(handlers::handle_preflight),
            );
            Router::new()
                .merge(middleware::with_cors(api_routes))
                .fallback_service(ServeDir::new(static_root))
        }
        DeploymentMode::ApiOnly => {
            Router::new().route(REPORT_PATH, post(handlers::handle_ai_report))
        }
    };

    app.layer(
        ServiceBuilder::new()
            .layer(axum_middleware::from_fn(middleware::request_logger))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            )),
    )
    .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    tokio::select! {
        _ = ctrl_c => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
