//! Practice Advisor - 练习报告 AI 建议中继服务
//!
//! 接收用户问题和 JSON 格式的练习报告，组装成 Prompt 转发给 GitHub Models，
//! 并把模型的文本回答返回给调用方。同一进程还提供前端静态资源。
//!
//! # 命令行接口
//!
//! - `serve`: 启动 HTTP 服务器（默认命令）
//! - `test`: 向本地服务器发送测试请求

mod advice;
mod commands;
mod config;
mod gateway;
mod inference;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use gateway::DeploymentMode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Practice Advisor CLI
#[derive(Parser)]
#[command(name = "practice-advisor")]
#[command(about = "Music practice report advice relay", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// 可用的命令
#[derive(Subcommand)]
enum Commands {
    /// 启动 HTTP 服务器
    Serve {
        /// 只提供 API，不提供静态资源和跨域头
        #[arg(long)]
        api_only: bool,
    },
    /// 向本地服务器发送测试请求
    Test {
        /// 自定义问题
        question: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 文件（如果存在）
    if let Ok(dotenv_path) = std::env::var("ADVISOR_ENV_FILE") {
        dotenvy::from_path(&dotenv_path).ok();
    } else {
        dotenvy::dotenv().ok();
    }

    init_tracing();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve { api_only: false }) {
        Commands::Serve { api_only } => {
            let config = Config::from_env()?;
            let mode = if api_only {
                DeploymentMode::ApiOnly
            } else {
                DeploymentMode::Full
            };
            commands::serve_command(config, mode).await
        }
        Commands::Test { question } => {
            let (host, port) = Config::address_from_env()?;
            commands::test_command(&host, port, question).await
        }
    }
}

/// 初始化日志系统，`ADVISOR_LOG_JSON=1` 时输出 JSON 行
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "practice_advisor=info".into());

    let json = std::env::var("ADVISOR_LOG_JSON")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_thread_names(false),
            )
            .init();
    }
}
