//! Serve 命令 - 启动 API 服务器
//!
//! 此模块实现 `serve` 命令，启动 HTTP 服务器，提供练习报告建议接口和前端静态资源。

use anyhow::Result;

use crate::config::Config;
use crate::gateway::{self, DeploymentMode};

/// 执行服务器启动命令
///
/// # 参数
///
/// * `config` - 应用配置，包含监听地址、令牌、模型等信息
/// * `mode` - 部署模式；`ApiOnly` 时不提供静态资源和跨域头
///
/// 支持优雅关闭（Ctrl+C 或 SIGTERM）
pub async fn serve_command(config: Config, mode: DeploymentMode) -> Result<()> {
    gateway::serve(config, mode).await
}
