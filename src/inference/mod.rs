//! 推理服务抽象层
//!
//! 定义聊天补全调用的统一接口，以及发往上游的消息类型

pub mod client;
mod constants;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use client::GitHubModelsClient;
pub use constants::{API_TIMEOUT_SECS, DEFAULT_MODEL, INFERENCE_ENDPOINT};

/// 消息角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// Prompt 中的一条消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// ChatCompletion Trait - 聊天补全服务的统一接口
///
/// 进程启动时构造一次，通过 `AppState` 注入到请求处理器中
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// 使用的模型标识（用于日志）
    fn model(&self) -> &str;

    /// 发送消息并返回第一个候选回复的文本
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String>;
}
