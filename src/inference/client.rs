//! GitHub Models 聊天补全客户端
//!
//! 通过 OpenAI 兼容的 `/chat/completions` 接口调用托管模型

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::constants::{
    API_TIMEOUT_SECS, API_VERSION, CHAT_COMPLETIONS_PATH, POOL_MAX_IDLE_PER_HOST, TEMPERATURE,
    TOP_P,
};
use super::{ChatCompletion, ChatMessage};

/// 发往上游的请求体
#[derive(Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
    temperature: f64,
    top_p: f64,
    model: &'a str,
}

/// 上游响应中我们关心的部分
#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

pub struct GitHubModelsClient {
    http: Client,
    url: String,
    token: String,
    model: String,
}

impl GitHubModelsClient {
    /// 创建客户端
    ///
    /// # 参数
    ///
    /// * `endpoint` - 推理服务地址，不含 `/chat/completions`
    /// * `token` - Bearer 令牌
    /// * `model` - 模型标识
    pub fn new(endpoint: &str, token: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .user_agent(user_agent())
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .build()
            .context("Failed to create inference HTTP client")?;

        Ok(Self {
            http,
            url: format!("{}{}", endpoint.trim_end_matches('/'), CHAT_COMPLETIONS_PATH),
            token: token.into(),
            model: model.into(),
        })
    }
}

#[async_trait]
impl ChatCompletion for GitHubModelsClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let body = CompletionRequest {
            messages: &messages,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            model: &self.model,
        };

        let response = self
            .http
            .post(&self.url)
            .query(&[("api-version", API_VERSION)])
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send request to inference endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Inference API error {}: {}", status, error_body);
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .context("Failed to parse inference API response")?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .context("Inference API returned no choices")?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

fn user_agent() -> String {
    format!("practice-advisor/{}", env!("CARGO_PKG_VERSION"))
}
