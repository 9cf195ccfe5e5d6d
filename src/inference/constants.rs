//! GitHub Models 相关常量

/// 推理服务地址
pub const INFERENCE_ENDPOINT: &str = "https://models.github.ai/inference";

/// 聊天补全路径（相对于推理服务地址）
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Azure AI Inference API 版本
pub const API_VERSION: &str = "2024-05-01-preview";

/// 默认模型
pub const DEFAULT_MODEL: &str = "openai/gpt-4.1";

/// 采样参数
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;

/// 上游调用超时（秒），须小于路由层的请求超时，超时按 500 返回
pub const API_TIMEOUT_SECS: u64 = 240;

/// 连接池每个 host 的最大空闲连接数
pub const POOL_MAX_IDLE_PER_HOST: usize = 10;
