//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - GitHub Models 访问令牌与模型标识
//! - 静态资源根目录

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::inference::{DEFAULT_MODEL, INFERENCE_ENDPOINT};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5050;

/// 默认静态资源根目录：项目安装目录，与进程工作目录无关
const DEFAULT_STATIC_ROOT: &str = env!("CARGO_MANIFEST_DIR");

/// 应用配置
///
/// 启动时加载一次，之后只读
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// GitHub Models 访问令牌
    pub token: String,
    /// 模型标识
    pub model: String,
    /// 推理服务地址（固定值，不从环境变量读取）
    pub endpoint: String,
    /// 静态资源根目录
    pub static_root: PathBuf,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `GITHUB_TOKEN`: 推理服务访问令牌（**必需**）
    /// - `GITHUB_MODEL`: 模型标识（默认: "openai/gpt-4.1"）
    /// - `ADVISOR_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `ADVISOR_PORT`: 服务器监听端口（默认: 5050）
    /// - `ADVISOR_STATIC_ROOT`: 静态资源根目录（默认: 项目安装目录）
    ///
    /// # 错误
    ///
    /// - 如果 `GITHUB_TOKEN` 未设置或为空
    /// - 如果 `ADVISOR_PORT` 不是有效的端口号
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 通过任意键值查找函数加载配置
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (host, port) = address_from_lookup(&lookup)?;

        let token = lookup("GITHUB_TOKEN")
            .filter(|t| !t.trim().is_empty())
            .context("Missing GITHUB_TOKEN environment variable")?;

        let model = lookup("GITHUB_MODEL")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let static_root = lookup("ADVISOR_STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_ROOT));

        Ok(Self {
            host,
            port,
            token,
            model,
            endpoint: INFERENCE_ENDPOINT.to_string(),
            static_root,
        })
    }

    /// 只加载服务器地址，不要求访问令牌（供 `test` 命令使用）
    pub fn address_from_env() -> Result<(String, u16)> {
        address_from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// 获取静态资源根目录
    pub fn static_root(&self) -> &Path {
        &self.static_root
    }
}

fn address_from_lookup<F>(lookup: &F) -> Result<(String, u16)>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("ADVISOR_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = match lookup("ADVISOR_PORT") {
        Some(raw) => raw
            .parse()
            .context("ADVISOR_PORT must be a valid port number")?,
        None => DEFAULT_PORT,
    };

    Ok((host, port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = load(&[("GITHUB_TOKEN", "ghp_test")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5050);
        assert_eq!(config.token, "ghp_test");
        assert_eq!(config.model, "openai/gpt-4.1");
        assert_eq!(config.endpoint, "https://models.github.ai/inference");
        assert_eq!(config.static_root(), Path::new(env!("CARGO_MANIFEST_DIR")));
        assert!(config.static_root().is_absolute());
    }

    #[test]
    fn missing_token_is_fatal() {
        let err = load(&[("GITHUB_MODEL", "openai/gpt-4o")]).unwrap_err();
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn blank_token_is_treated_as_missing() {
        assert!(load(&[("GITHUB_TOKEN", "   ")]).is_err());
    }

    #[test]
    fn overrides_are_honoured() {
        let config = load(&[
            ("GITHUB_TOKEN", "t"),
            ("GITHUB_MODEL", "openai/gpt-4o-mini"),
            ("ADVISOR_HOST", "127.0.0.1"),
            ("ADVISOR_PORT", "8081"),
            ("ADVISOR_STATIC_ROOT", "/srv/app"),
        ])
        .unwrap();

        assert_eq!(config.model, "openai/gpt-4o-mini");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);
        assert_eq!(config.static_root(), Path::new("/srv/app"));
    }

    #[test]
    fn address_does_not_need_a_token() {
        let lookup = |key: &str| match key {
            "ADVISOR_PORT" => Some("6060".to_string()),
            _ => None,
        };
        let (host, port) = address_from_lookup(&lookup).unwrap();

        assert_eq!(host, "0.0.0.0");
        assert_eq!(port, 6060);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("GITHUB_TOKEN", "t"), ("ADVISOR_PORT", "fifty")]).unwrap_err();
        assert!(err.to_string().contains("ADVISOR_PORT"));
    }

    #[test]
    fn endpoint_ignores_environment() {
        let config = load(&[
            ("GITHUB_TOKEN", "t"),
            ("GITHUB_ENDPOINT", "http://localhost:1"),
        ])
        .unwrap();
        assert_eq!(config.endpoint, INFERENCE_ENDPOINT);
    }
}
