//! 入站请求解析

use serde_json::{Map, Value};

/// 问题为空时返回给调用方的错误信息
pub const MISSING_QUESTION: &str = "Missing question";

/// `POST /api/ai-report` 的请求内容
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceRequest {
    /// 去除首尾空白后的问题
    pub question: String,
    /// 练习报告，缺省为 `{}`
    pub report: Value,
}

impl AdviceRequest {
    /// 按 `Content-Type` 解析请求
    ///
    /// 只有 JSON 类型（`application/json` 或 `application/*+json`）的请求体会被解析，
    /// 其他类型按空请求体处理
    pub fn from_request(content_type: Option<&str>, body: &[u8]) -> Self {
        if content_type.is_some_and(is_json_content_type) {
            Self::from_body(body)
        } else {
            Self::from_body(b"")
        }
    }

    /// 宽松地解析请求体
    ///
    /// 请求体为空、无法解析或不是 JSON 对象时按 `{}` 处理；
    /// `question` 不是字符串时视为缺失；
    /// `report` 缺失或为空值（null、false、0、""、[]、{}）时使用 `{}`
    pub fn from_body(body: &[u8]) -> Self {
        let payload: Value = serde_json::from_slice(body).unwrap_or(Value::Null);

        let question = payload
            .get("question")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let report = payload
            .get("report")
            .filter(|v| !is_empty_like(v))
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        Self { question, report }
    }

    /// 返回非空的问题
    pub fn question(&self) -> Option<&str> {
        if self.question.is_empty() {
            None
        } else {
            Some(&self.question)
        }
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn is_empty_like(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
