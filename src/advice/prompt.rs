//! Prompt 构造

use anyhow::{Context, Result};
use serde_json::Value;

use crate::inference::ChatMessage;

/// 固定的系统指令，所有请求相同
pub const SYSTEM_PROMPT: &str =
    "You are a music practice assistant. Provide concise, actionable feedback in Chinese.";

/// 将报告序列化为缩进两格的 JSON，非 ASCII 字符原样保留
pub fn render_report(report: &Value) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize practice report")
}

/// 用户消息模板
pub fn user_prompt(report_text: &str, question: &str) -> String {
    format!(
        "以下是演奏报告(JSON)：\n{report_text}\n\n用户问题：\n{question}\n\n请给出要点清晰、可执行的建议。"
    )
}

/// 构造发往模型的两条消息：系统指令 + 报告与问题
pub fn build_messages(report: &Value, question: &str) -> Result<Vec<ChatMessage>> {
    let report_text = render_report(report)?;
    Ok(vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(user_prompt(&report_text, question)),
    ])
}
