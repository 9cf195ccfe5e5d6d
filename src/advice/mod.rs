//! 练习报告建议
//!
//! 解析入站请求并构造发往模型的 Prompt

pub mod prompt;
pub mod request;

pub use prompt::build_messages;
pub use request::{AdviceRequest, MISSING_QUESTION};
