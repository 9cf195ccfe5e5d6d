//! HTTP 请求处理器

pub mod report;

pub use report::{handle_ai_report, handle_preflight};

use axum::{http::StatusCode, response::IntoResponse};

/// 将内部错误转换为不含细节的 500 响应
///
/// 错误详情只写入日志，不返回给调用方
fn internal_error(err: anyhow::Error) -> axum::response::Response {
    tracing::error!("request failed: {:#}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
