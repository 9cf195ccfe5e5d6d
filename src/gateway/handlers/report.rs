//! 练习报告建议处理器

use anyhow::Context;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use std::time::Duration;

use crate::advice::{build_messages, AdviceRequest, MISSING_QUESTION};
use crate::gateway::{handlers::internal_error, state::AppState};
use crate::inference::API_TIMEOUT_SECS;

#[derive(Serialize)]
struct AnswerResponse {
    answer: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

/// POST /api/ai-report 处理器
pub async fn handle_ai_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    let request = AdviceRequest::from_request(content_type, &body);

    let Some(question) = request.question() else {
        tracing::info!("rejected: missing question");
        let error = ErrorResponse {
            error: MISSING_QUESTION,
        };
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    };

    let completion = state.completion();

    let result: anyhow::Result<String> = async {
        let messages = build_messages(&request.report, question)?;

        tracing::info!(
            model = completion.model(),
            question_chars = question.chars().count(),
            prompt_bytes = messages.iter().map(|m| m.content.len()).sum::<usize>(),
            "request"
        );

        let answer = tokio::time::timeout(
            Duration::from_secs(API_TIMEOUT_SECS),
            completion.complete(messages),
        )
        .await
        .context("Inference call timed out")??;
        tracing::info!(answer_chars = answer.chars().count(), "response");
        Ok(answer)
    }
    .await;

    match result {
        Ok(answer) => Json(AnswerResponse { answer }).into_response(),
        Err(err) => internal_error(err),
    }
}

/// OPTIONS /api/ai-report 预检处理器
pub async fn handle_preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}
