//! WordPress 问答端点
//!
//! 只接受 POST `{ "prompt": string }`，返回 `{ "answer": string }`。

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info};

use super::{method_not_allowed, parse_prompt, INVALID_QUESTION};
use crate::error::{AppError, AppResult};
use crate::models::AskResponse;
use crate::services::AssistantError;
use crate::state::AppState;

const OFF_TOPIC: &str = "This AI tool only answers WordPress-related questions. Please ask about WordPress themes, plugins, development, hooks, or functionality.";

const GENERATION_FAILED: &str = "Error generating response. Please try again later.";

/// 问答处理器
async fn ask_wordpress(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<AskResponse>> {
    let prompt =
        parse_prompt(&body).ok_or_else(|| AppError::BadRequest(INVALID_QUESTION.to_string()))?;

    match state.assistant.answer_question(&prompt).await {
        Ok(answer) => {
            info!("Answered WordPress question: answer_len={}", answer.len());
            Ok(Json(AskResponse { answer }))
        }
        Err(AssistantError::OutOfScope | AssistantError::EmptyInput) => {
            Err(AppError::BadRequest(OFF_TOPIC.to_string()))
        }
        Err(AssistantError::Llm(e)) => {
            error!("LLM API error: {}", e);
            Err(AppError::Llm {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: GENERATION_FAILED.to_string(),
                detail: (!state.config.is_production()).then(|| e.to_string()),
            })
        }
    }
}

/// 创建问答路由
pub fn ask_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/ask-wordpress",
        post(ask_wordpress).fallback(method_not_allowed),
    )
}
