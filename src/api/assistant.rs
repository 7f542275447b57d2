//! 助手端点
//!
//! 交互流程的服务端版本：识别主题生成意图、调用模型并返回提取出的主题文件。

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use super::{method_not_allowed, parse_prompt, INVALID_QUESTION};
use crate::error::{AppError, AppResult};
use crate::models::{AssistantResponse, SuggestQuestionsResponse};
use crate::services::AssistantError;
use crate::state::AppState;

const OFF_TOPIC: &str = "This AI tool only answers WordPress-related questions. Please ask about WordPress themes, plugins, development, or functionality.";

const GENERATION_FAILED: &str = "An error occurred while generating the response";

/// 助手处理器
async fn ask_assistant(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Json<AssistantResponse>> {
    let request_id = Uuid::new_v4().to_string()[..8].to_string();
    let prompt =
        parse_prompt(&body).ok_or_else(|| AppError::BadRequest(INVALID_QUESTION.to_string()))?;

    info!("[{}] Assistant request: prompt_len={}", request_id, prompt.len());

    let reply = state.assistant.respond(&prompt).await.map_err(|e| match e {
        AssistantError::EmptyInput => AppError::BadRequest(INVALID_QUESTION.to_string()),
        AssistantError::OutOfScope => AppError::BadRequest(OFF_TOPIC.to_string()),
        AssistantError::Llm(e) => {
            error!("[{}] LLM API error: {}", request_id, e);
            AppError::Llm {
                status: StatusCode::BAD_GATEWAY,
                message: e
                    .provider_message()
                    .unwrap_or_else(|| GENERATION_FAILED.to_string()),
                detail: None,
            }
        }
    })?;

    info!(
        "[{}] Assistant completed: mode={:?}, files={}",
        request_id,
        reply.mode,
        reply.files.len()
    );

    Ok(Json(AssistantResponse {
        mode: reply.mode,
        answer: reply.answer,
        file_count: reply.files.len(),
        files: reply.files,
    }))
}

/// 获取建议问题
async fn suggest_questions(State(state): State<Arc<AppState>>) -> Json<SuggestQuestionsResponse> {
    Json(SuggestQuestionsResponse {
        questions: state.assistant.suggested_questions(),
    })
}

/// 创建助手路由
pub fn assistant_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/assistant",
            post(ask_assistant).fallback(method_not_allowed),
        )
        .route("/api/suggestions", get(suggest_questions))
}
