//! API 路由模块

mod ask;
mod assistant;
mod health;
mod theme;

pub use ask::ask_routes;
pub use assistant::assistant_routes;
pub use health::health_routes;
pub use theme::theme_routes;

use axum::Router;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// 请求体缺少有效问题时的提示
const INVALID_QUESTION: &str = "Please provide a valid question.";

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(ask_routes())
        .merge(assistant_routes())
        .merge(theme_routes())
        .with_state(state)
}

/// 非 POST 请求统一返回 405
async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// 从请求体中读取 `prompt`
///
/// 请求体不是 JSON、缺少 `prompt`、`prompt` 不是字符串或为空时返回 None
fn parse_prompt(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let prompt = value.get("prompt")?.as_str()?;
    if prompt.is_empty() {
        None
    } else {
        Some(prompt.to_string())
    }
}
