//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 请求方法不被允许
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 请求参数错误（包括非 WordPress 话题）
    #[error("请求错误: {0}")]
    BadRequest(String),

    /// 上游 LLM 调用失败
    ///
    /// `detail` 仅在非生产环境下返回给调用方
    #[error("LLM 错误: {message}")]
    Llm {
        status: StatusCode,
        message: String,
        detail: Option<String>,
    },

    /// 主题打包失败
    #[error("打包错误: {0}")]
    Packaging(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                "Method not allowed".to_string(),
                None,
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Llm {
                status,
                message,
                detail,
            } => (status, message, detail),
            AppError::Packaging(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        let body = match detail {
            Some(detail) => json!({ "message": message, "error": detail }),
            None => json!({ "message": message }),
        };

        (status, Json(body)).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
