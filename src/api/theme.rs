//! 主题压缩包下载端点

use axum::{
    body::Bytes,
    http::header,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::sync::Arc;
use tracing::{error, info};

use super::method_not_allowed;
use crate::error::{AppError, AppResult};
use crate::models::ArchiveRequest;
use crate::services::theme_packager::{build_archive, ARCHIVE_FILE_NAME};
use crate::state::AppState;

const ARCHIVE_FAILED: &str = "Failed to generate theme zip file";

/// 打包并下载主题
async fn download_archive(body: Bytes) -> AppResult<Response> {
    let request: ArchiveRequest = serde_json::from_slice(&body)
        .map_err(|_| AppError::BadRequest("Invalid archive request.".to_string()))?;

    if request.files.is_empty() {
        return Err(AppError::BadRequest("No theme files to package.".to_string()));
    }

    let file_count = request.files.len();
    let bytes = tokio::task::spawn_blocking(move || build_archive(&request.files))
        .await
        .map_err(|e| {
            error!("Theme packaging task failed: {}", e);
            AppError::Packaging(ARCHIVE_FAILED.to_string())
        })?
        .map_err(|e| {
            error!("Error generating zip: {}", e);
            AppError::Packaging(ARCHIVE_FAILED.to_string())
        })?;

    info!(
        "Theme archive ready: files={}, bytes={}",
        file_count,
        bytes.len()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", ARCHIVE_FILE_NAME),
        ),
    ];
    Ok((headers, bytes).into_response())
}

/// 创建主题路由
pub fn theme_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/theme/archive",
        post(download_archive).fallback(method_not_allowed),
    )
}
