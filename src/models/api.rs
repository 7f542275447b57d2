//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use super::theme::FileSet;
use crate::services::PromptMode;

/// 问答响应
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// 助手响应
///
/// 单次请求的完整结果，`files` 仅在主题生成模式下填充
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantResponse {
    pub mode: PromptMode,
    pub answer: String,
    pub files: FileSet,
    pub file_count: usize,
}

/// 主题打包请求
#[derive(Debug, Deserialize)]
pub struct ArchiveRequest {
    #[serde(default)]
    pub files: FileSet,
}

/// 建议问题响应
#[derive(Debug, Serialize)]
pub struct SuggestQuestionsResponse {
    pub questions: Vec<String>,
}
