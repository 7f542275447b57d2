//! 助手服务
//!
//! 串联话题判定、prompt 构建、LLM 调用与主题文件提取。各步骤均为纯函数，
//! 只有 LLM 调用会挂起；服务本身不持有跨请求的可变状态。

use std::sync::Arc;
use tracing::{info, warn};

use super::classifier::{is_in_scope, wants_generation};
use super::prompt_service::{PromptMode, PromptService};
use super::theme_extractor::extract_files;
use crate::llm::{CompletionProvider, LlmError};
use crate::models::FileSet;

/// 单次请求的结果
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub mode: PromptMode,
    /// 模型原始输出
    pub answer: String,
    /// 仅在主题生成模式下可能非空
    pub files: FileSet,
}

/// 助手错误
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("问题为空")]
    EmptyInput,

    #[error("问题与 WordPress 无关")]
    OutOfScope,

    #[error(transparent)]
    Llm(#[from] LlmError),
}

/// 助手服务
#[derive(Clone)]
pub struct AssistantService {
    provider: Arc<dyn CompletionProvider>,
    prompts: Arc<PromptService>,
}

impl AssistantService {
    /// 创建新的助手服务
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            provider,
            prompts: Arc::new(PromptService::new()),
        }
    }

    /// 纯问答：只经过话题判定，不识别主题生成意图
    pub async fn answer_question(&self, question: &str) -> Result<String, AssistantError> {
        if !is_in_scope(question) {
            warn!("Rejected off-topic question");
            return Err(AssistantError::OutOfScope);
        }

        let prompt = self.prompts.build_prompt(question, PromptMode::Qa);
        Ok(self.provider.complete(&prompt).await?)
    }

    /// 完整交互流程
    ///
    /// 先判断主题生成意图（命中则跳过话题判定），再判断话题；
    /// 主题生成模式下从输出中提取文件。
    pub async fn respond(&self, input: &str) -> Result<AssistantReply, AssistantError> {
        if input.trim().is_empty() {
            return Err(AssistantError::EmptyInput);
        }

        let mode = if wants_generation(input) {
            PromptMode::Generate
        } else if is_in_scope(input) {
            PromptMode::Qa
        } else {
            warn!("Rejected off-topic input");
            return Err(AssistantError::OutOfScope);
        };

        let prompt = self.prompts.build_prompt(input, mode);
        let answer = self.provider.complete(&prompt).await?;

        let files = match mode {
            PromptMode::Generate => extract_files(&answer),
            PromptMode::Qa => FileSet::new(),
        };
        info!(
            "Assistant reply ready: mode={:?}, answer_len={}, files={}",
            mode,
            answer.len(),
            files.len()
        );

        Ok(AssistantReply {
            mode,
            answer,
            files,
        })
    }

    /// 建议问题
    pub fn suggested_questions(&self) -> Vec<String> {
        self.prompts.suggested_questions()
    }
}
