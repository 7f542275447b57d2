//! LLM 类型定义

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// 聊天消息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// 角色：system, user, assistant
    pub role: String,
    /// 消息内容
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// 生成选项
#[derive(Debug, Clone, Default)]
pub struct ChatOptions {
    /// 温度参数
    pub temperature: Option<f64>,
    /// 最大 token 数
    pub max_tokens: Option<u32>,
}

/// 文本补全提供方
///
/// 输入一个完整的 prompt，返回模型生成的完整文本。处理器只依赖此 trait，
/// 测试中可替换为模拟实现。
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP 请求失败: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API 错误 ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// JSON 解析错误
    #[error("JSON 解析失败: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 模型未返回任何文本
    #[error("模型返回了空响应")]
    EmptyResponse,
}

impl LlmError {
    /// 面向用户的错误信息
    ///
    /// API 错误返回提供方给出的 message，空 message 时返回 None 由调用方使用通用提示
    pub fn provider_message(&self) -> Option<String> {
        match self {
            LlmError::ApiError { message, .. } => {
                let message = message.trim();
                if message.is_empty() {
                    None
                } else {
                    Some(message.to_string())
                }
            }
            LlmError::HttpError(e) => Some(e.to_string()),
            LlmError::ConfigError(msg) => Some(msg.clone()),
            LlmError::JsonError(e) => Some(format!("Invalid response from model provider: {}", e)),
            LlmError::EmptyResponse => Some("The model returned an empty response".to_string()),
        }
    }
}
