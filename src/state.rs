//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。所有字段只读，请求之间没有共享的可变状态。

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::llm::{ChatOptions, CompletionProvider, LlmClient, LlmError};
use crate::services::AssistantService;

/// 应用共享状态
///
/// 使用 Arc 包裹以便在多个处理器之间安全共享
#[derive(Clone)]
pub struct AppState {
    /// 启动时加载的配置
    pub config: Arc<AppConfig>,
    /// 助手服务
    pub assistant: AssistantService,
}

impl AppState {
    /// 使用指定的补全提供方创建状态
    pub fn new(config: AppConfig, provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            config: Arc::new(config),
            assistant: AssistantService::new(provider),
        }
    }
}

/// 根据配置创建 LLM 客户端与可共享的应用状态
pub fn create_shared_state(config: AppConfig) -> Result<Arc<AppState>, LlmError> {
    let options = ChatOptions {
        temperature: Some(config.temperature),
        max_tokens: Some(config.max_tokens),
    };
    let client = LlmClient::new(
        config.api_key.clone(),
        config.base_url.clone(),
        config.model.clone(),
        options,
        Duration::from_secs(config.timeout_secs),
    )?;
    tracing::info!(
        "LLM client ready: model={}, api_key={}",
        client.model(),
        config.masked_api_key()
    );

    Ok(Arc::new(AppState::new(config, Arc::new(client))))
}
