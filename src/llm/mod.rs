//! LLM 模块
//!
//! 提供统一的 LLM 客户端，支持 Gemini 和 OpenAI 兼容 API 格式。

mod client;
mod format;
mod gemini;
#[cfg(test)]
pub mod mock;
mod openai;
mod types;

pub use client::LlmClient;
pub use types::*;
