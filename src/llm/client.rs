//! 统一 LLM 客户端

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

use super::format::{detect_api_format, ApiFormat};
use super::gemini::generate_gemini;
use super::openai::generate_openai;
use super::types::{ChatOptions, CompletionProvider, LlmError};

/// 统一 LLM 客户端
///
/// 支持 Gemini 和 OpenAI 兼容 API 格式，根据模型名称自动选择。
/// 不做重试、缓存或限流，失败直接返回给调用方。
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    options: ChatOptions,
}

impl LlmClient {
    /// 创建新的 LLM 客户端
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        options: ChatOptions,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::ConfigError("API Key is required".to_string()));
        }

        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(LlmError::HttpError)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
            model: model.into(),
            options,
        })
    }

    /// 当前使用的模型
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let api_format = detect_api_format(&self.model);
        info!(
            "LLM request: model={}, api_format={:?}, prompt_len={}",
            self.model,
            api_format,
            prompt.len()
        );

        match api_format {
            ApiFormat::Gemini => {
                generate_gemini(
                    &self.client,
                    &self.api_key,
                    &self.base_url,
                    prompt,
                    &self.model,
                    &self.options,
                )
                .await
            }
            ApiFormat::OpenAi => {
                generate_openai(
                    &self.client,
                    &self.api_key,
                    &self.base_url,
                    prompt,
                    &self.model,
                    &self.options,
                )
                .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    /// 启动本地模拟服务，返回 base_url
    async fn spawn_mock(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client_for(base_url: &str, model: &str) -> LlmClient {
        LlmClient::new(
            "test-key",
            base_url,
            model,
            ChatOptions::default(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = LlmClient::new(
            "  ",
            "http://localhost",
            "gemini-1.5-flash",
            ChatOptions::default(),
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(LlmError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_gemini_completion() {
        let app = Router::new().fallback(|headers: HeaderMap, Json(body): Json<Value>| async move {
            assert_eq!(headers.get("x-goog-api-key").unwrap(), "test-key");
            let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap().to_string();
            Json(json!({
                "candidates": [{
                    "content": {"parts": [{"text": format!("echo: {}", prompt)}], "role": "model"},
                    "finishReason": "STOP"
                }]
            }))
        });
        let base_url = spawn_mock(app).await;

        let client = client_for(&base_url, "gemini-1.5-flash");
        let answer = client.complete("What is a hook?").await.unwrap();
        assert_eq!(answer, "echo: What is a hook?");
    }

    #[tokio::test]
    async fn test_gemini_error_message_surfaces() {
        let app = Router::new().fallback(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}})),
            )
        });
        let base_url = spawn_mock(app).await;

        let client = client_for(&base_url, "gemini-1.5-flash");
        let err = client.complete("wp_query").await.unwrap_err();
        match err {
            LlmError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_openai_completion() {
        let app = Router::new().route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers.get("authorization").unwrap(), "Bearer test-key");
                assert_eq!(body["stream"], false);
                Json(json!({
                    "choices": [{"message": {"role": "assistant", "content": "use add_action"}, "finish_reason": "stop"}]
                }))
            }),
        );
        let base_url = spawn_mock(app).await;

        let client = client_for(&base_url, "gpt-4o");
        assert_eq!(client.complete("hooks?").await.unwrap(), "use add_action");
    }

    #[tokio::test]
    async fn test_empty_candidates_is_error() {
        let app = Router::new().fallback(|| async { Json(json!({"candidates": []})) });
        let base_url = spawn_mock(app).await;

        let client = client_for(&base_url, "gemini-1.5-flash");
        assert!(matches!(
            client.complete("theme").await,
            Err(LlmError::EmptyResponse)
        ));
    }
}
