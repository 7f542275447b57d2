//! 应用配置管理
//!
//! 启动时从 `config.json` 与环境变量加载一次配置，之后以只读方式在处理器间共享。
//! API 密钥只能通过配置注入，不会编译进二进制文件。

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 运行环境
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// LLM API 密钥
    #[serde(default)]
    pub api_key: String,

    /// LLM API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 温度参数 (0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// 最大 token 数
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// 请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// 运行环境，决定错误响应是否携带详细信息
    #[serde(default)]
    pub environment: Environment,

    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    8192
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8765
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            environment: Environment::default(),
            host: default_host(),
            port: default_port(),
        }
    }
}

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("读取配置文件失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("解析配置文件失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("环境变量 {name} 无效: {value}")]
    InvalidEnv { name: &'static str, value: String },

    #[error("监听地址无效: {0}")]
    InvalidAddr(String),
}

impl AppConfig {
    /// 加载配置：`config.json`（若存在）后叠加环境变量
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(&get_config_path())?.unwrap_or_default();
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// 从文件加载配置，文件不存在时返回 None
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// 用环境变量覆盖配置项
    ///
    /// `lookup` 便于测试时注入变量
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("WP_ASSISTANT_API_KEY").or_else(|| get("GEMINI_API_KEY")) {
            self.api_key = key.trim().to_string();
        }
        if let Some(base_url) = get("WP_ASSISTANT_BASE_URL") {
            self.base_url = base_url;
        }
        if let Some(model) = get("WP_ASSISTANT_MODEL") {
            self.model = model;
        }
        if let Some(env) = get("WP_ASSISTANT_ENV") {
            self.environment = Environment::parse(&env).ok_or(ConfigError::InvalidEnv {
                name: "WP_ASSISTANT_ENV",
                value: env.clone(),
            })?;
        }
        if let Some(host) = get("WP_ASSISTANT_HOST") {
            self.host = host;
        }
        if let Some(port) = get("WP_ASSISTANT_PORT") {
            self.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: "WP_ASSISTANT_PORT",
                value: port.clone(),
            })?;
        }
        Ok(())
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// 监听地址
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(format!("{}:{}", self.host, self.port)))
    }

    /// API 密钥脱敏，用于日志输出
    pub fn masked_api_key(&self) -> String {
        mask_api_key(&self.api_key)
    }
}

/// API 密钥脱敏
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
