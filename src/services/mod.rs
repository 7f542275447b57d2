//! 服务层模块

mod assistant_service;
pub mod classifier;
mod prompt_service;
pub mod theme_extractor;
pub mod theme_packager;

pub use assistant_service::{AssistantError, AssistantService};
pub use prompt_service::PromptMode;
