//! Prompt 构建服务
//!
//! 负责根据模式构建发送给 LLM 的 prompt，以及生成建议问题

use serde::Serialize;

/// 文件分隔标记
pub const FILE_MARKER: char = '📄';

/// 主题骨架包含的文件
pub const THEME_SKELETON: [&str; 7] = [
    "style.css",
    "index.php",
    "functions.php",
    "header.php",
    "footer.php",
    "single.php",
    "page.php",
];

/// Prompt 模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    /// 普通问答
    Qa,
    /// 多文件主题生成
    Generate,
}

/// 问答模板
const QA_TEMPLATE: &str = r#"You are a WordPress development expert assistant. Answer the following WordPress-related question with detailed, accurate information. Include code examples when relevant and explain best practices. Focus only on WordPress development topics.

Question: {query}

Please provide a comprehensive answer that would help a WordPress developer."#;

/// 主题生成模板
const GENERATE_TEMPLATE: &str = r#"You are an expert WordPress theme developer. Create a complete, working WordPress theme based on the following request:

Request: {query}

Generate ALL of the following files:
{files}

OUTPUT FORMAT (mandatory):
For every file, write a line containing the 📄 symbol followed by a space and the file name, then the complete content of that file on the following lines. For example:

📄 style.css
/*
Theme Name: Example Theme
*/

📄 index.php
<?php get_header(); ?>

Use this format for every file and do not write any introduction, explanation or summary outside of the files. Do not use the 📄 symbol anywhere except in front of a file name.

Requirements:
- style.css must start with a valid WordPress theme header comment (Theme Name, Author, Description, Version, License, Text Domain)
- functions.php must register theme supports (title-tag, post-thumbnails, html5, custom-logo), navigation menus and widget areas, and enqueue the stylesheet with wp_enqueue_style
- header.php must call wp_head() and wp_body_open(), footer.php must call wp_footer()
- Use the WordPress loop, template tags and escaping functions (esc_html, esc_url, esc_attr)
- Use semantic HTML5 markup and responsive, mobile-first CSS
- Follow the WordPress Coding Standards and make all strings translatable with the theme text domain"#;

/// 建议问题
const SUGGESTED_QUESTIONS: [&str; 5] = [
    "How do I create a custom WordPress hook?",
    "How do I register a custom post type with REST API support?",
    "Create a theme for a restaurant website",
    "Create a WordPress theme for a photography portfolio with dark mode support",
    "How do I add a custom field to WooCommerce checkout?",
];

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 根据模式构建 prompt
    pub fn build_prompt(&self, query: &str, mode: PromptMode) -> String {
        match mode {
            PromptMode::Qa => QA_TEMPLATE.replace("{query}", query),
            PromptMode::Generate => {
                let files = THEME_SKELETON
                    .iter()
                    .enumerate()
                    .map(|(i, name)| format!("{}. {}", i + 1, name))
                    .collect::<Vec<_>>()
                    .join("\n");
                GENERATE_TEMPLATE
                    .replace("{files}", &files)
                    .replace("{query}", query)
            }
        }
    }

    /// 生成建议问题
    pub fn suggested_questions(&self) -> Vec<String> {
        SUGGESTED_QUESTIONS.iter().map(|q| q.to_string()).collect()
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
