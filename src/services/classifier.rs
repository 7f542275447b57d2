//! WordPress 话题判定
//!
//! 纯子串匹配：不分词、不做词边界检查，因此 "hook" 会命中 "hooked"，"action" 会命中 "reaction"。
//! 这一宽松行为是对外可观察的接受/拒绝规则的一部分，保持不变。

/// WordPress 话题关键词
const WP_KEYWORDS: [&str; 30] = [
    "wordpress",
    "wp",
    "theme",
    "plugin",
    "shortcode",
    "functions.php",
    "elementor",
    "woocommerce",
    "hook",
    "filter",
    "action",
    "acf",
    "wp-admin",
    "custom post type",
    "wp_query",
    "wp_enqueue",
    "wp_head",
    "wp_footer",
    "gutenberg",
    "block editor",
    "wp-cli",
    "multisite",
    "wp_mail",
    "wp_insert_post",
    "wp_get_posts",
    "the_loop",
    "wp_nav_menu",
    "wp_customize",
    "rest api",
    "wp-json",
];

/// 主题生成意图短语
const THEME_INTENT_PHRASES: [&str; 5] = [
    "create theme",
    "generate theme",
    "build theme",
    "make theme",
    "theme for",
];

fn contains_any(text: &str, needles: &[&str]) -> bool {
    let lower = text.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

/// 输入是否属于 WordPress 话题
pub fn is_in_scope(text: &str) -> bool {
    contains_any(text, &WP_KEYWORDS)
}

/// 输入是否请求生成主题
///
/// 在话题判定之前独立执行，命中时跳过话题判定
pub fn wants_generation(text: &str) -> bool {
    contains_any(text, &THEME_INTENT_PHRASES)
}
