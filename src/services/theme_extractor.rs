//! 主题文件提取
//!
//! 从模型输出中按 `📄 文件名` 标记行切分出文件。扫描是单遍线性的状态机：
//!
//! - `SeekingMarker`：跳过标记之前的任何文本
//! - `SkippingSpace`：标记后的空白（含换行）
//! - `ReadingName`：文件名读到行尾，必须以换行结束，否则该段丢弃
//! - `ReadingBody`：正文读到下一个标记或输入末尾
//!
//! 格式不符的片段静默丢弃，不报错。

use tracing::debug;

use super::prompt_service::FILE_MARKER;
use crate::models::FileSet;

/// 扫描状态，字段为 `raw` 中的字节偏移
#[derive(Debug, Clone, Copy)]
enum ScanState {
    SeekingMarker,
    SkippingSpace,
    ReadingName { start: usize },
    ReadingBody { name: (usize, usize), start: usize },
}

/// 从模型输出中提取主题文件
///
/// 没有任何标记时返回空集合，调用方应视为“未找到文件”而非错误。
/// 同名文件以后出现者为准。
pub fn extract_files(raw: &str) -> FileSet {
    let mut files = FileSet::new();
    let mut state = ScanState::SeekingMarker;

    for (i, c) in raw.char_indices() {
        state = match state {
            ScanState::SeekingMarker if c == FILE_MARKER => ScanState::SkippingSpace,
            ScanState::SeekingMarker => ScanState::SeekingMarker,
            ScanState::SkippingSpace if c.is_whitespace() => ScanState::SkippingSpace,
            ScanState::SkippingSpace => ScanState::ReadingName { start: i },
            ScanState::ReadingName { start } if c == '\n' => ScanState::ReadingBody {
                name: (start, i),
                start: i + 1,
            },
            ScanState::ReadingName { start } => ScanState::ReadingName { start },
            ScanState::ReadingBody { name, start } if c == FILE_MARKER => {
                insert_entry(&mut files, &raw[name.0..name.1], &raw[start..i]);
                ScanState::SkippingSpace
            }
            body @ ScanState::ReadingBody { .. } => body,
        };
    }

    if let ScanState::ReadingBody { name, start } = state {
        insert_entry(&mut files, &raw[name.0..name.1], &raw[start..]);
    }

    debug!("Extracted {} theme files", files.len());
    files
}

fn insert_entry(files: &mut FileSet, name: &str, body: &str) {
    let name = name.trim();
    let content = strip_code_fence(body.trim());
    if !name.is_empty() && !content.is_empty() {
        files.insert(name, content);
    }
}

/// 去掉首部 ```lang 行与尾部 ``` 行
fn strip_code_fence(content: &str) -> &str {
    let mut content = content;
    if let Some(rest) = content.strip_prefix("```") {
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_');
        content = rest.strip_prefix('\n').unwrap_or(rest);
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest.strip_suffix('\n').unwrap_or(rest);
    }
    content
}
