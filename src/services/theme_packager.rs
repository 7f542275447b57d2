//! 主题打包
//!
//! 将文件集合连同截图占位文件写入内存中的 zip 压缩包。

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Cursor, Write};
use tracing::{debug, info};
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::models::FileSet;

/// 下载时使用的文件名
pub const ARCHIVE_FILE_NAME: &str = "wordpress-theme.zip";

/// 截图占位文件名
pub const SCREENSHOT_PLACEHOLDER_NAME: &str = "screenshot.txt";

const SCREENSHOT_PLACEHOLDER: &str = r#"<?php
// This is a placeholder for screenshot.png
// Replace this file with an actual 1200x900 PNG screenshot of your theme
?>"#;

/// 文件名前残留的标记与空白
static MARKER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^📄\s*").expect("valid regex"));

/// 打包错误
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("写入压缩包失败: {0}")]
    Zip(#[from] ZipError),

    #[error("写入文件内容失败: {0}")]
    Io(#[from] std::io::Error),
}

/// 清理文件名：去掉开头的标记与空白
fn clean_file_name(name: &str) -> &str {
    match MARKER_PREFIX.find(name) {
        Some(m) => name[m.end()..].trim(),
        None => name.trim(),
    }
}

fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// 构建主题压缩包
///
/// 每个文件一个条目，另加一个固定的截图占位文件。清理后文件名为空的条目被跳过，
/// 清理后重名的条目以后者为准。
pub fn build_archive(files: &FileSet) -> Result<Vec<u8>, PackageError> {
    let mut entries = FileSet::new();
    for file in files {
        let name = clean_file_name(&file.name);
        if name.is_empty() {
            debug!("Skipping theme file with empty name");
            continue;
        }
        entries.insert(name, file.content.trim());
    }
    entries.insert(SCREENSHOT_PLACEHOLDER_NAME, SCREENSHOT_PLACEHOLDER);

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for entry in &entries {
        zip.start_file(entry.name.as_str(), entry_options())?;
        zip.write_all(entry.content.as_bytes())?;
    }

    let bytes = zip.finish()?.into_inner();
    info!(
        "Theme archive built: entries={}, bytes={}",
        entries.len(),
        bytes.len()
    );
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThemeFile;
    use std::collections::BTreeSet;
    use std::io::Read;
    use zip::ZipArchive;

    fn read_archive(bytes: Vec<u8>) -> Vec<(String, String)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut entries = Vec::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).unwrap();
            let mut content = String::new();
            file.read_to_string(&mut content).unwrap();
            entries.push((file.name().to_string(), content));
        }
        entries
    }

    fn sample_files() -> Vec<ThemeFile> {
        vec![
            ThemeFile {
                name: "style.css".to_string(),
                content: "/* Theme Name: Demo */".to_string(),
            },
            ThemeFile {
                name: "index.php".to_string(),
                content: "<?php get_header(); ?>".to_string(),
            },
            ThemeFile {
                name: "functions.php".to_string(),
                content: "<?php add_theme_support('title-tag');".to_string(),
            },
        ]
    }

    #[test]
    fn test_archive_has_n_plus_one_entries() {
        let files: FileSet = sample_files().into_iter().collect();
        let entries = read_archive(build_archive(&files).unwrap());

        assert_eq!(entries.len(), files.len() + 1);
        let placeholder = entries
            .iter()
            .find(|(name, _)| name == SCREENSHOT_PLACEHOLDER_NAME)
            .unwrap();
        assert!(placeholder.1.contains("1200x900"));
        assert!(entries
            .iter()
            .any(|(name, content)| name == "style.css" && content == "/* Theme Name: Demo */"));
    }

    #[test]
    fn test_entry_names_independent_of_order() {
        let forward: FileSet = sample_files().into_iter().collect();
        let backward: FileSet = sample_files().into_iter().rev().collect();

        let names = |set: &FileSet| -> BTreeSet<String> {
            read_archive(build_archive(set).unwrap())
                .into_iter()
                .map(|(name, _)| name)
                .collect()
        };
        assert_eq!(names(&forward), names(&backward));
    }

    #[test]
    fn test_names_are_recleaned_and_content_trimmed() {
        let mut files = FileSet::new();
        files.insert("📄  header.php ", "\n<?php wp_head(); ?>\n\n");
        files.insert("📄", "orphan");

        let entries = read_archive(build_archive(&files).unwrap());
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .any(|(name, content)| name == "header.php" && content == "<?php wp_head(); ?>"));
    }

    #[test]
    fn test_entries_are_deflated() {
        let files: FileSet = sample_files().into_iter().collect();
        let bytes = build_archive(&files).unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let file = archive.by_name("index.php").unwrap();
        assert_eq!(file.compression(), CompressionMethod::Deflated);
    }

    #[test]
    fn test_clean_file_name() {
        assert_eq!(clean_file_name("📄 style.css"), "style.css");
        assert_eq!(clean_file_name("📄\tpage.php  "), "page.php");
        assert_eq!(clean_file_name("single.php"), "single.php");
        assert_eq!(clean_file_name("📄"), "");
    }
}
