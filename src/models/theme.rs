//! 主题文件集合模型

use serde::{Deserialize, Serialize};

/// 单个主题文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFile {
    pub name: String,
    pub content: String,
}

/// 有序的文件名到文件内容映射
///
/// 文件名唯一；重复插入同名文件时覆盖内容并保留首次出现的位置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ThemeFile>", into = "Vec<ThemeFile>")]
pub struct FileSet {
    files: Vec<ThemeFile>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入文件，同名时后写入者覆盖
    pub fn insert(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();
        match self.files.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.content = content,
            None => self.files.push(ThemeFile { name, content }),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeFile> {
        self.files.iter()
    }

    #[cfg(test)]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }
}

impl FromIterator<ThemeFile> for FileSet {
    fn from_iter<I: IntoIterator<Item = ThemeFile>>(iter: I) -> Self {
        let mut set = FileSet::new();
        for file in iter {
            set.insert(file.name, file.content);
        }
        set
    }
}

impl<'a> IntoIterator for &'a FileSet {
    type Item = &'a ThemeFile;
    type IntoIter = std::slice::Iter<'a, ThemeFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// 反序列化时同样执行同名覆盖
impl From<Vec<ThemeFile>> for FileSet {
    fn from(files: Vec<ThemeFile>) -> Self {
        files.into_iter().collect()
    }
}

impl From<FileSet> for Vec<ThemeFile> {
    fn from(set: FileSet) -> Self {
        set.files
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut set = FileSet::new();
        set.insert("style.css", "a");
        set.insert("index.php", "b");
        set.insert("style.css", "c");

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("style.css"), Some("c"));
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["style.css", "index.php"]);
    }

    #[test]
    fn test_serde_shape() {
        let mut set = FileSet::new();
        set.insert("style.css", "body{}");
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "name": "style.css", "content": "body{}" }])
        );

        let parsed: FileSet = serde_json::from_str(
            r#"[{"name":"a.php","content":"1"},{"name":"a.php","content":"2"}]"#,
        )
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("a.php"), Some("2"));
    }
}
