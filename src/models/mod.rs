//! 数据模型

mod api;
mod theme;

pub use api::*;
pub use theme::{FileSet, ThemeFile};
