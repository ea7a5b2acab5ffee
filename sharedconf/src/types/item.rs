use std::path::PathBuf;

use serde::Serialize;

use super::enums::ItemKind;

/// One entry offered for copying
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedItem {
    /// Base name, used for prompts and the default destination
    pub name: String,
    /// Absolute path under the source root
    pub source: PathBuf,
    /// `None` when the source does not exist
    pub kind: Option<ItemKind>,
}

impl SharedItem {
    /// Inspect `source` on disk and describe it.
    pub fn inspect(source: PathBuf) -> Self {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| source.to_string_lossy().to_string());
        let kind = if source.is_dir() {
            Some(ItemKind::Directory)
        } else if source.exists() {
            Some(ItemKind::File)
        } else {
            None
        };
        Self { name, source, kind }
    }

    /// Kind used for prompting; missing items are announced as files.
    pub fn display_kind(&self) -> ItemKind {
        self.kind.unwrap_or(ItemKind::File)
    }
}
