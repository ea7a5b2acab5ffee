use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of an entry under the shared source root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    File,
    Directory,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::File => write!(f, "file"),
            ItemKind::Directory => write!(f, "directory"),
        }
    }
}

/// Which entry kinds the copier accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyMode {
    /// Only regular files; directory items are skipped.
    FilesOnly,
    /// Files, plus directories copied recursively.
    #[default]
    FilesAndDirectories,
}

impl CopyMode {
    pub fn allows(self, kind: ItemKind) -> bool {
        match self {
            CopyMode::FilesOnly => kind == ItemKind::File,
            CopyMode::FilesAndDirectories => true,
        }
    }
}

impl fmt::Display for CopyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyMode::FilesOnly => write!(f, "files-only"),
            CopyMode::FilesAndDirectories => write!(f, "files-and-directories"),
        }
    }
}

impl FromStr for CopyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "files-only" | "files" => Ok(CopyMode::FilesOnly),
            "files-and-directories" | "all" => Ok(CopyMode::FilesAndDirectories),
            _ => Err(format!(
                "Unknown copy mode: '{s}'. Expected: files-only, files-and-directories"
            )),
        }
    }
}
