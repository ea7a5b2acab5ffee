use serde::{Deserialize, Serialize};

use super::enums::CopyMode;

/// Settings read from `sharedconf.config.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedConfig {
    /// Overrides the bundled shared directory
    #[serde(default)]
    pub source_dir: Option<String>,
    #[serde(default = "default_true")]
    pub interactive: bool,
    #[serde(default)]
    pub mode: CopyMode,
}

impl Default for SharedConfig {
    fn default() -> Self {
        Self {
            source_dir: None,
            interactive: true,
            mode: CopyMode::default(),
        }
    }
}

/// Where the active config file lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathConfig {
    #[serde(rename = "type")]
    pub config_type: PathConfigType,
    pub config_path: String,
}

/// Whether config was found locally or globally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathConfigType {
    Local,
    Global,
}

fn default_true() -> bool {
    true
}
