pub mod config;
pub mod enums;
pub mod item;

// Re-export commonly used types for convenience
pub use config::{PathConfig, PathConfigType, SharedConfig};
pub use enums::{CopyMode, ItemKind};
pub use item::SharedItem;
