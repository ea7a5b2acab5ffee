pub mod error;
pub mod loader;
pub mod paths;

pub use error::ConfigError;
pub use loader::{config_exists, load_config, load_config_with, read_config, read_config_with_env};
pub use paths::{
    find_local_config, get_global_config_dir, resolve_config_path, resolve_config_path_in,
    resolve_source_root,
};
