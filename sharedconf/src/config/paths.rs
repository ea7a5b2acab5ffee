use std::env;
use std::path::{Path, PathBuf};

use crate::types::{PathConfig, PathConfigType, SharedConfig};

/// File name searched for when walking up from the target directory
pub const LOCAL_CONFIG_FILE: &str = "sharedconf.config.yaml";

/// Environment variable that points at an alternative shared directory
pub const SOURCE_DIR_ENV: &str = "SHAREDCONF_SOURCE_DIR";

const SHARED_DIR_NAME: &str = "shared";

/// Get the global config directory (~/.config/sharedconf or $XDG_CONFIG_HOME/sharedconf)
pub fn get_global_config_dir() -> PathBuf {
    let base = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config")
    } else {
        PathBuf::from(".config")
    };
    base.join("sharedconf")
}

/// Walk up from start_dir looking for sharedconf.config.yaml
pub fn find_local_config(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir;

    loop {
        let config_path = dir.join(LOCAL_CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        match dir.parent() {
            Some(parent) if parent != dir => dir = parent,
            _ => break,
        }
    }

    None
}

/// Resolve the config file location.
/// Priority: local config (walk up tree) > global config
pub fn resolve_config_path(start_dir: &Path) -> PathConfig {
    resolve_config_path_in(start_dir, &get_global_config_dir())
}

/// Same as [`resolve_config_path`], with an explicit global config directory.
pub fn resolve_config_path_in(start_dir: &Path, global_config_dir: &Path) -> PathConfig {
    if let Some(local_config) = find_local_config(start_dir) {
        return PathConfig {
            config_type: PathConfigType::Local,
            config_path: local_config.to_string_lossy().to_string(),
        };
    }

    PathConfig {
        config_type: PathConfigType::Global,
        config_path: global_config_dir
            .join("config.yaml")
            .to_string_lossy()
            .to_string(),
    }
}

/// Locate the shared directory shipped with the tool.
pub fn get_bundled_source_dir() -> PathBuf {
    // Look relative to executable, then fall back to the source checkout
    if let Ok(exe) = env::current_exe() {
        let dir = exe.parent().unwrap_or(Path::new("."));
        let shared = dir.join(SHARED_DIR_NAME);
        if shared.is_dir() {
            return shared;
        }
        // Check parent/share/sharedconf/shared
        let share_shared = dir
            .parent()
            .unwrap_or(Path::new("."))
            .join("share")
            .join("sharedconf")
            .join(SHARED_DIR_NAME);
        if share_shared.is_dir() {
            return share_shared;
        }
    }
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap_or(Path::new("."))
        .join(SHARED_DIR_NAME)
}

/// Pick the source root for this run.
/// Priority: CLI flag > $SHAREDCONF_SOURCE_DIR > config `source_dir` > bundled
pub fn resolve_source_root(cli_source: Option<&Path>, config: Option<&SharedConfig>) -> PathBuf {
    resolve_source_root_with(cli_source, config, env::var(SOURCE_DIR_ENV).ok())
}

fn resolve_source_root_with(
    cli_source: Option<&Path>,
    config: Option<&SharedConfig>,
    env_source: Option<String>,
) -> PathBuf {
    if let Some(path) = cli_source {
        return path.to_path_buf();
    }
    if let Some(path) = env_source.filter(|p| !p.trim().is_empty()) {
        return expand_home(&path);
    }
    if let Some(path) = config.and_then(|c| c.source_dir.as_deref()) {
        return expand_home(path);
    }
    get_bundled_source_dir()
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_local_config_with_temp_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&config_path, "interactive: false\n").unwrap();

        let found = find_local_config(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_local_config_walks_up() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&config_path, "interactive: false\n").unwrap();

        let subdir = tmp.path().join("packages").join("web");
        std::fs::create_dir_all(&subdir).unwrap();

        assert_eq!(find_local_config(&subdir), Some(config_path));
    }

    #[test]
    fn test_resolve_config_path_prefers_local() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(LOCAL_CONFIG_FILE), "").unwrap();

        let paths = resolve_config_path(tmp.path());
        assert_eq!(paths.config_type, PathConfigType::Local);
        assert!(paths.config_path.ends_with(LOCAL_CONFIG_FILE));
    }

    #[test]
    fn test_resolve_config_path_in_falls_back_to_global() {
        let project = tempfile::tempdir().unwrap();
        let global = tempfile::tempdir().unwrap();

        let paths = resolve_config_path_in(project.path(), global.path());
        assert_eq!(paths.config_type, PathConfigType::Global);
        assert_eq!(
            paths.config_path,
            global.path().join("config.yaml").to_string_lossy()
        );
    }

    #[test]
    fn test_get_global_config_dir() {
        let dir = get_global_config_dir();
        assert!(dir.to_string_lossy().contains("sharedconf"));
    }

    #[test]
    fn test_bundled_source_dir_is_named_shared() {
        let dir = get_bundled_source_dir();
        assert_eq!(dir.file_name().unwrap(), SHARED_DIR_NAME);
    }

    #[test]
    fn test_resolve_source_root_priority() {
        let config = SharedConfig {
            source_dir: Some("/from/config".to_string()),
            ..SharedConfig::default()
        };

        let cli = PathBuf::from("/from/cli");
        assert_eq!(
            resolve_source_root_with(Some(&cli), Some(&config), Some("/from/env".to_string())),
            cli
        );
        assert_eq!(
            resolve_source_root_with(None, Some(&config), Some("/from/env".to_string())),
            PathBuf::from("/from/env")
        );
        assert_eq!(
            resolve_source_root_with(None, Some(&config), None),
            PathBuf::from("/from/config")
        );
        assert_eq!(
            resolve_source_root_with(None, None, Some("  ".to_string())),
            get_bundled_source_dir()
        );
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/shared"), home.join("shared"));
        }
    }
}
