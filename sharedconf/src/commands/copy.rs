//! Copy command - Copy shared config items into a project

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::debug;

use crate::config::{load_config, resolve_source_root};
use crate::copier::Copier;
use crate::prompt::{console_prompter, Prompter};
use crate::types::{CopyMode, SharedConfig};

/// Inputs gathered from the command line
#[derive(Debug, Clone, Copy)]
pub struct CopyOptions<'a> {
    pub items: &'a [String],
    pub target_dir: &'a Path,
    pub source: Option<&'a Path>,
    /// Skip prompts regardless of config
    pub yes: bool,
    pub files_only: bool,
}

pub fn run(options: CopyOptions<'_>) -> anyhow::Result<Vec<PathBuf>> {
    let (paths, config) = load_config(options.target_dir)?;
    debug!(
        config_path = %paths.config_path,
        config_type = ?paths.config_type,
        "Loaded configuration"
    );

    let mut prompter = console_prompter();
    run_with(options, &config, prompter.as_mut())
}

/// Copy with an already loaded config and a caller-supplied prompter.
pub fn run_with(
    options: CopyOptions<'_>,
    config: &SharedConfig,
    prompter: &mut dyn Prompter,
) -> anyhow::Result<Vec<PathBuf>> {
    let source_root = resolve_source_root(options.source, Some(config));
    let interactive = config.interactive && !options.yes;
    let mode = if options.files_only {
        CopyMode::FilesOnly
    } else {
        config.mode
    };

    if interactive {
        println!(
            "{}",
            format!("Copying shared files from {}\n", source_root.display()).dimmed()
        );
    }

    let copied = Copier::new(&source_root, prompter).with_mode(mode).copy(
        options.items,
        options.target_dir,
        interactive,
    )?;

    match copied.len() {
        0 => println!("{}", "\nNo items copied.".yellow()),
        1 => println!("{}", "\n✓ 1 item copied".green()),
        n => println!("{}", format!("\n✓ {n} items copied").green()),
    }

    Ok(copied)
}

/// Render copied destinations as a JSON array of paths.
pub fn paths_to_json(paths: &[PathBuf]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(paths)
}
