//! Config command - Show the resolved configuration

use std::path::Path;

use colored::Colorize;

use crate::config::loader::ENV_OVERRIDES;
use crate::config::{config_exists, load_config, resolve_source_root};

pub fn run(target_dir: &Path, source: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", "\nsharedconf Configuration\n".bold());

    let (paths, config) = match load_config(target_dir) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("\n{}", "Error reading config:".red());
            eprintln!("  {}", format!("{e}").dimmed());
            println!();
            return Err(e.into());
        }
    };

    // Show config location
    println!("{}", "Config location:".dimmed());
    if config_exists(&paths.config_path) {
        println!(
            "  {} {} ({:?})",
            "●".green(),
            paths.config_path,
            paths.config_type
        );
    } else {
        println!("  {} {} (not found, using defaults)", "○".red(), paths.config_path);
    }

    // Show source location
    let source_root = resolve_source_root(source, Some(&config));
    println!("{}", "\nShared directory:".dimmed());
    if source_root.is_dir() {
        println!("  {} {}", "●".green(), source_root.display());
    } else {
        println!("  {} {} (not found)", "○".red(), source_root.display());
    }

    println!("{}", "\nCurrent settings:".dimmed());
    println!(
        "  interactive:  {}",
        format!("{}", config.interactive).cyan()
    );
    println!("  mode:         {}", format!("{}", config.mode).cyan());
    println!(
        "  source_dir:   {}",
        config.source_dir.as_deref().unwrap_or("(bundled)").cyan()
    );

    println!("{}", "\nEnvironment overrides:".dimmed());
    let mut has_overrides = false;
    for var in &ENV_OVERRIDES {
        if let Ok(val) = std::env::var(var) {
            println!("  {}={}", var, val.yellow());
            has_overrides = true;
        }
    }
    if !has_overrides {
        println!("  {}", "(none)".dimmed());
    }

    println!();
    Ok(())
}
