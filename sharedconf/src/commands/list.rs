//! List command - Show what the shared directory offers

use std::path::Path;

use colored::Colorize;

use crate::config::{load_config, resolve_source_root};
use crate::copier::available_items;
use crate::types::{CopyMode, ItemKind, SharedConfig, SharedItem};

pub fn run(
    target_dir: &Path,
    source: Option<&Path>,
    files_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    let (_, config) = load_config(target_dir)?;
    run_with(&config, source, files_only, json)
}

pub fn run_with(
    config: &SharedConfig,
    source: Option<&Path>,
    files_only: bool,
    json: bool,
) -> anyhow::Result<()> {
    let source_root = resolve_source_root(source, Some(config));
    let mode = if files_only {
        CopyMode::FilesOnly
    } else {
        config.mode
    };

    let items = available_items(&source_root, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("\nShared items in {}\n", source_root.display()).bold()
    );
    if items.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for item in &items {
        println!("  {}", format_item(item));
    }
    println!();

    Ok(())
}

fn format_item(item: &SharedItem) -> String {
    match item.kind {
        Some(ItemKind::Directory) => format!("{} {}/", "▸".cyan(), item.name),
        Some(ItemKind::File) => format!("{} {}", "●".green(), item.name),
        None => format!("{} {} (missing)", "○".red(), item.name),
    }
}
