//! Copy shared configuration items into a project directory.
//!
//! Items are processed strictly one after another. A failing item is reported
//! and skipped; only a missing shared directory during "copy everything"
//! aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::{debug, error, warn};

use crate::config::paths::resolve_source_root;
use crate::error::CopyError;
use crate::prompt::{console_prompter, is_affirmative, Prompter};
use crate::types::{CopyMode, ItemKind, SharedItem};

/// Copies items out of one shared source root.
pub struct Copier<'p> {
    source_root: PathBuf,
    mode: CopyMode,
    prompter: &'p mut dyn Prompter,
}

impl<'p> Copier<'p> {
    pub fn new(source_root: impl Into<PathBuf>, prompter: &'p mut dyn Prompter) -> Self {
        Self {
            source_root: source_root.into(),
            mode: CopyMode::default(),
            prompter,
        }
    }

    pub fn with_mode(mut self, mode: CopyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Top-level entries of the source root, sorted by name.
    pub fn available_items(&self) -> Result<Vec<SharedItem>, CopyError> {
        available_items(&self.source_root, self.mode)
    }

    /// Copy `items` (or everything when empty) into `target_dir`.
    ///
    /// Returns the destinations written, in processing order.
    pub fn copy(
        &mut self,
        items: &[String],
        target_dir: &Path,
        interactive: bool,
    ) -> Result<Vec<PathBuf>, CopyError> {
        let sources = if items.is_empty() {
            list_source_root(&self.source_root, self.mode)?
        } else {
            items
                .iter()
                .map(|name| self.source_root.join(name))
                .collect()
        };

        debug!(
            count = sources.len(),
            target = %target_dir.display(),
            interactive,
            mode = %self.mode,
            "Processing shared items"
        );

        let mut copied = Vec::new();
        for source in sources {
            let item = SharedItem::inspect(source);
            match self.process_item(&item, target_dir, interactive) {
                Ok(Some(destination)) => {
                    println!(
                        "{}",
                        format!("Copied {} to {}", item.name, destination.display()).green()
                    );
                    copied.push(destination);
                }
                Ok(None) => {}
                Err(e @ (CopyError::NotFound(_) | CopyError::UnsupportedDirectory(_))) => {
                    warn!(item = %item.name, "{e}");
                    eprintln!("{}", e.to_string().yellow());
                }
                Err(e) => {
                    error!(item = %item.name, error = %e, "Copy failed");
                    eprintln!("{}", format!("Error copying {}: {e}", item.name).red());
                }
            }
        }

        Ok(copied)
    }

    /// Handle a single item. `Ok(None)` means the user declined it.
    fn process_item(
        &mut self,
        item: &SharedItem,
        target_dir: &Path,
        interactive: bool,
    ) -> Result<Option<PathBuf>, CopyError> {
        if let Some(kind) = item.kind {
            if !self.mode.allows(kind) {
                return Err(CopyError::UnsupportedDirectory(item.name.clone()));
            }
        }

        if interactive {
            let question = match item.display_kind() {
                ItemKind::File => format!("Copy \"{}\"? (y/n): ", item.name),
                ItemKind::Directory => format!("Copy directory \"{}\"? (y/n): ", item.name),
            };
            let answer = self.prompter.ask(&question).map_err(CopyError::Prompt)?;
            if !is_affirmative(&answer) {
                debug!(item = %item.name, answer = %answer, "Declined");
                println!("{}", format!("Skipped {}", item.name).dimmed());
                return Ok(None);
            }
        }

        let mut destination = target_dir.join(&item.name);
        if interactive {
            let question = format!("Destination (default: {}): ", destination.display());
            let answer = self.prompter.ask(&question).map_err(CopyError::Prompt)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                // Relative answers are taken against the target directory
                destination = target_dir.join(answer);
            }
        }

        // The source may have changed while we were waiting on the user
        let kind = match SharedItem::inspect(item.source.clone()).kind {
            Some(kind) => kind,
            None => return Err(CopyError::NotFound(item.source.clone())),
        };

        match kind {
            ItemKind::Directory => {
                if !self.mode.allows(kind) {
                    return Err(CopyError::UnsupportedDirectory(item.name.clone()));
                }
                copy_dir_recursive(&item.source, &destination)?;
            }
            ItemKind::File => copy_file(&item.source, &destination)?,
        }

        debug!(item = %item.name, kind = %kind, destination = %destination.display(), "Copied");
        Ok(Some(destination))
    }
}

/// Top-level entries of `source_root` that `mode` accepts, sorted by name.
pub fn available_items(source_root: &Path, mode: CopyMode) -> Result<Vec<SharedItem>, CopyError> {
    Ok(list_source_root(source_root, mode)?
        .into_iter()
        .map(SharedItem::inspect)
        .collect())
}

fn list_source_root(source_root: &Path, mode: CopyMode) -> Result<Vec<PathBuf>, CopyError> {
    if !source_root.is_dir() {
        return Err(CopyError::SourceRootNotFound(source_root.to_path_buf()));
    }

    let read_err = |source: std::io::Error| CopyError::ReadSourceRoot {
        path: source_root.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(source_root).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if mode == CopyMode::FilesOnly && path.is_dir() {
            continue;
        }
        entries.push(path);
    }

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Copy with the default source root and the console prompter.
pub fn copy_shared_items(
    items: &[String],
    target_dir: &Path,
    interactive: bool,
) -> Result<Vec<PathBuf>, CopyError> {
    let mut prompter = console_prompter();
    Copier::new(resolve_source_root(None, None), prompter.as_mut()).copy(
        items,
        target_dir,
        interactive,
    )
}

/// Read the whole file, create missing parents, then write (overwriting).
fn copy_file(src: &Path, dst: &Path) -> Result<(), CopyError> {
    let content = fs::read(src).map_err(|e| CopyError::io(src, e))?;

    if let Some(dir) = dst.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| CopyError::io(dir, e))?;
        }
    }

    fs::write(dst, content).map_err(|e| CopyError::io(dst, e))
}

/// Recursively copy a directory, merging into an existing destination.
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), CopyError> {
    if !dst.exists() {
        fs::create_dir_all(dst).map_err(|e| CopyError::io(dst, e))?;
    }

    for entry in fs::read_dir(src).map_err(|e| CopyError::io(src, e))? {
        let entry = entry.map_err(|e| CopyError::io(src, e))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path).map_err(|e| CopyError::io(&dst_path, e))?;
        }
    }

    Ok(())
}
