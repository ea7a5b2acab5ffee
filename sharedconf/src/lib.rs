//! Copy the bundled "shared" configuration files into a project.
//!
//! The same operation backs the `sharedconf` binary and can be embedded:
//!
//! ```rust,ignore
//! use sharedconf::{Copier, ScriptedPrompter};
//!
//! let mut prompter = ScriptedPrompter::default();
//! let copied = Copier::new("/opt/sharedconf/shared", &mut prompter)
//!     .copy(&[], Path::new("."), false)?;
//! ```

pub mod commands;
pub mod config;
pub mod copier;
pub mod error;
pub mod prompt;
pub mod types;

pub use copier::{available_items, copy_shared_items, Copier};
pub use error::CopyError;
pub use prompt::{LinePrompter, Prompter, ScriptedPrompter};
pub use types::{CopyMode, ItemKind, SharedItem};
