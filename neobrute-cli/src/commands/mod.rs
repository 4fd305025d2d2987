//! Command implementations for the neobrute CLI

pub mod add;
pub mod init;

// Re-export main dispatcher functions for flat access from main.rs
pub use add::run_add;
pub use init::run_init;

use std::path::{Path, PathBuf};

use anyhow::Result;
use neobrute_core::NeobruteError;

/// Resolve the working directory flag to an existing project root
pub(crate) fn resolve_cwd(cwd: Option<PathBuf>) -> Result<PathBuf> {
    let root = match cwd {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if !root.is_dir() {
        return Err(NeobruteError::path_not_found(root).into());
    }

    Ok(root)
}

/// Resolve a --path override against the project root
pub(crate) fn resolve_override(root: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
