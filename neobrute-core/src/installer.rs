//! Installer: invoke the detected package manager's install command as a
//! synchronous subprocess in the consumer's project root.

use std::path::Path;
use std::process::Command;

use tracing::{info, warn};

use crate::error::{NeobruteError, Result};
use crate::project::PackageManager;

/// Full argument vector for installing `packages` with `pm`
pub fn install_command(pm: PackageManager, packages: &[String]) -> Vec<String> {
    let mut args = vec![
        pm.binary().to_string(),
        pm.install_subcommand().to_string(),
    ];
    args.extend(packages.iter().cloned());
    args
}

/// Install `packages` into the project at `root`.
///
/// An empty package list is a no-op. A root without a package.json is
/// skipped with a warning so `add` stays usable in scratch directories.
/// A missing package-manager binary or a non-zero exit is fatal.
pub fn install(root: &Path, pm: PackageManager, packages: &[String]) -> Result<()> {
    if packages.is_empty() {
        return Ok(());
    }

    if !root.join("package.json").is_file() {
        warn!(
            "no package.json in {}, skipping install of: {}",
            root.display(),
            packages.join(", ")
        );
        return Ok(());
    }

    let binary = which::which(pm.binary()).map_err(|_| {
        NeobruteError::config(format!(
            "package manager '{}' not found on PATH",
            pm.binary()
        ))
    })?;

    let argv = install_command(pm, packages);
    info!("running: {}", argv.join(" "));

    let output = Command::new(binary)
        .args(&argv[1..])
        .current_dir(root)
        .output()?;

    if !output.status.success() {
        return Err(NeobruteError::install_failure(
            argv.join(" "),
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr),
        ));
    }

    Ok(())
}
