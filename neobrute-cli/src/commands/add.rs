//! `add` command: resolve the requested components' dependency closure,
//! render templates against the project's aliases, write them sequentially
//! and install any new npm packages.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use inquire::{Confirm, MultiSelect};
use tracing::{info, warn};

use neobrute_core::{
    installer, registry, resolver, AliasConfig, NeobruteError, ProjectConfig, ProjectInfo,
};

use crate::ui;

#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Components to add (run with no names on a terminal for a picker)
    #[arg(value_name = "COMPONENTS")]
    pub components: Vec<String>,

    /// Skip confirmation prompts; existing files are kept
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Add every component in the registry
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Destination directory for component files (overrides the ui alias)
    #[arg(long, short = 'p', value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Overwrite existing component files without asking
    #[arg(long, short = 'o')]
    pub overwrite: bool,

    /// Project directory to add components to (defaults to the current directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub cwd: Option<PathBuf>,
}

pub fn run_add(args: AddArgs) -> Result<()> {
    let root = super::resolve_cwd(args.cwd.clone())?;
    let info = ProjectInfo::detect(&root);

    let config = ProjectConfig::load(&root);
    if config.is_none() {
        warn!("no components.json found, using detected defaults (run `neobrute init` to configure)");
    }
    let (aliases, rsc) = match &config {
        Some(config) => (config.aliases.clone(), config.rsc),
        None => (AliasConfig::resolve(&root), info.rsc),
    };

    let requested = requested_components(&args)?;
    if requested.is_empty() {
        println!("No components selected.");
        return Ok(());
    }

    // Resolve the full closure up front: an unknown name must fail before
    // any file is written.
    let resolution = resolver::resolve(&requested)?;
    info!("resolved components: {}", resolution.component_names().join(", "));

    let target_dir = match args.path {
        Some(path) => super::resolve_override(&root, path),
        None => aliases.target_dir(&root, &info),
    };
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let interactive = !args.yes && ui::is_interactive();
    let mut written = 0usize;

    for entry in &resolution.components {
        let dest = target_dir.join(entry.file_name());

        let mut overwrite = args.overwrite;
        if dest.exists() && !overwrite && interactive {
            overwrite = Confirm::new(&format!("{} already exists. Overwrite?", entry.file_name()))
                .with_default(false)
                .prompt()
                .context("Failed to get overwrite confirmation")?;
        }

        match entry.write_to(&target_dir, &aliases, rsc, overwrite) {
            Ok(path) => {
                ui::status(format!("Added {}", path.display()));
                written += 1;
            }
            Err(NeobruteError::DestinationConflict { .. }) => {
                ui::status(format!("Skipped {} (already exists)", entry.file_name()));
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to write {}", dest.display()));
            }
        }
    }

    let packages: Vec<String> = resolution.packages.iter().cloned().collect();
    if !packages.is_empty() {
        let pb = ui::spinner(format!(
            "Installing {} packages with {}",
            packages.len(),
            info.package_manager
        ));
        match installer::install(&root, info.package_manager, &packages) {
            Ok(()) => ui::finish_success(pb, "Packages installed"),
            Err(err) => {
                ui::finish_error(pb, "Install failed");
                return Err(err).context("failed to install component packages");
            }
        }
    }

    ui::status(format!(
        "\n✅ Done. {} component file(s) written to {}",
        written,
        target_dir.display()
    ));

    Ok(())
}

/// Determine the requested component set from flags, arguments or an
/// interactive picker.
fn requested_components(args: &AddArgs) -> Result<Vec<String>> {
    if args.all {
        return Ok(registry::component_names());
    }

    if !args.components.is_empty() {
        return Ok(args.components.clone());
    }

    if !ui::is_interactive() {
        return Err(anyhow!(
            "no components specified\n\nRun `neobrute add <component>...` or `neobrute add --all`.\nValid components: {}",
            registry::component_names().join(", ")
        ));
    }

    let selection = MultiSelect::new("Which components would you like to add?", registry::component_names())
        .with_help_message("Space to select, enter to confirm")
        .prompt()
        .context("Failed to get component selection")?;

    Ok(selection)
}
