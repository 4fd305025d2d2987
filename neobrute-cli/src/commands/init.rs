//! `init` command: detect the project, resolve aliases, write
//! components.json and the `cn` helper, and install the base packages.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use inquire::{Confirm, Text};
use tracing::info;

use neobrute_core::{
    installer, registry, AliasConfig, ProjectConfig, ProjectInfo, BASE_PACKAGES,
};

use crate::ui;

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Skip confirmation prompts, accepting the resolved answers
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Use the default configuration without asking anything
    #[arg(long, short = 'd')]
    pub defaults: bool,

    /// Project directory to initialize (defaults to the current directory)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Overwrite an existing components.json
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub fn run_init(args: InitArgs) -> Result<()> {
    let root = super::resolve_cwd(args.cwd)?;

    let info = ProjectInfo::detect(&root);
    ui::status(format!(
        "Detected {} project ({})",
        info.kind, info.package_manager
    ));

    let config_path = ProjectConfig::path(&root);
    if config_path.exists() && !args.force {
        return Err(anyhow!(
            "components.json already exists at {}\n\nUse --force to overwrite",
            config_path.display()
        ));
    }

    let non_interactive = args.yes || args.defaults || !ui::is_interactive();
    let mut aliases = if args.defaults {
        AliasConfig::default()
    } else {
        AliasConfig::resolve(&root)
    };

    if !non_interactive {
        aliases = prompt_aliases(aliases)?;

        let proceed = Confirm::new("Write components.json with this configuration?")
            .with_default(true)
            .prompt()
            .context("Failed to get confirmation")?;
        if !proceed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let config = ProjectConfig {
        rsc: info.rsc,
        tsx: info.typescript,
        aliases,
    };
    config
        .save(&root)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!("wrote {}", config_path.display());

    write_utils_file(&config, &info, &root, args.force)?;

    let packages: Vec<String> = BASE_PACKAGES.iter().map(|pkg| pkg.to_string()).collect();
    let pb = ui::spinner(format!("Installing base packages with {}", info.package_manager));
    match installer::install(&root, info.package_manager, &packages) {
        Ok(()) => ui::finish_success(pb, "Base packages installed"),
        Err(err) => {
            ui::finish_error(pb, "Install failed");
            return Err(err).context("failed to install base packages");
        }
    }

    ui::status("\n✅ Project initialized.");
    ui::status("\nNext steps:");
    ui::status("  1. Add your first component: neobrute add button");
    ui::status("  2. Or pick interactively: neobrute add");

    Ok(())
}

fn prompt_aliases(defaults: AliasConfig) -> Result<AliasConfig> {
    let components = Text::new("Import alias for components:")
        .with_default(&defaults.components)
        .prompt()
        .context("Failed to get components alias")?;

    let utils = Text::new("Import alias for the cn utility:")
        .with_default(&defaults.utils)
        .prompt()
        .context("Failed to get utils alias")?;

    let ui_alias = Text::new("Import alias for ui components:")
        .with_default(&defaults.ui)
        .prompt()
        .context("Failed to get ui alias")?;

    Ok(AliasConfig {
        components,
        utils,
        ui: ui_alias,
    })
}

fn write_utils_file(
    config: &ProjectConfig,
    info: &ProjectInfo,
    root: &std::path::Path,
    force: bool,
) -> Result<()> {
    let utils_path = config.aliases.utils_file(root, info);

    if utils_path.exists() && !force {
        ui::status(format!(
            "Keeping existing {} (use --force to replace)",
            utils_path.display()
        ));
        return Ok(());
    }

    if let Some(parent) = utils_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    fs::write(&utils_path, registry::utils_template(info.typescript))
        .with_context(|| format!("Failed to write {}", utils_path.display()))?;
    info!("wrote {}", utils_path.display());

    Ok(())
}
