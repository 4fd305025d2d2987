//! neobrute CLI - copy-paste component distribution for Neo-Brutalism UI
//!
//! This is the main entry point for the neobrute command-line tool, which
//! provides:
//! - Project bootstrap: config, aliases and the `cn` helper (`init` subcommand)
//! - Copying component templates into a project, with dependency resolution
//!   and package installation (`add` subcommand)
//! - Shell completion generation (`completions` subcommand)

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "neobrute",
    author,
    version,
    about = "Add Neo-Brutalism styled components to your project",
    long_about = "Copy component source files into your own project tree, rewritten to \
                  use your import aliases, and install the packages they depend on."
)]
struct Cli {
    /// Suppress prompts and progress output (for scripted consumption)
    #[arg(long, short = 's', global = true)]
    silent: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize your project: write components.json and the cn helper
    Init(commands::init::InitArgs),
    /// Add components (and their dependencies) to your project
    Add(commands::add::AddArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    // Initialize quiet mode from flag, env var, and TTY detection
    ui::init_quiet_mode(cli.silent);

    match cli.command {
        Commands::Init(args) => commands::run_init(args)?,
        Commands::Add(args) => commands::run_add(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
