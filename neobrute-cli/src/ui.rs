//! Unified UI helpers for the neobrute CLI
//!
//! Provides consistent progress feedback across commands with automatic
//! quiet mode detection.
//!
//! # Quiet Mode
//!
//! Progress spinners are suppressed when:
//! - `--silent` flag is passed
//! - `NEOBRUTE_QUIET=1` environment variable is set
//! - stderr is not a TTY (piped output)

use std::io::IsTerminal;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Global quiet mode state
static QUIET_MODE: OnceLock<bool> = OnceLock::new();

/// Initialize quiet mode from flags and environment
///
/// Call this once at startup with the --silent flag value.
/// Will also check NEOBRUTE_QUIET env var and TTY status.
pub fn init_quiet_mode(silent_flag: bool) {
    let is_quiet = silent_flag
        || std::env::var("NEOBRUTE_QUIET").map(|v| v == "1").unwrap_or(false)
        || !std::io::stderr().is_terminal();

    QUIET_MODE.set(is_quiet).ok();
}

/// Check if we're in quiet mode
pub fn is_quiet() -> bool {
    *QUIET_MODE.get().unwrap_or(&false)
}

/// Whether prompting the user is possible (interactive TTY, not quiet)
pub fn is_interactive() -> bool {
    !is_quiet() && std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Print a status line unless in quiet mode
pub fn status(msg: impl AsRef<str>) {
    if !is_quiet() {
        println!("{}", msg.as_ref());
    }
}

/// Create a spinner that respects quiet mode
///
/// Returns None in quiet mode, allowing clean scripted output.
pub fn spinner(msg: impl Into<String>) -> Option<ProgressBar> {
    if is_quiet() {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
            .template("{spinner:.cyan} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.into());
    pb.enable_steady_tick(Duration::from_millis(80));
    Some(pb)
}

/// Finish a progress bar with a success message
pub fn finish_success(pb: Option<ProgressBar>, msg: impl Into<String>) {
    if let Some(pb) = pb {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .expect("valid template"),
        );
        pb.finish_with_message(format!("✓ {}", msg.into()));
    }
}

/// Finish a progress bar with an error message
pub fn finish_error(pb: Option<ProgressBar>, msg: impl Into<String>) {
    if let Some(pb) = pb {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .expect("valid template"),
        );
        pb.finish_with_message(format!("✗ {}", msg.into()));
    }
}
