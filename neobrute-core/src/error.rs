/// Structured error types for neobrute-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (neobrute-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for neobrute-core operations
#[derive(Error, Debug)]
pub enum NeobruteError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// Requested component is not in the registry
    #[error("Unknown component '{name}'. Valid components: {}", valid.join(", "))]
    UnknownComponent { name: String, valid: Vec<String> },

    /// Destination file already exists and overwrite was not requested
    #[error("Destination already exists: {path:?} (use --overwrite to replace)")]
    DestinationConflict { path: PathBuf },

    /// Package manager subprocess failed
    #[error("'{command}' exited with code {code}:\n{stderr}")]
    InstallFailure {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The static component manifest contains a dependency cycle
    #[error("Component manifest contains a cycle: {}", chain.join(" -> "))]
    ManifestCycle { chain: Vec<String> },

    /// File or directory not found
    #[error("Path not found: {path:?}")]
    PathNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for neobrute-core operations
pub type Result<T> = std::result::Result<T, NeobruteError>;

impl NeobruteError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create an unknown component error carrying the valid name list
    pub fn unknown_component(name: impl Into<String>, valid: Vec<String>) -> Self {
        Self::UnknownComponent {
            name: name.into(),
            valid,
        }
    }

    /// Create a destination conflict error
    pub fn destination_conflict(path: impl Into<PathBuf>) -> Self {
        Self::DestinationConflict { path: path.into() }
    }

    /// Create an install failure error
    pub fn install_failure(
        command: impl Into<String>,
        code: i32,
        stderr: impl Into<String>,
    ) -> Self {
        Self::InstallFailure {
            command: command.into(),
            code,
            stderr: stderr.into(),
        }
    }

    /// Create a manifest cycle error
    pub fn manifest_cycle(chain: Vec<String>) -> Self {
        Self::ManifestCycle { chain }
    }

    /// Create a path not found error
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::PathNotFound { path: path.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
