pub mod aliases;
pub mod config;
pub mod error;
pub mod installer;
pub mod project;
pub mod registry;
pub mod resolver;

pub use aliases::AliasConfig;
pub use config::ProjectConfig;
pub use error::{NeobruteError, Result};
pub use installer::install;
pub use project::{PackageManager, ProjectInfo, ProjectKind};
pub use registry::{ComponentEntry, BASE_PACKAGES, REGISTRY};
pub use resolver::{resolve, Resolution};
