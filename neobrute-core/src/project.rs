//! Project detection: classify the consumer's project from filesystem evidence.
//!
//! Detection is a single pass over the project root, run once per CLI
//! invocation. Marker files are checked in a fixed priority order and an
//! indeterminate project always falls back to a safe default (`Manual` /
//! `Npm`) rather than erroring.

use std::fmt;
use std::path::Path;

use tracing::debug;

/// Framework classification, from config-file markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    /// Next.js project (next.config.*)
    NextJs,
    /// Vite project (vite.config.*)
    Vite,
    /// No recognized framework config; components are still copyable
    Manual,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectKind::NextJs => write!(f, "Next.js"),
            ProjectKind::Vite => write!(f, "Vite"),
            ProjectKind::Manual => write!(f, "manual"),
        }
    }
}

/// Package manager, from lockfile presence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pnpm,
    Bun,
    Yarn,
    Npm,
}

impl PackageManager {
    /// Executable name on PATH
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Install subcommand for adding packages to an existing project
    pub fn install_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            _ => "add",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Lockfile markers, highest priority first. pnpm/bun/yarn lockfiles are
/// unambiguous; package-lock.json is checked last since npm is also the
/// fallback.
const LOCKFILE_MARKERS: &[(&str, PackageManager)] = &[
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
];

/// Framework config markers, highest priority first
const FRAMEWORK_MARKERS: &[(&str, ProjectKind)] = &[
    ("next.config.js", ProjectKind::NextJs),
    ("next.config.mjs", ProjectKind::NextJs),
    ("next.config.ts", ProjectKind::NextJs),
    ("vite.config.ts", ProjectKind::Vite),
    ("vite.config.js", ProjectKind::Vite),
    ("vite.config.mjs", ProjectKind::Vite),
    ("vite.config.mts", ProjectKind::Vite),
];

/// Everything detection learned about the consumer project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    pub kind: ProjectKind,
    pub package_manager: PackageManager,
    /// tsconfig.json present; templates are written as .tsx when true
    pub typescript: bool,
    /// src/ directory present; alias-relative files land under it
    pub src_dir: bool,
    /// Next.js app router present; client components get a "use client" banner
    pub rsc: bool,
}

impl ProjectInfo {
    /// Detect project type, package manager and layout from marker files.
    ///
    /// Never fails: a directory with no markers classifies as a manual npm
    /// TypeScript-less project, which every downstream default is safe for.
    pub fn detect(root: &Path) -> Self {
        let kind = FRAMEWORK_MARKERS
            .iter()
            .find(|(marker, _)| root.join(marker).is_file())
            .map(|(_, kind)| *kind)
            .unwrap_or(ProjectKind::Manual);

        let package_manager = LOCKFILE_MARKERS
            .iter()
            .find(|(marker, _)| root.join(marker).is_file())
            .map(|(_, pm)| *pm)
            .unwrap_or(PackageManager::Npm);

        let typescript = root.join("tsconfig.json").is_file();
        let src_dir = root.join("src").is_dir();

        // App router lives at app/ or src/app/; only meaningful for Next.js
        let rsc = kind == ProjectKind::NextJs
            && (root.join("app").is_dir() || root.join("src/app").is_dir());

        let info = Self {
            kind,
            package_manager,
            typescript,
            src_dir,
            rsc,
        };
        debug!(?info, "detected project at {}", root.display());
        info
    }
}
