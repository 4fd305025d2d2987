//! Alias resolution: where generated files land and what import specifiers
//! generated code uses.
//!
//! Resolution order is "config present -> use it; else -> defaults", with no
//! merging: an existing `components.json` wins, then a `tsconfig.json` path
//! alias seeds the prefix, then the built-in defaults apply. A malformed
//! config file is a warning, never fatal.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ProjectConfig;
use crate::project::ProjectInfo;

pub const DEFAULT_COMPONENTS_ALIAS: &str = "@/components";
pub const DEFAULT_UTILS_ALIAS: &str = "@/lib/utils";
pub const DEFAULT_UI_ALIAS: &str = "@/components/ui";

/// Import specifiers substituted into rendered templates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    pub components: String,
    pub utils: String,
    pub ui: String,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            components: DEFAULT_COMPONENTS_ALIAS.to_string(),
            utils: DEFAULT_UTILS_ALIAS.to_string(),
            ui: DEFAULT_UI_ALIAS.to_string(),
        }
    }
}

impl AliasConfig {
    /// Build the default alias trio on top of a tsconfig path prefix
    /// (e.g. "~" -> "~/components", "~/lib/utils", "~/components/ui").
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            components: format!("{prefix}/components"),
            utils: format!("{prefix}/lib/utils"),
            ui: format!("{prefix}/components/ui"),
        }
    }

    /// Resolve aliases for a project root.
    ///
    /// Checks `components.json` first (written by `init`), then derives the
    /// prefix from `tsconfig.json` path aliases, then falls back to the
    /// built-in defaults.
    pub fn resolve(root: &Path) -> Self {
        if let Some(config) = ProjectConfig::load(root) {
            debug!("aliases from components.json");
            return config.aliases;
        }

        if let Some(prefix) = tsconfig_alias_prefix(root) {
            debug!("alias prefix '{}' from tsconfig.json", prefix);
            return Self::with_prefix(&prefix);
        }

        debug!("no alias config found, using defaults");
        Self::default()
    }

    /// Concrete directory the `ui` alias maps to, honoring src/ layout
    pub fn target_dir(&self, root: &Path, info: &ProjectInfo) -> PathBuf {
        alias_to_path(root, &self.ui, info).unwrap_or_else(|| {
            root.join(if info.src_dir {
                "src/components/ui"
            } else {
                "components/ui"
            })
        })
    }

    /// Concrete path of the utils helper file the `utils` alias maps to
    pub fn utils_file(&self, root: &Path, info: &ProjectInfo) -> PathBuf {
        let ext = if info.typescript { "ts" } else { "js" };
        let base = alias_to_path(root, &self.utils, info)
            .unwrap_or_else(|| root.join(if info.src_dir { "src/lib/utils" } else { "lib/utils" }));
        base.with_extension(ext)
    }
}

/// Map an alias like "@/components/ui" onto the filesystem by dropping the
/// prefix token and rooting the remainder at `<root>[/src]`.
fn alias_to_path(root: &Path, alias: &str, info: &ProjectInfo) -> Option<PathBuf> {
    let rest = alias.split_once('/').map(|(_, rest)| rest)?;
    if rest.is_empty() {
        return None;
    }
    let base = if info.src_dir { root.join("src") } else { root.to_path_buf() };
    Some(base.join(rest))
}

/// Extract the wildcard alias prefix from `compilerOptions.paths`
/// (e.g. `"@/*": ["./src/*"]` -> "@").
fn tsconfig_alias_prefix(root: &Path) -> Option<String> {
    let tsconfig_path = root.join("tsconfig.json");
    if !tsconfig_path.is_file() {
        return None;
    }

    let content = match std::fs::read_to_string(&tsconfig_path) {
        Ok(content) => content,
        Err(err) => {
            warn!("could not read {}: {}", tsconfig_path.display(), err);
            return None;
        }
    };

    // tsconfig.json may be JSONC; a parse failure here is expected and
    // falls back to the default aliases.
    let tsconfig: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(err) => {
            warn!(
                "could not parse {} ({}), falling back to default aliases",
                tsconfig_path.display(),
                err
            );
            return None;
        }
    };

    let paths = tsconfig.get("compilerOptions")?.get("paths")?.as_object()?;

    paths
        .keys()
        .find_map(|key| key.strip_suffix("/*"))
        .filter(|prefix| !prefix.is_empty())
        .map(String::from)
}
