//! `components.json`: the per-project configuration written by `init` and
//! read back by `add`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::aliases::AliasConfig;
use crate::error::{NeobruteError, Result};

pub const CONFIG_FILE: &str = "components.json";

/// Per-project configuration, persisted at the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// React Server Components project; client templates get "use client"
    pub rsc: bool,
    /// Write .tsx templates (false would be a .jsx project; templates ship
    /// as TSX either way, the flag records what detection saw)
    pub tsx: bool,
    pub aliases: AliasConfig,
}

impl ProjectConfig {
    pub fn path(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }

    /// Load the project config if present.
    ///
    /// An absent file is normal (the consumer may never have run `init`).
    /// A malformed file is a warning and treated as absent so callers fall
    /// back to detection + defaults.
    pub fn load(root: &Path) -> Option<Self> {
        let path = Self::path(root);
        if !path.is_file() {
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!("could not read {}: {}", path.display(), err);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                warn!(
                    "could not parse {} ({}), falling back to defaults",
                    path.display(),
                    err
                );
                None
            }
        }
    }

    /// Write the config to `<root>/components.json`, pretty-printed
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = Self::path(root);
        let mut content = serde_json::to_string_pretty(self)
            .map_err(|err| NeobruteError::json(CONFIG_FILE, err))?;
        content.push('\n');
        fs::write(&path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig {
            rsc: true,
            tsx: true,
            aliases: AliasConfig::default(),
        };
        config.save(temp.path()).unwrap();

        let loaded = ProjectConfig::load(temp.path()).unwrap();
        assert!(loaded.rsc);
        assert_eq!(loaded.aliases, AliasConfig::default());
    }

    #[test]
    fn test_absent_file_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(ProjectConfig::load(temp.path()).is_none());
    }

    #[test]
    fn test_malformed_file_is_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "{ not json").unwrap();
        assert!(ProjectConfig::load(temp.path()).is_none());
    }

    #[test]
    fn test_save_ends_with_newline() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig {
            rsc: false,
            tsx: false,
            aliases: AliasConfig::default(),
        };
        config.save(temp.path()).unwrap();

        let content = fs::read_to_string(temp.path().join(CONFIG_FILE)).unwrap();
        assert!(content.ends_with('\n'));
    }
}
