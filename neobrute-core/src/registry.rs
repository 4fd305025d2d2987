//! The component registry: a static table mapping component name to its
//! template source and dependency lists.
//!
//! Templates ship inside the binary (`include_str!`) with alias placeholders
//! (`{{utils}}`, `{{ui}}`, `{{components}}`) that rendering substitutes with
//! the consumer project's resolved aliases. The table is built once at first
//! use and never mutated.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

use crate::aliases::AliasConfig;
use crate::error::{NeobruteError, Result};

/// npm packages every project needs after `init` (the `cn` helper and the
/// styling utilities the templates assume)
pub const BASE_PACKAGES: &[&str] = &[
    "class-variance-authority",
    "clsx",
    "lucide-react",
    "tailwind-merge",
];

/// One registry entry: a component template plus what it requires
#[derive(Debug, Clone, Copy)]
pub struct ComponentEntry {
    pub name: &'static str,
    pub description: &'static str,
    /// External npm packages this component imports
    pub dependencies: &'static [&'static str],
    /// Other registry components this component imports
    pub registry_dependencies: &'static [&'static str],
    /// Needs a "use client" banner in React Server Components projects
    pub client: bool,
    source: &'static str,
}

impl ComponentEntry {
    /// File name the rendered template is written as
    pub fn file_name(&self) -> String {
        format!("{}.tsx", self.name)
    }

    /// Render the template against resolved aliases.
    ///
    /// Pure string substitution; the same entry and aliases always produce
    /// the same output.
    pub fn render(&self, aliases: &AliasConfig, rsc: bool) -> String {
        let body = self
            .source
            .replace("{{utils}}", &aliases.utils)
            .replace("{{ui}}", &aliases.ui)
            .replace("{{components}}", &aliases.components);

        if self.client && rsc {
            format!("\"use client\"\n\n{body}")
        } else {
            body
        }
    }

    /// Render and write this component into `dest_dir`.
    ///
    /// An existing destination without `overwrite` is a
    /// `DestinationConflict`; callers decide whether that is a skip (the
    /// existing file is left byte-for-byte intact) or a prompt.
    pub fn write_to(
        &self,
        dest_dir: &Path,
        aliases: &AliasConfig,
        rsc: bool,
        overwrite: bool,
    ) -> Result<PathBuf> {
        let dest = dest_dir.join(self.file_name());

        if dest.exists() && !overwrite {
            return Err(NeobruteError::destination_conflict(dest));
        }

        fs::write(&dest, self.render(aliases, rsc))?;
        Ok(dest)
    }
}

macro_rules! entry {
    ($name:literal, $desc:literal, deps: $deps:expr, registry: $registry:expr, client: $client:expr) => {
        (
            $name,
            ComponentEntry {
                name: $name,
                description: $desc,
                dependencies: $deps,
                registry_dependencies: $registry,
                client: $client,
                source: include_str!(concat!("../templates/", $name, ".tsx")),
            },
        )
    };
}

/// Static component manifest, keyed by component name
pub static REGISTRY: Lazy<BTreeMap<&'static str, ComponentEntry>> = Lazy::new(|| {
    BTreeMap::from([
        entry!("accordion", "Vertically stacked expandable sections",
            deps: &["@radix-ui/react-accordion", "lucide-react"], registry: &[], client: true),
        entry!("alert", "Callout for user attention",
            deps: &["class-variance-authority"], registry: &[], client: false),
        entry!("alert-dialog", "Modal dialog that interrupts with a choice",
            deps: &["@radix-ui/react-alert-dialog"], registry: &["button"], client: true),
        entry!("avatar", "Image element with fallback",
            deps: &["@radix-ui/react-avatar"], registry: &[], client: true),
        entry!("badge", "Small status descriptor",
            deps: &["class-variance-authority"], registry: &[], client: false),
        entry!("breadcrumb", "Hierarchy path with links",
            deps: &["@radix-ui/react-slot", "lucide-react"], registry: &[], client: false),
        entry!("button", "Clickable button with variants",
            deps: &["@radix-ui/react-slot", "class-variance-authority"], registry: &[], client: false),
        entry!("card", "Container with header, content and footer",
            deps: &[], registry: &[], client: false),
        entry!("checkbox", "Toggleable checked state",
            deps: &["@radix-ui/react-checkbox", "lucide-react"], registry: &[], client: true),
        entry!("dialog", "Modal window overlaid on the page",
            deps: &["@radix-ui/react-dialog", "lucide-react"], registry: &[], client: true),
        entry!("input", "Form text input",
            deps: &[], registry: &[], client: false),
        entry!("label", "Accessible form label",
            deps: &["@radix-ui/react-label", "class-variance-authority"], registry: &[], client: true),
        entry!("skeleton", "Loading placeholder",
            deps: &[], registry: &[], client: false),
        entry!("switch", "On/off toggle",
            deps: &["@radix-ui/react-switch"], registry: &[], client: true),
        entry!("textarea", "Multi-line form input",
            deps: &[], registry: &[], client: false),
        entry!("tooltip", "Popup shown on hover or focus",
            deps: &["@radix-ui/react-tooltip"], registry: &[], client: true),
    ])
});

/// Look up a component by name
pub fn get(name: &str) -> Option<&'static ComponentEntry> {
    REGISTRY.get(name)
}

/// All registry names, sorted (BTreeMap order)
pub fn component_names() -> Vec<String> {
    REGISTRY.keys().map(|name| name.to_string()).collect()
}

/// Source of the `cn` utils helper written by `init`
pub fn utils_template(typescript: bool) -> &'static str {
    if typescript {
        include_str!("../templates/utils.ts")
    } else {
        include_str!("../templates/utils.js")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_references_its_own_placeholders_only() {
        for entry in REGISTRY.values() {
            let rendered = entry.render(&AliasConfig::default(), false);
            assert!(
                !rendered.contains("{{"),
                "unsubstituted placeholder in '{}'",
                entry.name
            );
        }
    }

    #[test]
    fn test_render_substitutes_resolved_utils_alias() {
        let aliases = AliasConfig::with_prefix("~");
        for entry in REGISTRY.values() {
            let rendered = entry.render(&aliases, false);
            assert!(
                rendered.contains("import { cn } from \"~/lib/utils\""),
                "'{}' did not render the resolved utils alias",
                entry.name
            );
        }
    }

    #[test]
    fn test_use_client_banner_only_for_client_components_in_rsc() {
        let aliases = AliasConfig::default();

        let dialog = get("dialog").unwrap();
        assert!(dialog.render(&aliases, true).starts_with("\"use client\""));
        assert!(!dialog.render(&aliases, false).starts_with("\"use client\""));

        let card = get("card").unwrap();
        assert!(!card.render(&aliases, true).starts_with("\"use client\""));
    }

    #[test]
    fn test_alert_dialog_imports_button_through_ui_alias() {
        let entry = get("alert-dialog").unwrap();
        let rendered = entry.render(&AliasConfig::default(), false);
        assert!(rendered.contains("from \"@/components/ui/button\""));
        assert_eq!(entry.registry_dependencies, &["button"]);
    }

    #[test]
    fn test_registry_dependencies_exist() {
        for entry in REGISTRY.values() {
            for dep in entry.registry_dependencies {
                assert!(get(dep).is_some(), "'{}' requires unknown '{}'", entry.name, dep);
            }
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(get("badge").unwrap().file_name(), "badge.tsx");
    }

    #[test]
    fn test_write_to_conflicts_without_overwrite() {
        let temp = tempfile::TempDir::new().unwrap();
        let entry = get("badge").unwrap();
        let aliases = AliasConfig::default();

        entry.write_to(temp.path(), &aliases, false, false).unwrap();

        let err = entry
            .write_to(temp.path(), &aliases, false, false)
            .unwrap_err();
        assert!(matches!(err, NeobruteError::DestinationConflict { .. }));

        // Overwrite replaces
        entry.write_to(temp.path(), &aliases, false, true).unwrap();
    }
}
