//! Dependency resolution: expand requested components into the transitive
//! closure of registry components and external npm packages.

use std::collections::BTreeSet;

use crate::error::{NeobruteError, Result};
use crate::registry::{self, ComponentEntry};

/// The expanded, de-duplicated result of a resolution pass
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Components in write order: dependencies before dependents,
    /// first-requested first
    pub components: Vec<&'static ComponentEntry>,
    /// Union of external npm packages the components require
    pub packages: BTreeSet<String>,
}

impl Resolution {
    /// Names of the resolved components, in write order
    pub fn component_names(&self) -> Vec<&'static str> {
        self.components.iter().map(|entry| entry.name).collect()
    }
}

/// Expand the transitive closure of the requested component names.
///
/// An unknown name is fatal and reports the full valid-name list. The
/// registry is static and author-controlled, so a cycle is an authoring bug;
/// the guard exists so a bad manifest fails loudly instead of looping.
pub fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Resolution> {
    let mut visited = BTreeSet::new();
    let mut visiting = Vec::new();
    let mut components = Vec::new();

    for name in names {
        visit(name.as_ref(), &mut visited, &mut visiting, &mut components)?;
    }

    let packages = components
        .iter()
        .flat_map(|entry: &&ComponentEntry| entry.dependencies.iter())
        .map(|pkg| pkg.to_string())
        .collect();

    Ok(Resolution {
        components,
        packages,
    })
}

fn visit(
    name: &str,
    visited: &mut BTreeSet<&'static str>,
    visiting: &mut Vec<String>,
    out: &mut Vec<&'static ComponentEntry>,
) -> Result<()> {
    let entry = registry::get(name)
        .ok_or_else(|| NeobruteError::unknown_component(name, registry::component_names()))?;

    if visited.contains(entry.name) {
        return Ok(());
    }

    if visiting.iter().any(|seen| seen == name) {
        let mut chain = visiting.clone();
        chain.push(name.to_string());
        return Err(NeobruteError::manifest_cycle(chain));
    }

    visiting.push(name.to_string());
    for dep in entry.registry_dependencies {
        visit(dep, visited, visiting, out)?;
    }
    visiting.pop();

    visited.insert(entry.name);
    out.push(entry);
    Ok(())
}
