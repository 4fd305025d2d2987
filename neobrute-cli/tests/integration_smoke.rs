//! End-to-end tests for the init/add pipeline against scratch projects.
//!
//! These run the real binary in temp directories with no package.json, so
//! the installer skips the subprocess step and everything works offline.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn neobrute() -> Command {
    Command::cargo_bin("neobrute").unwrap()
}

// === Help wiring ===

#[test]
fn test_init_help() {
    neobrute()
        .arg("init")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("components.json"));
}

#[test]
fn test_add_help() {
    neobrute()
        .arg("add")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Components to add"));
}

#[test]
fn test_completions_bash() {
    neobrute()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("neobrute"));
}

// === add: unknown component ===

#[test]
fn test_add_unknown_component_fails_and_writes_nothing() {
    let temp = TempDir::new().unwrap();

    neobrute()
        .arg("add")
        .arg("buton")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown component 'buton'"))
        .stderr(predicate::str::contains("button"));

    // The whole command aborts before any file is written
    assert!(!temp.path().join("components").exists());
}

#[test]
fn test_add_unknown_among_valid_writes_nothing() {
    let temp = TempDir::new().unwrap();

    neobrute()
        .arg("add")
        .arg("badge")
        .arg("nope")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .failure();

    assert!(!temp.path().join("components/ui/badge.tsx").exists());
}

// === add: default aliases in a bare directory ===

#[test]
fn test_add_badge_renders_default_utils_alias() {
    let temp = TempDir::new().unwrap();

    neobrute()
        .arg("add")
        .arg("badge")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    let badge = fs::read_to_string(temp.path().join("components/ui/badge.tsx")).unwrap();
    assert!(badge.contains("import { cn } from \"@/lib/utils\""));
    // No "use client" banner outside RSC projects
    assert!(!badge.starts_with("\"use client\""));
}

#[test]
fn test_add_honors_tsconfig_alias_prefix() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("tsconfig.json"),
        r#"{"compilerOptions":{"paths":{"~/*":["./src/*"]}}}"#,
    )
    .unwrap();

    neobrute()
        .arg("add")
        .arg("badge")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    let badge = fs::read_to_string(temp.path().join("components/ui/badge.tsx")).unwrap();
    assert!(badge.contains("import { cn } from \"~/lib/utils\""));
}

// === add: conflict handling ===

#[test]
fn test_add_without_overwrite_keeps_existing_file_byte_for_byte() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("components/ui/badge.tsx");
    fs::create_dir_all(dest.parent().unwrap()).unwrap();
    fs::write(&dest, "// my customized badge\n").unwrap();

    neobrute()
        .arg("add")
        .arg("badge")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "// my customized badge\n"
    );
}

#[test]
fn test_add_with_overwrite_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("components/ui/badge.tsx");
    fs::create_dir_all(dest.parent().unwrap()).unwrap();
    fs::write(&dest, "// my customized badge\n").unwrap();

    neobrute()
        .arg("add")
        .arg("badge")
        .arg("--overwrite")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    let badge = fs::read_to_string(&dest).unwrap();
    assert!(badge.contains("badgeVariants"));
}

// === add: dependency closure ===

#[test]
fn test_add_alert_dialog_pulls_in_button() {
    let temp = TempDir::new().unwrap();

    neobrute()
        .arg("add")
        .arg("alert-dialog")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("components/ui/alert-dialog.tsx").exists());
    assert!(temp.path().join("components/ui/button.tsx").exists());

    let dialog = fs::read_to_string(temp.path().join("components/ui/alert-dialog.tsx")).unwrap();
    assert!(dialog.contains("from \"@/components/ui/button\""));
}

#[test]
fn test_add_all_writes_every_registry_component() {
    let temp = TempDir::new().unwrap();

    neobrute()
        .arg("add")
        .arg("--all")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    for name in ["accordion", "badge", "button", "card", "tooltip"] {
        assert!(
            temp.path().join(format!("components/ui/{name}.tsx")).exists(),
            "missing {name}"
        );
    }
}

// === add: --path override ===

#[test]
fn test_add_path_override() {
    let temp = TempDir::new().unwrap();

    neobrute()
        .arg("add")
        .arg("input")
        .arg("--path")
        .arg("widgets")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("widgets/input.tsx").exists());
    assert!(!temp.path().join("components").exists());
}

// === add: no selection, non-interactive ===

#[test]
fn test_add_without_components_fails_non_interactively() {
    let temp = TempDir::new().unwrap();

    neobrute()
        .arg("add")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no components specified"));
}

// === init + add ===

#[test]
fn test_init_defaults_then_add_button_without_prompts() {
    let temp = TempDir::new().unwrap();

    neobrute()
        .arg("init")
        .arg("--defaults")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("components.json").exists());
    let utils = fs::read_to_string(temp.path().join("lib/utils.js")).unwrap();
    assert!(utils.contains("export function cn"));

    neobrute()
        .arg("add")
        .arg("button")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    let button = fs::read_to_string(temp.path().join("components/ui/button.tsx")).unwrap();
    assert!(button.contains("import { cn } from \"@/lib/utils\""));
}

#[test]
fn test_init_refuses_to_clobber_without_force() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("components.json"), "{}\n").unwrap();

    neobrute()
        .arg("init")
        .arg("--defaults")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // Untouched
    assert_eq!(
        fs::read_to_string(temp.path().join("components.json")).unwrap(),
        "{}\n"
    );
}

#[test]
fn test_init_force_overwrites_config() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("components.json"), "{}\n").unwrap();

    neobrute()
        .arg("init")
        .arg("--defaults")
        .arg("--force")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    let config = fs::read_to_string(temp.path().join("components.json")).unwrap();
    assert!(config.contains("\"aliases\""));
}

#[test]
fn test_init_on_typescript_next_project() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("next.config.mjs"), "export default {}\n").unwrap();
    fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();
    fs::create_dir_all(temp.path().join("src/app")).unwrap();

    neobrute()
        .arg("init")
        .arg("--defaults")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    // src/ layout and TypeScript extension for the utils helper
    assert!(temp.path().join("src/lib/utils.ts").exists());

    let config = fs::read_to_string(temp.path().join("components.json")).unwrap();
    assert!(config.contains("\"rsc\": true"));

    // Client components in an RSC project get the banner
    neobrute()
        .arg("add")
        .arg("dialog")
        .arg("--cwd")
        .arg(temp.path())
        .assert()
        .success();

    let dialog = fs::read_to_string(temp.path().join("src/components/ui/dialog.tsx")).unwrap();
    assert!(dialog.starts_with("\"use client\""));
}

#[test]
fn test_nonexistent_cwd_fails() {
    neobrute()
        .arg("add")
        .arg("badge")
        .arg("--cwd")
        .arg("/definitely/not/a/real/path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}
