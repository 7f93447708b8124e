//! Tests for error handling and suggestions.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn domainsmith(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("domainsmith").unwrap();
    cmd.current_dir(project)
        .env("HOME", project)
        .env("XDG_CONFIG_HOME", project.join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("DOMAINSMITH_STUBS_DIR")
        .arg("--no-color")
        .arg("--root")
        .arg(project);
    cmd
}

#[test]
fn test_error_subdomain_without_parent() {
    let temp = TempDir::new().unwrap();

    domainsmith(temp.path())
        .args(["generate-subdomain", "Users", "Profiles"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parent domain 'Users' does not exist"));

    assert!(!temp.path().join("app").exists());
}

#[test]
fn test_error_existing_subdomain_needs_force() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("app/Domains/Users/Profiles")).unwrap();

    domainsmith(temp.path())
        .args(["generate-subdomain", "Users", "Profiles"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_error_subdomain_flag_without_domain() {
    let temp = TempDir::new().unwrap();

    domainsmith(temp.path())
        .args(["generate-value-object", "Phone", "--subdomain", "Profiles"])
        .assert()
        .code(1);

    assert!(!temp.path().join("app").exists());
}

#[test]
fn test_error_invalid_domain_name() {
    let temp = TempDir::new().unwrap();

    domainsmith(temp.path())
        .args(["generate-domain", "../Users"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    assert!(!temp.path().join("app").exists());
}

#[test]
fn test_error_value_object_stub_missing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("stubs/custom")).unwrap();
    fs::write(
        root.join("domainsmith.toml"),
        "[stubs]\ndirectory = \"stubs/custom\"\nbuiltin_fallback = false\n",
    )
    .unwrap();

    domainsmith(root)
        .args(["generate-value-object", "Money"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("stub not found"));

    assert!(!root.join("app/ValueObjects").exists());
}

#[test]
fn test_error_unknown_config_key() {
    let temp = TempDir::new().unwrap();

    domainsmith(temp.path())
        .args(["config", "get", "does.not.exist"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_unknown_subcommand() {
    Command::cargo_bin("domainsmith")
        .unwrap()
        .arg("generate-everything")
        .assert()
        .code(1);
}
