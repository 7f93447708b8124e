//! Integration tests for the domainsmith binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the caller's config, env and colours.
fn domainsmith(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("domainsmith").unwrap();
    cmd.current_dir(project)
        .env("HOME", project)
        .env("XDG_CONFIG_HOME", project.join(".config"))
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .env_remove("DOMAINSMITH_STUBS_DIR")
        .env_remove("DOMAINSMITH__NAMESPACE__ROOT")
        .arg("--no-color")
        .arg("--root")
        .arg(project);
    cmd
}

fn migrations(project: &Path, table: &str) -> Vec<PathBuf> {
    let suffix = format!("_create_{table}_table.php");
    let dir = project.join("database/migrations");
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().ends_with(&suffix))
        .collect()
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("domainsmith")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate-domain"))
        .stdout(predicate::str::contains("generate-value-object"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("domainsmith")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_full_domain_run() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    domainsmith(root)
        .args(["generate-domain", "Users", "--migration", "--soft-deletes", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created file:"))
        .stdout(predicate::str::contains("Done:"));

    for sub in [
        "Entities",
        "Repositories",
        "DomainServices",
        "DataTransferObjects",
    ] {
        assert!(root.join("app/Domains/Users").join(sub).is_dir(), "{sub}");
    }

    let entity = fs::read_to_string(root.join("app/Domains/Users/Entities/User.php")).unwrap();
    assert!(entity.contains("namespace App\\Domains\\Users\\Entities;"));
    assert!(!entity.contains("{{"));

    let model = fs::read_to_string(root.join("app/Models/User.php")).unwrap();
    assert!(model.contains("SoftDeletes"));
    assert!(root.join("app/Models/BaseModel.php").is_file());
    assert!(root.join("app/Actions/Users/ForceDelete.php").is_file());
    assert!(root.join("database/factories/UserFactory.php").is_file());

    let migration = migrations(root, "users");
    assert_eq!(migration.len(), 1);
    assert!(fs::read_to_string(&migration[0]).unwrap().contains("softDeletes()"));

    let provider =
        fs::read_to_string(root.join("app/Providers/RepositoryServiceProvider.php")).unwrap();
    assert!(provider.contains("UserRepositoryInterface::class"));
}

#[test]
fn test_rerun_without_force_skips_on_closed_stdin() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    domainsmith(root)
        .args(["generate-domain", "Users"])
        .assert()
        .success();

    let entity = root.join("app/Domains/Users/Entities/User.php");
    fs::write(&entity, "<?php // edited").unwrap();

    domainsmith(root)
        .args(["generate-domain", "Users"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped file:"))
        .stderr(predicate::str::contains("Overwrite?"));

    assert_eq!(fs::read_to_string(&entity).unwrap(), "<?php // edited");
}

#[test]
fn test_confirmed_overwrite_replaces_value_object() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let file = root.join("app/ValueObjects/MoneyValueObject.php");

    domainsmith(root)
        .args(["generate-value-object", "Money"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MoneyValueObject.php"));
    fs::write(&file, "stale").unwrap();

    domainsmith(root)
        .args(["generate-value-object", "Money"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Replaced file:"));

    assert!(fs::read_to_string(&file).unwrap().contains("class MoneyValueObject"));
}

#[test]
fn test_rerun_keeps_single_migration() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    for _ in 0..2 {
        domainsmith(root)
            .args(["generate-domain", "Orders", "--migration", "--force"])
            .assert()
            .success();
    }

    assert_eq!(migrations(root, "orders").len(), 1);
}

#[test]
fn test_subdomain_nests_under_parent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    domainsmith(root)
        .args(["generate-domain", "Users", "--force"])
        .assert()
        .success();
    domainsmith(root)
        .args(["generate-subdomain", "Users", "Profiles", "--force"])
        .assert()
        .success();

    let entity =
        fs::read_to_string(root.join("app/Domains/Users/Profiles/Entities/Profile.php")).unwrap();
    assert!(entity.contains("namespace App\\Domains\\Users\\Profiles\\Entities;"));
    assert!(root.join("app/Actions/Users/Profiles/Create.php").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    domainsmith(root)
        .args(["generate-domain", "Users", "--migration", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: nothing was written"))
        .stdout(predicate::str::contains("User.php"));

    assert!(!root.join("app").exists());
    assert!(!root.join("database").exists());
}

#[test]
fn test_json_report_on_stdout() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    let output = domainsmith(root)
        .args(["--output-format", "json", "generate-domain", "Users", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["artifacts"].as_array().unwrap().len() > 10);
    assert_eq!(report["artifacts"][0]["outcome"]["status"], "created");
}

#[test]
fn test_init_creates_project_config_once() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    domainsmith(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = fs::read_to_string(root.join("domainsmith.toml")).unwrap();
    assert!(written.contains("[namespace]"));

    domainsmith(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_get_reads_environment() {
    let temp = TempDir::new().unwrap();

    domainsmith(temp.path())
        .env("DOMAINSMITH__NAMESPACE__ROOT", "Acme")
        .args(["config", "get", "namespace.root"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Acme\n"));
}

#[test]
fn test_project_config_changes_namespace() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::write(root.join("domainsmith.toml"), "[namespace]\nroot = \"Acme\"\n").unwrap();

    domainsmith(root)
        .args(["generate-value-object", "Money"])
        .assert()
        .success();

    let text = fs::read_to_string(root.join("app/ValueObjects/MoneyValueObject.php")).unwrap();
    assert!(text.contains("namespace Acme\\ValueObjects;"));
}

#[test]
fn test_completions_bash() {
    let temp = TempDir::new().unwrap();

    domainsmith(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("domainsmith"));
}
