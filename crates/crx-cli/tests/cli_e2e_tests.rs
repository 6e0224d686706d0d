//! CLI end-to-end tests that invoke the compiled `crx` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn crx() -> Command {
    Command::cargo_bin("crx").expect("crx binary builds")
}

#[test]
fn test_help_exits_zero() {
    crx()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"));
}

#[test]
fn test_no_command_shows_hint() {
    crx()
        .assert()
        .success()
        .stdout(predicate::str::contains("crx --help"));
}

#[test]
fn test_new_scaffolds_react_popup_project() {
    let temp = TempDir::new().unwrap();
    crx()
        .current_dir(temp.path())
        .args([
            "new",
            "Demo",
            "--description",
            "Demo extension",
            "--manifest-version",
            "3",
            "--permission",
            "storage",
            "--feature",
            "popup",
            "--popup-language",
            "react",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let root = temp.path().join("Demo");
    assert!(root.join("popup.html").exists());
    assert!(root.join("popup.tsx").exists());
    assert!(root.join("TODO.md").exists());
    assert!(!root.join("package.json").exists());

    let manifest = fs::read_to_string(root.join("manifest.json")).unwrap();
    assert!(manifest.contains("\"default_popup\": \"popup.html\""));
    assert!(manifest.contains("\"manifest_version\": 3"));
}

#[test]
fn test_new_with_build_options_writes_package_json() {
    let temp = TempDir::new().unwrap();
    crx()
        .current_dir(temp.path())
        .args([
            "new",
            "demo",
            "--description",
            "Demo extension",
            "--manifest-version",
            "3",
            "--permission",
            "storage",
            "--feature",
            "background",
            "--background-language",
            "typescript",
            "--build-option",
            "bundler-webpack",
        ])
        .assert()
        .success();

    let package = fs::read_to_string(temp.path().join("demo/package.json")).unwrap();
    assert!(package.contains("\"webpack\""));
    assert!(package.contains("\"typescript\""));
}

#[test]
fn test_new_fails_without_permissions() {
    let temp = TempDir::new().unwrap();
    crx()
        .current_dir(temp.path())
        .args([
            "new",
            "demo",
            "--description",
            "Demo extension",
            "--manifest-version",
            "3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("permission"));
}

#[test]
fn test_new_fails_when_directory_exists() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();

    crx()
        .current_dir(temp.path())
        .args([
            "new",
            "demo",
            "--description",
            "Demo extension",
            "--manifest-version",
            "3",
            "--permission",
            "storage",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_new_rejects_unknown_manifest_version() {
    let temp = TempDir::new().unwrap();
    crx()
        .current_dir(temp.path())
        .args([
            "new",
            "demo",
            "--description",
            "d",
            "--manifest-version",
            "4",
            "--permission",
            "storage",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest version"));
}

#[test]
fn test_src_folder_keeps_manifest_at_root() {
    let temp = TempDir::new().unwrap();
    crx()
        .current_dir(temp.path())
        .args([
            "new",
            "demo",
            "--description",
            "Demo extension",
            "--manifest-version",
            "2",
            "--permission",
            "tabs",
            "--feature",
            "devtools",
            "--src-folder",
        ])
        .assert()
        .success();

    let root = temp.path().join("demo");
    assert!(root.join("src/devtools.html").exists());
    assert!(root.join("manifest.json").exists());
    assert!(!root.join("src/manifest.json").exists());

    let manifest = fs::read_to_string(root.join("manifest.json")).unwrap();
    assert!(manifest.contains("\"devtools_page\": \"devtools.html\""));
}
