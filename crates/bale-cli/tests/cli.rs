//! CLI integration tests using the real bale binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
[bundle.entries]
index = "client/assets/entries/index.js"
app = "client/assets/entries/app.jsx"

[[bundle.rules]]
test = '\.js$|\.jsx$'
exclude = "node_modules"
use = ["babel-loader"]

[[bundle.rules]]
test = '\.css$|\.scss$'
use = ["css-loader", "sass-loader"]
extract = true
fallback = "style-loader"

[profiles.development.bundle]
mode = "development"
"#;

#[allow(deprecated)]
fn bale_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bale").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "bale.toml", CONFIG);
    write(dir.path(), "client/assets/entries/index.js", "");
    write(dir.path(), "client/assets/entries/app.jsx", "");
    dir
}

#[test]
fn help_lists_commands() {
    bale_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("match"));
}

#[test]
fn plan_prints_json() {
    let dir = project();
    let output = bale_cmd()
        .args(["plan", "--no-env", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(plan["entries"][0]["name"], "index");
    assert_eq!(plan["entries"][1]["output"], "app-bundle.min.js");
    assert_eq!(plan["entries"][1]["stylesheet"], "app-style.min.css");
    assert_eq!(plan["mode"], "production");
}

#[test]
fn plan_applies_profile() {
    let dir = project();
    let output = bale_cmd()
        .args(["plan", "--no-env", "--profile", "development", "--config"])
        .arg(dir.path().join("bale.toml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(plan["mode"], "development");
    assert_eq!(plan["rules"][1]["use"][0]["loader"], "style-loader");
}

#[test]
fn environment_overrides_profile() {
    let dir = project();
    let output = bale_cmd()
        .env("BALE_BUNDLE__MODE", "production")
        .args(["plan", "--profile", "development", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(plan["mode"], "production");
}

#[test]
fn plan_fails_on_missing_source() {
    let dir = project();
    fs::remove_file(dir.path().join("client/assets/entries/app.jsx")).unwrap();

    bale_cmd()
        .args(["plan", "--no-env", "--root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("source not found"));
}

#[test]
fn check_reports_summary() {
    let dir = project();
    bale_cmd()
        .args(["check", "--no-env", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Configuration is valid: 2 entries, 2 rules"));
}

#[test]
fn check_fails_without_config() {
    let dir = TempDir::new().unwrap();
    bale_cmd()
        .args(["check", "--no-env", "--root"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config not found"));
}

#[test]
fn match_prints_chain() {
    let dir = project();
    bale_cmd()
        .args(["match", "client/assets/stylesheets/main.scss", "--no-env", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("css-loader\nsass-loader\n");
}

#[test]
fn match_passes_through_unmatched_files() {
    let dir = project();
    bale_cmd()
        .args(["match", "logo.png", "--no-env", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no transform for logo.png"));
}
