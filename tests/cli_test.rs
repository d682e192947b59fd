//! Integration tests for the componentgen binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn componentgen(dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("componentgen"));
    cmd.current_dir(dir.path());
    cmd.env_remove("COMPONENTGEN_DIR");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("React component"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_creates_typescript_button() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .args(["Button", "--ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Component Button created at src/components/Button/Button.tsx",
        ));

    let body = fs::read_to_string(temp.path().join("src/components/Button/Button.tsx"))?;
    assert!(body.contains("interface ButtonProps"));
    assert!(body.contains("backgroundColor = '#007bff'"));
    assert!(body.ends_with("export default Button;"));
    Ok(())
}

#[test]
fn cli_defaults_to_javascript() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp).arg("Input").assert().success();

    let body = fs::read_to_string(temp.path().join("src/components/Input/Input.jsx"))?;
    assert!(body.contains("value: PropTypes.string.isRequired,"));
    assert!(body.contains("placeholder: 'Enter text...',"));
    assert!(!body.contains("interface"));
    Ok(())
}

#[test]
fn cli_accepts_single_dash_dialect_flags() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .args(["Button", "-ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("src/components/Button/Button.tsx"));
    componentgen(&temp).args(["Input", "-js"]).assert().success();

    assert!(temp.path().join("src/components/Button/Button.tsx").is_file());
    assert!(temp.path().join("src/components/Input/Input.jsx").is_file());
    Ok(())
}

#[test]
fn cli_unknown_category_fails_without_side_effects() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .args(["Checkbox", "--ts"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown component category 'Checkbox'"))
        .stderr(predicate::str::contains("Button, Input"));

    assert_eq!(fs::read_dir(temp.path())?.count(), 0);
    Ok(())
}

#[test]
fn cli_category_match_is_case_sensitive() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp).arg("button").assert().failure();
    assert!(!temp.path().join("src").exists());
    Ok(())
}

#[test]
fn cli_requires_category() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp).assert().failure();
    assert_eq!(fs::read_dir(temp.path())?.count(), 0);
    Ok(())
}

#[test]
fn cli_rerun_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let file = temp.path().join("src/components/Button/Button.tsx");

    componentgen(&temp).args(["Button", "--ts"]).assert().success();
    let first = fs::read(&file)?;
    componentgen(&temp).args(["Button", "--ts"]).assert().success();
    let second = fs::read(&file)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn cli_dry_run_prints_body() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .args(["Input", "--ts", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "import React, { ChangeEvent } from 'react';",
        ));

    assert!(!temp.path().join("src").exists());
    Ok(())
}

#[test]
fn cli_dir_flag_and_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .args(["Button", "--dir", "web/ui"])
        .assert()
        .success();
    assert!(temp.path().join("web/ui/Button/Button.jsx").is_file());

    componentgen(&temp)
        .env("COMPONENTGEN_DIR", "from-env")
        .arg("Input")
        .assert()
        .success();
    assert!(temp.path().join("from-env/Input/Input.jsx").is_file());
    Ok(())
}

#[test]
fn cli_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = TempDir::new()?;
    let project = TempDir::new()?;
    componentgen(&cwd)
        .args(["Button", "--project"])
        .arg(project.path())
        .assert()
        .success();

    assert!(project
        .path()
        .join("src/components/Button/Button.jsx")
        .is_file());
    assert_eq!(fs::read_dir(cwd.path())?.count(), 0);
    Ok(())
}

#[test]
fn cli_quiet_suppresses_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .args(["Button", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn cli_invalid_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join(".componentgen.yml"), "components: [")?;
    componentgen(&temp)
        .arg("Button")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_list() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Button"))
        .stdout(predicate::str::contains("Input"))
        .stdout(predicate::str::contains("onChange: handler (required)"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let output = componentgen(&temp).args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Button", "Input"]);
    Ok(())
}

#[test]
fn cli_completions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    componentgen(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("componentgen"));
    Ok(())
}
