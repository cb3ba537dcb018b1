//! End-to-end tests for the `stencil` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const CARD_TEMPLATE: &str = r#"{
  "card": {
    "name": "custom-card",
    "class": "card-base",
    "props": { "title": "string", "variant": ["a", "b"] }
  }
}"#;

/// A command running inside `dir`, isolated from the caller's config.
fn stencil(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("stencil");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".xdg"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("STENCIL_TEMPLATE")
        .env_remove("STENCIL_OUTPUT_DIR");
    cmd
}

fn workspace_with(template: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("template.json"), template).unwrap();
    tmp
}

#[test]
fn help_exits_zero() {
    let tmp = TempDir::new().unwrap();
    stencil(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    stencil(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_generates_from_template_json() {
    let tmp = workspace_with(CARD_TEMPLATE);

    stencil(tmp.path()).assert().success();

    let dir = tmp.path().join("components/custom-card");
    for file in ["index.tsx", "model.ts", "style.scss", "CustomCard.stories.tsx"] {
        assert!(dir.join(file).is_file(), "{file} missing");
    }
    let model = fs::read_to_string(dir.join("model.ts")).unwrap();
    assert!(model.contains("variant: 'a' | 'b';"));
}

#[test]
fn rerun_produces_identical_files() {
    let tmp = workspace_with(CARD_TEMPLATE);
    let story = tmp.path().join("components/custom-card/CustomCard.stories.tsx");

    stencil(tmp.path()).assert().success();
    let first = fs::read(&story).unwrap();
    stencil(tmp.path()).arg("gen").assert().success();

    assert_eq!(first, fs::read(&story).unwrap());
}

#[test]
fn missing_template_exits_three() {
    let tmp = TempDir::new().unwrap();
    stencil(tmp.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("template.json"));
}

#[test]
fn invalid_name_exits_two_and_names_the_key() {
    let tmp = workspace_with(
        r#"{"hero": {"name": "9-lives", "class": "hero", "props": {}}}"#,
    );

    stencil(tmp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("hero"))
        .stderr(predicate::str::contains("9-lives"));

    assert!(!tmp.path().join("components").exists());
}

#[test]
fn malformed_json_exits_four() {
    let tmp = workspace_with("{ not json");
    stencil(tmp.path()).assert().code(4);
}

#[test]
fn missing_props_is_a_configuration_error() {
    let tmp = workspace_with(r#"{"card": {"name": "card", "class": "c"}}"#);
    stencil(tmp.path())
        .assert()
        .code(4)
        .stderr(predicate::str::contains("card"));
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = workspace_with(CARD_TEMPLATE);

    stencil(tmp.path())
        .args(["generate", "--dry-run", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("index.tsx"));

    assert!(!tmp.path().join("components").exists());
}

#[test]
fn json_output_is_a_generation_report() {
    let tmp = workspace_with(CARD_TEMPLATE);

    let assert = stencil(tmp.path())
        .args(["--output-format", "json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["components"][0]["key"], "card");
    assert_eq!(report["components"][0]["identifier"], "CustomCard");
    assert_eq!(report["components"][0]["files"].as_array().unwrap().len(), 4);
}

#[test]
fn flags_override_template_and_output() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("ui.json"), CARD_TEMPLATE).unwrap();

    stencil(tmp.path())
        .args(["generate", "-t", "ui.json", "-o", "src/ui"])
        .assert()
        .success();

    assert!(tmp.path().join("src/ui/custom-card/index.tsx").is_file());
}

#[test]
fn local_config_file_sets_output_dir() {
    let tmp = workspace_with(CARD_TEMPLATE);
    fs::write(tmp.path().join("stencil.toml"), "output_dir = \"widgets\"\n").unwrap();

    stencil(tmp.path()).assert().success();

    assert!(tmp.path().join("widgets/custom-card/style.scss").is_file());
}

#[test]
fn environment_overrides_config_file() {
    let tmp = workspace_with(CARD_TEMPLATE);
    fs::write(tmp.path().join("stencil.toml"), "output_dir = \"widgets\"\n").unwrap();

    stencil(tmp.path())
        .env("STENCIL_OUTPUT_DIR", "from-env")
        .assert()
        .success();

    assert!(tmp.path().join("from-env/custom-card/model.ts").is_file());
    assert!(!tmp.path().join("widgets").exists());
}

#[test]
fn missing_explicit_config_exits_four() {
    let tmp = workspace_with(CARD_TEMPLATE);
    stencil(tmp.path())
        .args(["--config", "absent.toml"])
        .assert()
        .code(4);
}

#[test]
fn init_creates_missing_explicit_config() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sub/new.toml");

    stencil(tmp.path())
        .args(["--config", "sub/new.toml", "init"])
        .assert()
        .success();

    assert!(path.is_file());
    assert!(fs::read_to_string(&path).unwrap().contains("output_dir = \"components\""));

    // The file it wrote is a valid config for the next run.
    fs::write(tmp.path().join("template.json"), CARD_TEMPLATE).unwrap();
    stencil(tmp.path())
        .args(["--config", "sub/new.toml"])
        .assert()
        .success();
    assert!(tmp.path().join("components/custom-card/index.tsx").is_file());
}

#[test]
fn init_writes_default_config_once() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("stencil.toml");

    stencil(tmp.path()).arg("init").assert().success();
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("template = \"template.json\""));
    assert!(written.contains("output_dir = \"components\""));

    fs::write(&path, "output_dir = \"mine\"\n").unwrap();
    stencil(tmp.path()).arg("init").assert().success();
    assert_eq!(fs::read_to_string(&path).unwrap(), "output_dir = \"mine\"\n");

    stencil(tmp.path()).args(["init", "--force"]).assert().success();
    assert!(fs::read_to_string(&path).unwrap().contains("template.json"));
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let tmp = workspace_with(CARD_TEMPLATE);
    stencil(tmp.path())
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    stencil(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stencil"));
}
