//! End-to-end tests for the `milsym` binary
//!
//! A small `sh` script stands in for the symbol library, so these run on Unix only.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Renders every query except hostile ones, which fail like an unmatched name
const RENDER_SCRIPT: &str = r#"case "$0" in enemy*) echo "no symbol for $0" >&2; exit 1;; esac; printf '<svg xmlns="http://www.w3.org/2000/svg" data-style="%s"><text>%s</text></svg>' "$1" "$0""#;

fn write_config(dir: &Path, strict: bool) -> PathBuf {
    let path = dir.join("milsym.toml");
    let out = dir.join("symbols");
    let contents = format!(
        r#"
[generator]
output_dir = {out:?}

[renderer]
program = "sh"
args = ["-c", {script:?}, "{{query}}", "{{style}}"]

[settings]
color = false
strict = {strict}
"#,
        out = out.display().to_string(),
        script = RENDER_SCRIPT,
        strict = strict,
    );
    fs::write(&path, contents).unwrap();
    path
}

fn milsym(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_milsym"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_generate_single_unit() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), false);

    let output = milsym(&config, &["generate", "--unit", "fs_mortar", "--affiliation", "friendly"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert!(stdout.contains("  OK   fs_mortar_friendly_conf.svg\n"));
    assert!(stdout.contains("  OK   fs_mortar_friendly_sus.svg\n"));
    assert!(stdout.contains("Done: 2 generated, 0 errors\n"));

    let sus = fs::read_to_string(tmp.path().join("symbols/fs_mortar_friendly_sus.svg")).unwrap();
    assert!(sus.starts_with("<!-- python-military-symbols generated symbol\n"));
    assert!(sus.contains("     query: friendly mortar\n"));
    assert!(sus.contains("<svg opacity=\"0.55\" xmlns="));
    assert!(sus.contains("data-style=\"medium\""));
}

#[test]
fn test_failures_are_lenient_by_default() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), false);

    let output = milsym(&config, &["generate", "-u", "inf_rifle", "--style", "dark"]);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("  NG   inf_rifle_hostile_conf.svg : "));
    assert!(stdout.contains("Done: 4 generated, 2 errors\n"));
    assert!(!tmp.path().join("symbols/inf_rifle_hostile_conf.svg").exists());

    let unknown = fs::read_to_string(tmp.path().join("symbols/inf_rifle_unknown_conf.svg")).unwrap();
    assert!(unknown.contains("<text>unknown infantry</text>"));
    assert!(unknown.contains("data-style=\"dark\""));
}

#[test]
fn test_strict_exit_code() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), true);

    let output = milsym(&config, &["generate", "-u", "cmd_hq"]);
    assert_eq!(output.status.code(), Some(2));

    let output = milsym(&config, &["generate", "-u", "cmd_hq", "-a", "friendly"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_json_report() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), false);

    let output = milsym(&config, &["--format", "json", "generate", "-u", "armor_tank"]);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["generated"], 4);
    assert_eq!(report["errors"], 2);
    assert_eq!(report["assets"][2]["file"], "armor_tank_hostile_conf.svg");
    assert_eq!(report["assets"][2]["kind"], "render");
}

#[test]
fn test_unknown_unit_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), false);

    let output = milsym(&config, &["generate", "--unit", "dragoon"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("dragoon"));
    assert!(!tmp.path().join("symbols").exists());
}

#[test]
fn test_missing_config_file() {
    let tmp = TempDir::new().unwrap();
    let output = milsym(&tmp.path().join("absent.toml"), &["catalog"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_list_and_catalog_do_not_render() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), false);

    let output = milsym(&config, &["list", "-u", "recon_uav"]);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(output.status.success());
    assert!(stdout.contains("recon_uav_unknown_sus.svg"));
    assert!(stdout.contains("unknown unmanned aircraft"));

    let output = milsym(&config, &["--format", "json", "catalog"]);
    let units: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(units.as_array().unwrap().len(), 14);

    assert!(!tmp.path().join("symbols").exists());
}
