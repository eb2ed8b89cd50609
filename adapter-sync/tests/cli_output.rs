//! Spawns the real `adapter-sync` binary against scratch projects.
//! Only failure paths and offline commands are exercised, so no network is needed.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_adapter_sync(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_adapter-sync"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run adapter-sync")
}

fn combined_output(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn project_with_manifest(manifest: &str) -> TempDir {
    let tmp_dir = TempDir::new().expect("tempdir");
    let runtime_dir = tmp_dir.path().join("packages/runtime");
    fs::create_dir_all(&runtime_dir).expect("create runtime dir");
    fs::write(runtime_dir.join("Cargo.toml"), manifest).expect("write manifest");
    tmp_dir
}

#[test]
fn missing_manifest_exits_with_error() {
    let tmp_dir = TempDir::new().expect("tempdir");
    let project = tmp_dir.path().to_str().expect("utf-8 path");

    let output = run_adapter_sync(&["--project", project]);
    let text = combined_output(&output);

    assert_eq!(output.status.code(), Some(1), "output:\n{text}");
    assert!(text.contains("[ERROR]"), "output:\n{text}");
    assert!(text.contains("Cargo.toml not found"), "output:\n{text}");
    assert!(!text.contains("[OK]"), "output:\n{text}");
}

#[test]
fn manifest_without_wasmtime_exits_with_error() {
    let tmp_dir = project_with_manifest("[dependencies]\nserde = \"1\"\n");
    let project = tmp_dir.path().to_str().expect("utf-8 path");

    let output = run_adapter_sync(&["sync", "--project", project]);
    let text = combined_output(&output);

    assert_eq!(output.status.code(), Some(1), "output:\n{text}");
    assert!(
        text.contains("[ERROR] Could not find Wasmtime version"),
        "output:\n{text}"
    );
    assert!(!tmp_dir.path().join("packages/runtime/res").exists());
}

#[test]
fn detect_prints_version_without_network() {
    let tmp_dir = project_with_manifest("[dependencies]\nwasmtime = \"25\"\n");
    let project = tmp_dir.path().to_str().expect("utf-8 path");

    let output = run_adapter_sync(&["detect", "--project", project]);
    let text = combined_output(&output);

    assert!(output.status.success(), "output:\n{text}");
    assert!(
        text.contains("Detected Wasmtime version: 25.0.0"),
        "output:\n{text}"
    );
    assert!(text.contains("/releases/tags/v25.0.0"), "output:\n{text}");
    assert!(
        text.contains("wasi_snapshot_preview1.command.wasm: missing"),
        "output:\n{text}"
    );
}

#[test]
fn stats_json_counts_files() {
    let tmp_dir = project_with_manifest("[dependencies]\nwasmtime = \"25\"\n");
    let project = tmp_dir.path().to_str().expect("utf-8 path");

    let output = run_adapter_sync(&["stats", "--json", "--project", project]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "output:\n{stdout}");
    assert!(stdout.contains("\"total_files\": 1"), "output:\n{stdout}");
    assert!(stdout.contains("\"total_lines\": 2"), "output:\n{stdout}");
}
