//! Integration tests for the `ts2go` binary.
//!
//! Each test runs the compiled binary in its own temp directory with `HOME`
//! pointed at that directory, so no user-global config leaks in.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const SOURCE: &str = "/** My type */\ntype Foo = { bar?: string }\n";

fn ts2go_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_ts2go"))
}

fn command(work_dir: &Path) -> Command {
    let mut command = Command::new(ts2go_bin());
    command
        .current_dir(work_dir)
        .env("HOME", work_dir)
        .env_remove("TS2GO_PACKAGE")
        .env("NO_COLOR", "1");
    command
}

fn run(work_dir: &Path, args: &[&str]) -> Output {
    command(work_dir)
        .args(args)
        .output()
        .expect("Failed to execute ts2go")
}

fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("types.ts"), SOURCE).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_generate_to_stdout() {
    let dir = workspace();
    let output = run(dir.path(), &["generate", "types.ts"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "// Code generated by ts2go. DO NOT EDIT.\npackage types\n\n\
         // My type\ntype Foo struct {\n\tBar *string `json:\"bar,omitempty\"`\n}\n"
    );
}

#[test]
fn test_generate_from_stdin() {
    let dir = workspace();
    let mut child = command(dir.path())
        .args(["generate", "-", "--skip-optional-pointer"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(SOURCE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("\tBar string `json:\"bar,omitempty\"`\n"));
}

#[test]
fn test_generate_to_file() {
    let dir = workspace();
    let output = run(
        dir.path(),
        &["generate", "types.ts", "-o", "types.go", "--package", "api"],
    );

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Wrote types.go"));

    let go = fs::read_to_string(dir.path().join("types.go")).unwrap();
    assert!(go.contains("package api\n"));
}

#[test]
fn test_parse_error_fails_without_writing() {
    let dir = workspace();
    fs::write(dir.path().join("broken.ts"), "interface Broken {\n  a: string;\n").unwrap();

    let output = run(dir.path(), &["generate", "broken.ts", "-o", "out.go"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to parse source"));
    assert!(!dir.path().join("out.go").exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = workspace();
    let output = run(dir.path(), &["generate", "nope.ts"]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read nope.ts"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = workspace();
    fs::write(
        dir.path().join(".ts2go.toml"),
        "package-name = \"models\"\nskip-optional-pointer = true\n",
    )
    .unwrap();

    let output = run(dir.path(), &["generate", "types.ts"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let go = stdout(&output);
    assert!(go.contains("package models\n"));
    assert!(go.contains("\tBar string"));

    let output = run(dir.path(), &["generate", "types.ts", "--package", "api"]);
    assert!(stdout(&output).contains("package api\n"));
}

#[test]
fn test_global_config_is_used_without_local() {
    let dir = workspace();
    fs::create_dir_all(dir.path().join(".config")).unwrap();
    fs::write(
        dir.path().join(".config/ts2go.toml"),
        "skip-header = true\n",
    )
    .unwrap();

    let output = run(dir.path(), &["generate", "types.ts"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!stdout(&output).contains("package"));
}

#[test]
fn test_exported_templates_can_be_overridden() {
    let dir = workspace();
    let output = run(dir.path(), &["templates", "export", "tpl"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(dir.path().join("tpl/struct.tera").is_file());

    fs::write(
        dir.path().join("tpl/header.tera"),
        "// custom\npackage {{ package_name | pascal_case }}\n",
    )
    .unwrap();

    let output = run(dir.path(), &["generate", "types.ts", "--templates", "tpl"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("// custom\npackage Types\n\n// My type\n"));

    let output = run(dir.path(), &["templates", "export", "tpl"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));
}

#[test]
fn test_templates_list() {
    let dir = workspace();
    let output = run(dir.path(), &["templates", "list"]);

    assert!(output.status.success());
    let listing = stdout(&output);
    assert!(listing.contains("output.tera (entry)"));
    assert!(listing.contains("field.tera"));
}

#[test]
fn test_diagnostics_are_reported_on_stderr() {
    let dir = workspace();
    fs::write(
        dir.path().join("bag.ts"),
        "interface Bag { [key: string]: number; size: number }\n",
    )
    .unwrap();

    let output = run(dir.path(), &["generate", "bag.ts"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("\tSize number `json:\"size\"`"));
    assert!(stderr(&output).contains("Bag: `[key]` skipped"));
}
