//! End-to-end checks of the `kubeshark-misc` binary.
//!
//! Tests that steer the home directory through `HOME` are Unix-only.

use std::{
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

/// Run the binary from `cwd` with a scrubbed environment. `home` of `None`
/// leaves `HOME` unset.
fn run(cwd: &Path, home: Option<&Path>, extra_env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kubeshark-misc"));
    cmd.args(args)
        .current_dir(cwd)
        .env_remove("HOME")
        .env_remove("RUST_LOG")
        .env_remove("KUBESHARK_LOG_LEVEL");
    if let Some(home) = home {
        cmd.env("HOME", home);
    }
    for (key, value) in extra_env {
        cmd.env(key, value);
    }
    cmd.output().expect("binary should spawn")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn version_prints_bare_version() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), Some(tmp.path()), &[], &["version"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "0.0\n");
}

#[test]
fn version_debug_prints_key_value_lines() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), Some(tmp.path()), &[], &["version", "--debug"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));

    let text = stdout(&out);
    let keys: Vec<&str> = text
        .lines()
        .map(|line| line.split_once(": ").map_or(line, |(key, _)| key))
        .collect();
    assert_eq!(keys, ["version", "branch", "commit", "built", "rbac", "platform"]);
    assert!(text.contains("version: 0.0\n"));
    assert!(text.contains("rbac: v1\n"));
}

#[cfg(unix)]
#[test]
fn dot_folder_under_home() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), Some(tmp.path()), &[], &["dot-folder"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), format!("{}\n", tmp.path().join(".kubeshark").display()));
}

#[cfg(unix)]
#[test]
fn dot_folder_without_home_prints_empty_line() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), None, &[], &["dot-folder"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout(&out), "\n");
}

#[cfg(unix)]
#[test]
fn dot_folder_with_empty_home_prints_empty_line() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), None, &[("HOME", "")], &["dot-folder"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "\n");
}

#[cfg(unix)]
#[test]
fn config_path_under_dot_folder() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), Some(tmp.path()), &[], &["config-path"]);
    assert!(out.status.success());
    let expected = tmp.path().join(".kubeshark").join("config.toml");
    assert_eq!(stdout(&out), format!("{}\n", expected.display()));
}

#[test]
fn unknown_command_exits_2_with_usage() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), Some(tmp.path()), &[], &["tap"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stdout(&out).is_empty());
    let err = stderr(&out);
    assert!(err.contains("unknown command: tap"));
    assert!(err.contains("Usage: kubeshark-misc"));
}

#[test]
fn help_prints_usage_to_stdout() {
    let tmp = TempDir::new().unwrap();
    let out = run(tmp.path(), Some(tmp.path()), &[], &["--help"]);
    assert!(out.status.success());
    assert!(stdout(&out).starts_with("Usage: kubeshark-misc"));
}

#[test]
fn invalid_env_log_level_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run(
        tmp.path(),
        Some(tmp.path()),
        &[("KUBESHARK_LOG_LEVEL", "verbose")],
        &["version"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("invalid log_level 'verbose'"));
}

#[cfg(unix)]
#[test]
fn invalid_file_log_level_fails() {
    let tmp = TempDir::new().unwrap();
    let dot = tmp.path().join(".kubeshark");
    std::fs::create_dir_all(&dot).unwrap();
    std::fs::write(dot.join("config.toml"), "[cli]\nlog_level = \"verbose\"\n").unwrap();

    let out = run(tmp.path(), Some(tmp.path()), &[], &["version"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("config error"));
}

#[cfg(unix)]
#[test]
fn debug_level_from_config_file_logs_to_stderr() {
    let tmp = TempDir::new().unwrap();
    let dot = tmp.path().join(".kubeshark");
    std::fs::create_dir_all(&dot).unwrap();
    std::fs::write(dot.join("config.toml"), "[cli]\nlog_level = \"debug\"\n").unwrap();

    let out = run(tmp.path(), Some(tmp.path()), &[], &["version"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "0.0\n");
    assert!(stderr(&out).contains("config loaded"));
}
