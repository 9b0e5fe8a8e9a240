// CLASSIFICATION: COMMUNITY
// Filename: cli.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

#![cfg(unix)]

use nacl_shim::delegate::delegate_path;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const SHIM: &str = env!("CARGO_BIN_EXE_download-nacl-toolchains");

/// Fake downloader that echoes each argument on its own line.
fn checkout_with_echo_delegate() -> TempDir {
    let dir = tempdir().unwrap();
    let script = delegate_path(dir.path());
    fs::create_dir_all(script.parent().unwrap()).unwrap();
    fs::write(&script, "for a in \"$@\"; do echo \"ARG:$a\"; done\nexit 0\n").unwrap();
    dir
}

fn shim(src_dir: &Path, defines: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = Command::new(SHIM);
    cmd.args(args)
        .env("NACL_SHIM_SRC_DIR", src_dir)
        .env("PYTHON", "/bin/sh")
        .env_remove("RUST_LOG");
    match defines {
        Some(defines) => cmd.env("GYP_DEFINES", defines),
        None => cmd.env_remove("GYP_DEFINES"),
    };
    cmd.output().unwrap()
}

fn forwarded(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.strip_prefix("ARG:"))
        .map(str::to_string)
        .collect()
}

#[test]
fn forwards_every_argument_unchanged() {
    let dir = checkout_with_echo_delegate();
    let cases: &[&[&str]] = &[
        &["--keep"],
        &["--help"],
        &["-h"],
        &["--python", "foo", "--keep"],
        &["--src-dir", "/x"],
        &["--version", "-V", "plain"],
    ];
    for args in cases {
        let output = shim(dir.path(), None, args);
        assert_eq!(output.status.code(), Some(0), "args {:?}", args);
        assert_eq!(forwarded(&output), args.to_vec(), "args {:?}", args);
    }
}

#[test]
fn no_arguments_runs_delegate_with_none() {
    let dir = checkout_with_echo_delegate();
    let output = shim(dir.path(), Some("component=shared_library"), &[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(forwarded(&output).is_empty());
}

#[test]
fn disabled_exits_zero_without_delegate() {
    let dir = checkout_with_echo_delegate();
    let output = shim(dir.path(), Some("disable_nacl=1"), &["--keep"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(forwarded(&output).is_empty());
}

#[test]
fn missing_delegate_exits_zero() {
    let dir = tempdir().unwrap();
    let output = shim(dir.path(), None, &["--keep"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skipping NativeClient toolchain download."));
}

#[test]
fn chromeos_prints_notice_and_substitutes() {
    let dir = checkout_with_echo_delegate();
    let output = shim(dir.path(), Some("chromeos=1"), &["--keep"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("NOTE: Special handling for chromeos"));
    assert!(stdout.contains("['--nacl-newlib-only', '--file-hash', "));
    assert_eq!(forwarded(&output), nacl_shim::chromeos_args());
}

#[test]
fn delegate_failure_code_is_the_exit_code() {
    let dir = tempdir().unwrap();
    let script = delegate_path(dir.path());
    fs::create_dir_all(script.parent().unwrap()).unwrap();
    fs::write(&script, "exit 4\n").unwrap();
    let output = shim(dir.path(), None, &[]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn spawn_failure_reports_os_error_once() {
    let dir = checkout_with_echo_delegate();
    let output = Command::new(SHIM)
        .env("NACL_SHIM_SRC_DIR", dir.path())
        .env("PYTHON", dir.path().join("no-such-python"))
        .env_remove("GYP_DEFINES")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to launch"), "{stderr}");
    assert_eq!(stderr.matches("os error").count(), 1, "{stderr}");
}
