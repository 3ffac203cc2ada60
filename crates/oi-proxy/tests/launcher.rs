#![cfg(unix)]

use assert_cmd::Command;
use oi_proxy_platform::PlatformIdentity;
use oi_proxy_resolve::ArtifactTable;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

/// Package name for this host, or `None` when the host has no published
/// binary and the end-to-end tests cannot run.
fn host_package() -> Option<String> {
    ArtifactTable::builtin()
        .identifier_for(&PlatformIdentity::current())
        .ok()
        .map(str::to_string)
}

/// Lays out `node_modules/<package>` with a shell script as its binary.
fn install(package: &str, script: &str) -> (TempDir, PathBuf) {
    let root = tempdir().unwrap();
    let pkg = root.path().join("node_modules").join(package);
    let bin = pkg.join("bin");
    fs::create_dir_all(&bin).unwrap();
    fs::write(
        pkg.join("package.json"),
        serde_json::json!({ "name": package, "binary": "bin/proxy" }).to_string(),
    )
    .unwrap();

    let binary = bin.join("proxy");
    fs::write(&binary, format!("#!/bin/sh\n{script}\n")).unwrap();
    fs::set_permissions(&binary, fs::Permissions::from_mode(0o755)).unwrap();
    (root, binary)
}

fn launcher(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("oi-proxy").unwrap();
    cmd.env("OI_PROXY_MODULES_ROOT", root)
        .env_remove("OI_PROXY_LOG")
        .env_remove("NODE_PATH");
    cmd
}

fn install_hook(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("oi-proxy-install").unwrap();
    cmd.env("OI_PROXY_MODULES_ROOT", root)
        .env_remove("OI_PROXY_LOG")
        .env_remove("NODE_PATH");
    cmd
}

#[test]
fn test_launcher_forwards_arguments_and_success() {
    let Some(package) = host_package() else { return };
    let (root, _) = install(&package, r#"printf '%s|' "$@""#);

    launcher(root.path())
        .args(["--target", "http://localhost:3000", "with space"])
        .assert()
        .success()
        .stdout("--target|http://localhost:3000|with space|")
        .stderr("");
}

#[test]
fn test_launcher_forwards_stdin() {
    let Some(package) = host_package() else { return };
    let (root, _) = install(&package, "cat");

    launcher(root.path())
        .write_stdin("ping\n")
        .assert()
        .success()
        .stdout("ping\n");
}

#[test]
fn test_launcher_forwards_exit_code() {
    let Some(package) = host_package() else { return };
    let (root, _) = install(&package, "echo failing >&2; exit 3");

    launcher(root.path())
        .assert()
        .code(3)
        .stderr("failing\n");
}

#[test]
fn test_launcher_reports_missing_package() {
    let Some(package) = host_package() else { return };
    let root = tempdir().unwrap();

    launcher(root.path())
        .arg("--port")
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::starts_with("[oi-proxy] Failed to load optional dependency")
                .and(predicate::str::contains(package.as_str()))
                .and(predicate::str::contains("Cannot find module")),
        );
}

#[test]
fn test_launcher_reports_missing_binary() {
    let Some(package) = host_package() else { return };
    let (root, binary) = install(&package, "exit 0");
    fs::remove_file(&binary).unwrap();

    launcher(root.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Binary not found at").and(predicate::str::contains(
            binary.to_string_lossy().into_owned(),
        )));
}

#[test]
fn test_install_hook_reports_binary() {
    let Some(package) = host_package() else { return };
    let (root, binary) = install(&package, "exit 0");

    install_hook(root.path())
        .assert()
        .success()
        .stdout(format!("[oi-proxy] Using binary: {}\n", binary.display()));
}

#[test]
fn test_install_hook_fails_without_package() {
    if host_package().is_none() {
        return;
    }
    let root = tempdir().unwrap();

    install_hook(root.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("[oi-proxy] "));
}

#[test]
fn test_install_hook_does_not_run_binary() {
    let Some(package) = host_package() else { return };
    let scratch = tempdir().unwrap();
    let marker = scratch.path().join("ran");
    let (root, _) = install(&package, &format!("touch '{}'", marker.display()));

    install_hook(root.path()).assert().success();
    assert!(!marker.exists());
}

#[test]
fn test_launcher_dies_by_child_signal() {
    use assert_cmd::cargo::CommandCargoExt;
    use nix::sys::signal::{self, SigHandler, Signal};
    use std::os::unix::process::{CommandExt, ExitStatusExt};

    let Some(package) = host_package() else { return };
    let (root, _) = install(&package, "kill -INT $$");

    let mut cmd = std::process::Command::cargo_bin("oi-proxy").unwrap();
    cmd.env("OI_PROXY_MODULES_ROOT", root.path())
        .env_remove("OI_PROXY_LOG")
        .env_remove("NODE_PATH");
    // The test runner may have been started with SIGINT ignored, and that
    // disposition would be inherited all the way down to the script.
    unsafe {
        cmd.pre_exec(|| {
            signal::signal(Signal::SIGINT, SigHandler::SigDfl)?;
            Ok(())
        });
    }

    let status = cmd.status().unwrap();
    assert_eq!(status.code(), None);
    assert_eq!(status.signal(), Some(Signal::SIGINT as i32));
}

#[test]
fn test_launcher_finds_package_through_node_path() {
    let Some(package) = host_package() else { return };
    let (global, _) = install(&package, "echo from-global");
    let empty_root = tempdir().unwrap();

    Command::cargo_bin("oi-proxy")
        .unwrap()
        .env("OI_PROXY_MODULES_ROOT", empty_root.path())
        .env("NODE_PATH", global.path().join("node_modules"))
        .env_remove("OI_PROXY_LOG")
        .assert()
        .success()
        .stdout("from-global\n");
}

#[test]
fn test_group_interrupt_is_decided_by_child() {
    use assert_cmd::cargo::CommandCargoExt;
    use nix::sys::signal::{self, SigHandler, Signal};
    use nix::unistd::Pid;
    use std::os::unix::process::CommandExt;
    use std::thread;
    use std::time::{Duration, Instant};

    let Some(package) = host_package() else { return };
    let scratch = tempdir().unwrap();
    let ready = scratch.path().join("ready");
    let script = format!(
        "trap 'exit 5' INT\n: > '{}'\nwhile :; do sleep 1; done",
        ready.display()
    );
    let (root, _) = install(&package, &script);

    let mut cmd = std::process::Command::cargo_bin("oi-proxy").unwrap();
    cmd.env("OI_PROXY_MODULES_ROOT", root.path())
        .env_remove("OI_PROXY_LOG")
        .env_remove("NODE_PATH")
        .process_group(0);
    // A shell cannot trap a signal that was already ignored when it started.
    unsafe {
        cmd.pre_exec(|| {
            signal::signal(Signal::SIGINT, SigHandler::SigDfl)?;
            Ok(())
        });
    }
    let mut launcher = cmd.spawn().unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    while !ready.exists() {
        assert!(Instant::now() < deadline, "script never started");
        thread::sleep(Duration::from_millis(20));
    }
    // Give the launcher time to start ignoring interactive signals.
    thread::sleep(Duration::from_millis(200));

    signal::killpg(Pid::from_raw(launcher.id() as i32), Signal::SIGINT).unwrap();

    let status = loop {
        if let Some(status) = launcher.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            let _ = launcher.kill();
            panic!("launcher did not exit after the interrupt");
        }
        thread::sleep(Duration::from_millis(20));
    };
    assert_eq!(status.code(), Some(5));
}
