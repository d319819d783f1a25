//! Error scenario integration tests

use std::process::Command;

fn hyprvoice_bin(config_home: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hyprvoice"));
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("NO_COLOR", "1")
        .env_remove("HYPRVOICE_NOTIFICATIONS");
    cmd
}

#[test]
fn config_get_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let output = hyprvoice_bin(dir.path())
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let output = hyprvoice_bin(dir.path())
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown key") && stderr.contains("notifications.type"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_notification_type() {
    let dir = tempfile::tempdir().unwrap();
    let output = hyprvoice_bin(dir.path())
        .args(["config", "set", "notifications.type", "popup"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("desktop, log, none"),
        "Expected error listing valid backends, got: {}",
        stderr
    );
}

#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();
    let first = hyprvoice_bin(dir.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(first.status.success());

    let second = hyprvoice_bin(dir.path())
        .args(["config", "init"])
        .output()
        .expect("Failed to execute command");
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(
        stderr.contains("already exists"),
        "Expected already exists error, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = hyprvoice_bin(dir.path())
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("notifications.type") && stdout.contains("not set"),
        "Expected config list output, got: {}",
        stdout
    );
}

#[test]
fn broken_config_file_still_notifies() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join("hyprvoice");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[notifications\ntype =").unwrap();

    let output = hyprvoice_bin(dir.path())
        .args(["--notifications", "log", "notify", "T", "M"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"), "got: {}", stderr);
    assert!(stderr.contains("T: M"), "got: {}", stderr);
}
