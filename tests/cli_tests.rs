//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn clipsync_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipsync"));
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("CLIPSYNC_BIND_ADDRESS")
        .env_remove("CLIPSYNC_CLIPBOARD_BACKEND");
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("REMOTE_IP"))
        .stdout(predicate::str::contains("REMOTE_PORT"))
        .stdout(predicate::str::contains("LOCAL_PORT"))
        .stdout(predicate::str::contains("--poll-interval"))
        .stdout(predicate::str::contains("--retry-attempts"))
        .stdout(predicate::str::contains("--backend"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipsync"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_usage_and_exits_cleanly() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "allows you to sync the clipboard between two computers",
        ))
        .stdout(predicate::str::contains(
            "<remote IP> <remote port> <local port>",
        ));
}

#[test]
fn too_few_arguments_prints_usage() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["127.0.0.1", "9000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn too_many_arguments_prints_usage() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["127.0.0.1", "9000", "9001", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn many_extra_arguments_print_usage() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["127.0.0.1", "9000", "9001", "a", "b", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn misspelled_flag_is_reported() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .arg("--bogus")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Usage:").not())
        .stderr(predicate::str::contains("--bogus"));

    clipsync_bin(&home)
        .args(["127.0.0.1", "9000", "9001", "--pol-interval", "1s"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--pol-interval"));
}

#[test]
fn invalid_remote_port_is_usage_error() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["127.0.0.1", "http", "9001"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid peer address"));
}

#[test]
fn invalid_poll_interval_is_usage_error() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["127.0.0.1", "9000", "9001", "--poll-interval", "often"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("poll_interval"));
}

#[test]
fn non_numeric_retry_attempts_is_clap_error() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["127.0.0.1", "9000", "9001", "--retry-attempts", "lots"])
        .assert()
        .code(2);
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clipsync"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["config", "set", "retry_delay", "5s"])
        .assert()
        .success();

    clipsync_bin(&home)
        .args(["config", "get", "retry_delay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5s"));

    assert!(home.path().join("clipsync").join("config.toml").exists());
}

#[test]
fn config_get_unset_key() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["config", "get", "poll_interval"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}

#[test]
fn config_list_shows_every_key() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["config", "init"])
        .assert()
        .success();

    clipsync_bin(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("poll_interval"))
        .stdout(predicate::str::contains("retry_attempts"))
        .stdout(predicate::str::contains("100"))
        .stdout(predicate::str::contains("clipboard_backend"));
}

#[test]
fn config_init_twice_fails() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home).args(["config", "init"]).assert().success();
    clipsync_bin(&home)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["config", "set", "api_key", "secret"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn config_set_invalid_value() {
    let home = TempDir::new().unwrap();
    clipsync_bin(&home)
        .args(["config", "set", "clipboard_backend", "xclip"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("arboard"));
}
