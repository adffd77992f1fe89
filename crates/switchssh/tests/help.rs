//! Tests for the switchssh help functionality

mod common;
use common::switchssh;

#[test]
fn test_no_args_shows_help() {
    let home = tempfile::tempdir().unwrap();
    let output = switchssh(home.path())
        .output()
        .expect("Failed to execute switchssh command");

    assert!(output.status.success(), "Command should exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);

    for expected in ["Usage:", "Commands:", "Options:", "setup", "switch", "list"] {
        assert!(
            stdout.contains(expected),
            "Output should contain '{}': {}",
            expected,
            stdout
        );
    }
}

#[test]
fn test_unknown_command_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = switchssh(home.path())
        .arg("rotate")
        .output()
        .expect("Failed to execute switchssh command");

    assert!(!output.status.success());
}
