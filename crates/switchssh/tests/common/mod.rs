use std::{
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

/// Create a new switchssh command with its home directory pointed at `home`
pub fn switchssh(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_switchssh"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Run `cmd` with `input` piped to its stdin
#[allow(dead_code)]
pub fn run_with_input(cmd: &mut Command, input: &str) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute switchssh command");

    // The command may exit without reading its input, e.g. on an empty key store
    let written = child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes());
    if let Err(e) = written {
        assert_eq!(
            e.kind(),
            std::io::ErrorKind::BrokenPipe,
            "Failed to write stdin: {e}"
        );
    }

    child
        .wait_with_output()
        .expect("Failed to wait for switchssh command")
}
