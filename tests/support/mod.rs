use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::env;

/// Get a Command for dsalgo, isolated from the caller's logging and config environment.
///
/// The config directory points at a path that is never created, so the
/// default config lookup falls back to built-in defaults.
pub fn dsalgo() -> Command {
    let home = env::temp_dir().join("dsalgo-tests-empty-home");
    let mut cmd = cargo_bin_cmd!("dsalgo");
    cmd.env_remove("DSALGO_CONFIG")
        .env_remove("DSALGO_LOG")
        .env_remove("RUST_LOG")
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Parse a command's stdout as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
