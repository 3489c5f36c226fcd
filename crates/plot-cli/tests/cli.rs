// File: crates/plot-cli/tests/cli.rs
// Purpose: End-to-end run of the simple-plot binary: one JSON line on stdout, exit code 0.

use std::process::Command;

use base64::Engine as _;
use serde_json::{json, Value};

#[test]
fn prints_single_json_record() {
    let out = Command::new(env!("CARGO_BIN_EXE_simple-plot"))
        .env_remove("RUST_LOG")
        .output()
        .expect("run simple-plot");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    assert_eq!(stdout.lines().count(), 1, "exactly one line of output");

    let v: Value = serde_json::from_str(stdout.trim_end()).expect("valid JSON");
    assert_eq!(v.as_object().map(|o| o.len()), Some(2));
    assert_eq!(v["data"], json!({ "x": [1, 2, 3, 4, 5], "y": [2, 4, 5, 4, 5] }));

    let png = base64::engine::general_purpose::STANDARD
        .decode(v["plot"].as_str().expect("plot string"))
        .expect("base64");
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
}

#[test]
fn debug_logs_stay_off_stdout() {
    let out = Command::new(env!("CARGO_BIN_EXE_simple-plot"))
        .env("RUST_LOG", "debug")
        .output()
        .expect("run simple-plot");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).expect("utf8 stdout");
    assert_eq!(stdout.lines().count(), 1);
    assert!(serde_json::from_str::<Value>(stdout.trim_end()).is_ok());
}
