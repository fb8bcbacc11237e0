#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::process::{Command, Output};

/// Run `letu` against `api_url` with an isolated HOME and working
/// directory so no user or project config leaks in.
fn letu(api_url: &str, args: &[&str]) -> Output {
    let home = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_letu"))
        .current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("LETU_API_URL")
        .env_remove("RUST_LOG")
        .arg("--api-url")
        .arg(api_url)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn start_without_sheet_fails_without_request() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/start-tracking")
        .expect(0)
        .create();

    let output = letu(
        &format!("{}/api", server.url()),
        &["start", "--session", "29060044"],
    );
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("[letu] error: Please fill in all fields"),
        "stderr: {}",
        stderr(&output)
    );
    mock.assert();
}

#[test]
fn start_success_prints_message_and_indicator() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/start-tracking")
        .with_status(200)
        .with_body(r#"{"message": "Tracking started successfully"}"#)
        .create();

    let output = letu(
        &format!("{}/api", server.url()),
        &[
            "start",
            "--session",
            "29060044",
            "--sheet",
            "https://docs.google.com/spreadsheets/d/abc",
        ],
    );
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(
        out.contains("Tracking started! Data will be updated every 30 seconds."),
        "stdout: {out}"
    );
    assert!(out.contains("Tracking active"), "stdout: {out}");
    mock.assert();
}

#[test]
fn stop_failure_reports_server_message() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/api/stop-tracking")
        .with_status(404)
        .with_body(r#"{"error": "Session not being tracked"}"#)
        .create();

    let output = letu(
        &format!("{}/api", server.url()),
        &["stop", "--session", "29060044"],
    );
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("Session not being tracked"),
        "stderr: {}",
        stderr(&output)
    );
    mock.assert();
}

#[test]
fn preview_lists_five_and_remainder() {
    let mut server = mockito::Server::new();
    let products: Vec<String> = (0..7)
        .map(|i| format!(r#"{{"title": "Product {i}", "productClicks": 5}}"#))
        .collect();
    let mock = server
        .mock("GET", "/api/preview/29060044")
        .with_status(200)
        .with_body(format!(
            r#"{{"count": 7, "products": [{}]}}"#,
            products.join(",")
        ))
        .create();

    let output = letu(&format!("{}/api", server.url()), &["preview", "29060044"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Preview Data (7 products found)"), "{out}");
    assert!(out.contains("Product 4"), "{out}");
    assert!(!out.contains("Product 5"), "{out}");
    assert!(out.contains("...and 2 more products"), "{out}");
    mock.assert();
}

#[test]
fn preview_json_emits_full_response() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/preview/1")
        .with_status(200)
        .with_body(r#"{"count": 1, "products": [{"title": "A", "ctr": 2.5}]}"#)
        .create();

    let output = letu(&format!("{}/api", server.url()), &["preview", "1", "--json"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["products"][0]["ctr"], 2.5);
    mock.assert();
}

#[test]
fn preview_without_session_id() {
    let output = letu("http://127.0.0.1:1/api", &["preview"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output).contains("Please enter a session ID"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn health_unreachable_backend_errors() {
    let output = letu("http://127.0.0.1:1/api", &["health"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("[letu] error: could not reach"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn invalid_api_url_is_rejected() {
    let output = letu("not a url", &["health"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("invalid API base URL"),
        "stderr: {}",
        stderr(&output)
    );
}

#[test]
fn help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_letu"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    for cmd in ["panel", "start", "stop", "preview", "status", "health"] {
        assert!(out.contains(cmd), "expected '{cmd}' in help: {out}");
    }
}
