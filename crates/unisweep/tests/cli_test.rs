//! Integration tests for the `unisweep` binary.
//!
//! Argument parsing and help output run without a controller; the sweep
//! scenarios run the real binary against a wiremock controller.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `unisweep` binary with env isolation.
///
/// Points config directories at a nonexistent path so tests never read the
/// user's real settings file, and turns off ANSI color in logs.
fn unisweep_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("unisweep");
    cmd.env("HOME", "/tmp/unisweep-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/unisweep-test-nonexistent")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn ok_envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "meta": { "rc": "ok" }, "data": data })
}

/// Run the binary against `server` off the async runtime.
async fn sweep_against(server: &MockServer, extra: &[&str]) -> std::process::Output {
    let port = server.address().port().to_string();
    let mut args: Vec<String> = vec![
        "http://127.0.0.1".into(),
        "admin".into(),
        "secret".into(),
        "--port".into(),
        port,
    ];
    args.extend(extra.iter().map(|s| (*s).to_string()));

    tokio::task::spawn_blocking(move || unisweep_cmd().args(&args).output().unwrap())
        .await
        .unwrap()
}

/// Mount the classic-controller login flow for `site`.
async fn mount_login(server: &MockServer, site: &str) {
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/api/s/{site}/self")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ok_envelope(json!([{ "name": "admin" }]))),
        )
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_is_usage_error() {
    let output = unisweep_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    unisweep_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("UniFi")
            .and(predicate::str::contains("--port"))
            .and(predicate::str::contains("--site"))
            .and(predicate::str::contains("--debug")),
    );
}

#[test]
fn test_version_flag() {
    unisweep_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unisweep"));
}

#[test]
fn test_no_dry_run_flag() {
    let output = unisweep_cmd()
        .args(["unifi.local", "admin", "pw", "--dry-run"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_port() {
    let output = unisweep_cmd()
        .args(["unifi.local", "admin", "pw", "--port", "99999"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_settings_file() {
    let output = unisweep_cmd()
        .args(["unifi.local", "admin", "pw", "--config", "/nonexistent/unisweep.toml"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("Settings file not found"), "got:\n{text}");
}

// ── Sweep scenarios ─────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_sweep_forgets_extraneous_clients() {
    let server = MockServer::start().await;
    mount_login(&server, "default").await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/alluser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([
            { "mac": "AA" },
            { "mac": "BB", "hostname": "h" },
            { "mac": "CC", "tx_bytes": 0, "rx_bytes": 0 }
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/s/default/cmd/stamgr"))
        .and(body_json(json!({ "cmd": "forget-sta", "macs": ["AA", "CC"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let output = sweep_against(&server, &[]).await;
    let text = combined_output(&output);

    assert!(output.status.success(), "sweep failed:\n{text}");
    assert!(text.contains("Found 3 MACs"), "got:\n{text}");
    assert!(text.contains("Found 2 extraneous MACs"), "got:\n{text}");
    assert!(!text.contains("secret"), "password leaked into logs:\n{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_empty_client_list_still_sends_forget() {
    let server = MockServer::start().await;
    mount_login(&server, "default").await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/alluser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/s/default/cmd/stamgr"))
        .and(body_json(json!({ "cmd": "forget-sta", "macs": [] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let output = sweep_against(&server, &[]).await;

    assert!(output.status.success(), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_site_from_settings_file() {
    let server = MockServer::start().await;
    mount_login(&server, "lab").await;

    Mock::given(method("GET"))
        .and(path("/api/s/lab/stat/alluser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/s/lab/cmd/stamgr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("config.toml");
    std::fs::write(&settings, "site = \"lab\"\n").unwrap();

    let output = sweep_against(&server, &["--config", settings.to_str().unwrap()]).await;

    assert!(output.status.success(), "{}", combined_output(&output));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_login_makes_no_changes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.Invalid" },
            "data": []
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/alluser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/s/default/cmd/stamgr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let output = sweep_against(&server, &[]).await;
    let text = combined_output(&output);

    assert!(output.status.success(), "login failure must not fail the run:\n{text}");
    assert!(text.contains("couldn't log in"), "got:\n{text}");
    assert!(text.contains("Couldn't connect to UniFi controller"), "got:\n{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_site_makes_no_changes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/self"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.NoSiteContext" },
            "data": []
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/s/default/cmd/stamgr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([]))))
        .expect(0)
        .mount(&server)
        .await;

    let output = sweep_against(&server, &[]).await;
    let text = combined_output(&output);

    assert!(output.status.success(), "{text}");
    assert!(text.contains("not registered"), "got:\n{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_forget_failure_exits_nonzero() {
    let server = MockServer::start().await;
    mount_login(&server, "default").await;

    Mock::given(method("GET"))
        .and(path("/api/s/default/stat/alluser"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_envelope(json!([{ "mac": "AA" }]))))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/s/default/cmd/stamgr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "rc": "error", "msg": "api.err.InvalidObject" },
            "data": []
        })))
        .mount(&server)
        .await;

    let output = sweep_against(&server, &[]).await;
    let text = combined_output(&output);

    assert_eq!(output.status.code(), Some(1), "got:\n{text}");
    assert!(text.contains("InvalidObject"), "got:\n{text}");
}

#[test]
fn test_unreachable_controller_exits_cleanly() {
    // Port 1 is never a UniFi controller; the connection is refused.
    let output = unisweep_cmd()
        .args(["http://127.0.0.1", "admin", "pw", "--port", "1"])
        .output()
        .unwrap();
    let text = combined_output(&output);

    assert!(output.status.success(), "got:\n{text}");
    assert!(text.contains("Error connecting to the UniFi controller"), "got:\n{text}");
}
