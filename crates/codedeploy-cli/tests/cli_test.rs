//! Integration tests for the `cdshape` CLI binary.
//!
//! Offline commands run against fixture payloads; `call` runs against a
//! wiremock server. Nothing touches the user's real configuration.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `cdshape` binary with env isolation.
///
/// Clears all `CODEDEPLOY_*` env vars and points config directories at
/// `home` so tests never touch the user's real configuration.
fn cdshape_cmd_in(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("cdshape");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .env_remove("CODEDEPLOY_PROFILE")
        .env_remove("CODEDEPLOY_ENDPOINT")
        .env_remove("CODEDEPLOY_REGION")
        .env_remove("CODEDEPLOY_AUTH_TOKEN")
        .env_remove("CODEDEPLOY_OUTPUT")
        .env_remove("CODEDEPLOY_INSECURE")
        .env_remove("CODEDEPLOY_TIMEOUT");
    cmd
}

fn cdshape_cmd() -> assert_cmd::Command {
    cdshape_cmd_in(std::path::Path::new("/tmp/cdshape-cli-test-nonexistent"))
}

/// Write `contents` to a temp file that lives as long as the returned handle.
fn payload(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Write `contents` to the config file `cdshape` resolves under `home`.
fn write_config(home: &std::path::Path, contents: &str) -> std::path::PathBuf {
    let output = cdshape_cmd_in(home).args(["config", "path"]).output().unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let path = std::path::PathBuf::from(String::from_utf8(output.stdout).unwrap().trim());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

const MALFORMED_CONFIG: &str = r#"
[defaults]
timeout = "thirty"

[profiles.prod]
region = "us-east-1"
auth_token = "keep-me-secret"
"#;

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = cdshape_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    cdshape_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("CodeDeploy")
            .and(predicate::str::contains("inspect"))
            .and(predicate::str::contains("validate"))
            .and(predicate::str::contains("call")),
    );
}

#[test]
fn test_version_flag() {
    cdshape_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cdshape"));
}

#[test]
fn test_completions_bash() {
    cdshape_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Operations ──────────────────────────────────────────────────────

#[test]
fn test_operations_lists_registry() {
    let output = cdshape_cmd().arg("operations").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 43);
    assert!(stdout.lines().any(|l| l == "CreateDeployment"));
}

#[test]
fn test_operations_paginated_json() {
    let output = cdshape_cmd()
        .args(["operations", "--paginated", "-o", "json-compact"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 9);
    assert!(rows.iter().all(|r| r["paginated"] == json!(true)));
}

// ── Inspect / validate ──────────────────────────────────────────────

#[test]
fn test_inspect_renders_and_canonicalizes() {
    let file = payload(
        r#"{"applicationName":"web","computePlatform":"Server","somethingNew":1}"#,
    );
    cdshape_cmd()
        .args(["inspect", "createapplication"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CreateApplication request")
                .and(predicate::str::contains(
                    "rendered:   {applicationName: web,computePlatform: Server}",
                ))
                .and(predicate::str::contains("somethingNew").not())
                .and(predicate::str::contains("violations: none")),
        );
}

#[test]
fn test_inspect_reads_stdin_and_emits_json() {
    let output = cdshape_cmd()
        .args(["inspect", "GetDeploymentTarget", "--response", "-o", "json"])
        .write_stdin(
            r#"{"deploymentTarget":{"deploymentTargetType":"ECSTarget","ecsTarget":{"targetId":"c:s"}}}"#,
        )
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["operation"], json!("GetDeploymentTarget"));
    assert_eq!(report["shape"], json!("response"));
    assert_eq!(
        report["canonical"]["deploymentTarget"]["ecsTarget"]["targetId"],
        json!("c:s")
    );
}

#[test]
fn test_validate_accepts_valid_payload() {
    let file = payload(r#"{"deploymentId":"d-1"}"#);
    cdshape_cmd()
        .args(["validate", "GetDeployment"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("GetDeployment request: ok"));
}

#[test]
fn test_validate_reports_violations_with_exit_code() {
    let file = payload(r#"{"applicationName":""}"#);
    let output = cdshape_cmd()
        .args(["validate", "CreateApplication"])
        .arg(file.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(9));
    let text = combined_output(&output);
    assert!(text.contains("applicationName"), "Expected path in output:\n{text}");
}

#[test]
fn test_unknown_operation_is_usage_error() {
    let output = cdshape_cmd()
        .args(["inspect", "LaunchRockets", "-"])
        .write_stdin("{}")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("Unknown operation"), "Expected error:\n{text}");
}

#[test]
fn test_malformed_json_is_usage_error() {
    let output = cdshape_cmd()
        .args(["inspect", "GetDeployment"])
        .write_stdin("{not json")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_set_profile_then_show() {
    let home = tempfile::tempdir().unwrap();

    cdshape_cmd_in(home.path())
        .args(["config", "set-profile", "staging", "--region", "eu-west-1", "--default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved profile 'staging'"));

    cdshape_cmd_in(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("default_profile = \"staging\"")
                .and(predicate::str::contains("[profiles.staging]"))
                .and(predicate::str::contains("region = \"eu-west-1\"")),
        );
}

#[test]
fn test_set_profile_refuses_to_overwrite_malformed_config() {
    let home = tempfile::tempdir().unwrap();
    let path = write_config(home.path(), MALFORMED_CONFIG);

    let output = cdshape_cmd_in(home.path())
        .args(["config", "set-profile", "staging", "--region", "eu-west-1"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(text.contains("config loading failed"), "Expected load error:\n{text}");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), MALFORMED_CONFIG);
}

#[test]
fn test_malformed_config_is_reported_by_call() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), MALFORMED_CONFIG);

    let output = cdshape_cmd_in(home.path())
        .args(["-o", "text", "--profile", "prod", "call", "ListApplications"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let text = combined_output(&output);
    assert!(text.contains("config loading failed"), "Expected load error:\n{text}");
    assert!(!text.contains("No endpoint"), "Unexpected error:\n{text}");
}

#[test]
fn test_config_path_works_with_malformed_config() {
    let home = tempfile::tempdir().unwrap();
    let path = write_config(home.path(), MALFORMED_CONFIG);
    cdshape_cmd_in(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(path.display().to_string()));
}

#[test]
fn test_config_default_output_format_is_applied() {
    let home = tempfile::tempdir().unwrap();
    write_config(home.path(), "[defaults]\noutput = \"json-compact\"\n");

    let output = cdshape_cmd_in(home.path())
        .args(["operations", "--paginated"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(rows.as_array().unwrap().iter().all(|r| r["paginated"] == json!(true)));

    cdshape_cmd_in(home.path())
        .args(["-o", "text", "operations", "--paginated"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ListApplications\n"));
}

#[test]
fn test_call_without_endpoint_fails() {
    let home = tempfile::tempdir().unwrap();
    let output = cdshape_cmd_in(home.path())
        .args(["call", "ListApplications"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("No endpoint"), "Expected error:\n{text}");
}

// ── Call ────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_call_sends_canonical_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("x-amz-target", "CodeDeploy_20141006.GetDeployment"))
        .and(body_json(json!({"deploymentId": "d-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deploymentInfo": {"deploymentId": "d-1", "status": "InProgress"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let file = payload(r#"{"deploymentId":"d-1","ignored":true}"#);
    cdshape_cmd_in(home.path())
        .args(["--endpoint", &server.uri(), "call", "GetDeployment"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{deploymentInfo: {deploymentId: d-1,status: InProgress}}",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_strict_validation_blocks_send() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let output = cdshape_cmd_in(home.path())
        .args([
            "--endpoint",
            &server.uri(),
            "--validation",
            "strict",
            "call",
            "BatchGetDeployments",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(9));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_rejects_non_utf8_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"{\"deploymentInfo\":{\"deploymentId\":\"d-\xff\"}}".to_vec()))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let file = payload(r#"{"deploymentId":"d-1"}"#);
    let output = cdshape_cmd_in(home.path())
        .args(["--endpoint", &server.uri(), "call", "GetDeployment"])
        .arg(file.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("not valid UTF-8"), "Expected decode error:\n{text}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_call_maps_not_found_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "ApplicationDoesNotExistException",
            "message": "No application found for name: ghost"
        })))
        .mount(&server)
        .await;

    let home = tempfile::tempdir().unwrap();
    let file = payload(r#"{"applicationName":"ghost"}"#);
    let output = cdshape_cmd_in(home.path())
        .args(["--endpoint", &server.uri(), "call", "GetApplication"])
        .arg(file.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    let text = combined_output(&output);
    assert!(text.contains("ApplicationDoesNotExistException"), "{text}");
}
