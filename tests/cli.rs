//
//  confluence-sdk
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tests for the `confluence` binary.

use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;
use tempfile::TempDir;

/// The binary with an isolated config file and no inherited site settings.
fn confluence(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("confluence").unwrap();
    cmd.env("CONFLUENCE_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("CONFLUENCE_URL")
        .env_remove("CONFLUENCE_USERNAME")
        .env_remove("CONFLUENCE_API_TOKEN")
        .env_remove("CONFLUENCE_DEBUG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    confluence(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("space"))
        .stdout(predicate::str::contains("page"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    confluence(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();
    confluence(&dir).arg("pages").assert().code(2);
}

#[test]
fn test_config_set_warns_when_environment_overrides() {
    let dir = TempDir::new().unwrap();
    confluence(&dir)
        .env("CONFLUENCE_URL", "https://env.atlassian.net")
        .args(["config", "set", "site.url", "https://acme.atlassian.net"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: CONFLUENCE_URL is set"));
}

#[test]
fn test_config_path_points_at_override() {
    let dir = TempDir::new().unwrap();
    confluence(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_missing_site_fails_with_hint() {
    let dir = TempDir::new().unwrap();
    confluence(&dir)
        .args(["page", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFLUENCE_URL"));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    confluence(&dir)
        .args(["config", "set", "site.url", "https://acme.atlassian.net/"])
        .assert()
        .success();

    confluence(&dir)
        .args(["config", "get", "site.url"])
        .assert()
        .success()
        .stdout("https://acme.atlassian.net\n");

    confluence(&dir)
        .args(["config", "set", "site.token", "secret-token-1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("secret-token").not());
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    confluence(&dir)
        .args(["config", "set", "core.editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_page_list_json_prints_raw_payload() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/wiki/api/v2/pages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("space-id".into(), "98306".into()),
            Matcher::UrlEncoded("limit".into(), "25".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"results": [{"id": "1001", "title": "Runbook", "customField": 7}], "_links": {}}"#)
        .create();

    let output = confluence(&dir)
        .env("CONFLUENCE_URL", server.url())
        .args(["page", "list", "--space-id", "98306", "--json"])
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["results"][0]["customField"], 7);
}

#[test]
fn test_page_list_table() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/wiki/api/v2/pages")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{
                "results": [{"id": "1001", "title": "Runbook", "spaceId": "98306", "status": "current", "version": {"number": 3}}],
                "_links": {"next": "/wiki/api/v2/pages?cursor=xyz"}
            }"#,
        )
        .create();

    confluence(&dir)
        .args(["--site", &server.url(), "page", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Runbook"))
        .stdout(predicate::str::contains("--cursor xyz"));
}

#[test]
fn test_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/wiki/api/v2/spaces/404")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_body(r#"{"errors": [{"status": 404, "title": "Not Found"}]}"#)
        .create();

    confluence(&dir)
        .env("CONFLUENCE_URL", server.url())
        .args(["space", "view", "404"])
        .assert()
        .code(8)
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("Not Found"));
}

#[test]
fn test_credentials_from_environment() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/wiki/api/v2/spaces")
        .match_query(Matcher::Any)
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_body(r#"{"results": []}"#)
        .create();

    confluence(&dir)
        .env("CONFLUENCE_URL", server.url())
        .env("CONFLUENCE_USERNAME", "user")
        .env("CONFLUENCE_API_TOKEN", "pass")
        .args(["space", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No spaces found"));

    mock.assert();
}
