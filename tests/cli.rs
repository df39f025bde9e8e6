//
//  pulumi-org
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests of the `porg` binary.

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use tempfile::TempDir;

/// A `porg` command isolated from the user's environment and config file.
fn porg(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("porg").unwrap();
    cmd.env("PORG_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("PULUMI_ACCESS_TOKEN")
        .env_remove("PULUMI_ORG")
        .env_remove("PULUMI_API_HOST")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    porg(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("token"))
        .stdout(predicate::str::contains("member"))
        .stdout(predicate::str::contains("team"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    porg(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("porg version "));
}

#[test]
fn test_invalid_team_kind_is_rejected() {
    let dir = TempDir::new().unwrap();
    porg(&dir)
        .args(["--token", "t", "-o", "acme", "team", "create", "platform", "--kind", "gitlab"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid team type 'gitlab'"));
}

#[test]
fn test_invalid_role_is_rejected() {
    let dir = TempDir::new().unwrap();
    porg(&dir)
        .args(["--token", "t", "-o", "acme", "member", "add", "octocat", "--role", "owner"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("admin, member"));
}

#[test]
fn test_missing_token() {
    let dir = TempDir::new().unwrap();
    porg(&dir)
        .args(["-o", "acme", "team", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No access token"));
}

#[test]
fn test_missing_organization() {
    let dir = TempDir::new().unwrap();
    porg(&dir)
        .args(["--token", "t", "team", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No organization"));
}

#[test]
fn test_member_list_json() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/orgs/acme/members")
        .match_query(Matcher::UrlEncoded("type".into(), "backend".into()))
        .match_header("authorization", "token pul-abc")
        .with_status(200)
        .with_body(r#"{"members":[{"role":"admin","user":{"githubLogin":"octocat"}}]}"#)
        .create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "pul-abc", "-o", "acme", "--json"])
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"githubLogin\": \"octocat\""))
        .stdout(predicate::str::contains("\"role\": \"admin\""));

    mock.assert();
}

#[test]
fn test_token_create_markdown() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/user/tokens")
        .match_body(Matcher::JsonString(r#"{"description":"ci"}"#.into()))
        .with_status(201)
        .with_body(r#"{"id":"t1","tokenValue":"pul-a|b"}"#)
        .create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "pul-abc", "--markdown"])
        .args(["token", "create", "-d", "ci"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Property | Value |"))
        .stdout(predicate::str::contains("| ID | t1 |"))
        .stdout(predicate::str::contains("| Token | pul-a\\|b |"));

    mock.assert();
}

#[test]
fn test_team_view_markdown_escapes_pipes() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/api/orgs/acme/teams/platform")
        .with_status(200)
        .with_body(r#"{"kind":"pulumi","name":"platform","description":"infra | ops"}"#)
        .create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "t", "-o", "acme", "--markdown"])
        .args(["team", "view", "platform"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# platform"))
        .stdout(predicate::str::contains("| Type | pulumi |"))
        .stdout(predicate::str::contains("| Description | infra \\| ops |"));
}

#[test]
fn test_team_view_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/api/orgs/acme/teams/ghost")
        .with_status(404)
        .with_body(r#"{"message":"team not found"}"#)
        .create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "t", "-o", "acme"])
        .args(["team", "view", "ghost"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("404 API Error: team not found"));
}

#[test]
fn test_forbidden_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/api/orgs/acme/teams")
        .with_status(403)
        .with_body(r#"{"message":"forbidden"}"#)
        .create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "t", "-o", "acme"])
        .args(["team", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_team_delete_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server.mock("DELETE", Matcher::Any).expect(0).create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "t", "-o", "acme"])
        .args(["team", "delete", "platform"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    mock.assert();
}

#[test]
fn test_team_delete_with_yes() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", "/api/orgs/acme/teams/platform")
        .with_status(204)
        .create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "t", "-o", "acme", "--yes"])
        .args(["team", "delete", "platform"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted team platform"));

    mock.assert();
}

#[test]
fn test_team_edit_keeps_unspecified_fields() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/api/orgs/acme/teams/platform")
        .with_status(200)
        .with_body(r#"{"kind":"pulumi","name":"platform","displayName":"Platform","description":"Infra"}"#)
        .create();
    let patch = server
        .mock("PATCH", "/api/orgs/acme/teams/platform")
        .match_body(Matcher::Json(serde_json::json!({
            "newDisplayName": "Platform",
            "newDescription": "Landing zone owners"
        })))
        .with_status(204)
        .create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "t", "-o", "acme"])
        .args(["team", "edit", "platform", "--description", "Landing zone owners"])
        .assert()
        .success();

    patch.assert();
}

#[test]
fn test_default_org_from_config() {
    let dir = TempDir::new().unwrap();
    porg(&dir)
        .args(["config", "set", "default_org", "acme"])
        .assert()
        .success();
    porg(&dir)
        .args(["config", "get", "default_org"])
        .assert()
        .success()
        .stdout("acme\n");

    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/orgs/acme/teams")
        .with_status(200)
        .with_body(r#"{"teams":[]}"#)
        .create();

    porg(&dir)
        .args(["--host", &server.url(), "--token", "t", "team", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No teams found in acme"));

    mock.assert();
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    porg(&dir)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key 'editor'"));
}
