use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn wellness(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wellness").unwrap();
    cmd.env_remove("WELLNESS_API_URL")
        .env_remove("WELLNESS_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

fn write_config(path: &Path, base_url: &str, token: &str) {
    fs::write(
        path,
        format!(
            "[api]\nbase_url = \"{}\"\ntimeout_seconds = 5\n\n[auth]\ntoken = \"{}\"\n",
            base_url, token
        ),
    )
    .unwrap();
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("wellness").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Health and Wellness"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("exercise"))
        .stdout(predicate::str::contains("nutrition"));
}

#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("wellness").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_completions_command() {
    let mut cmd = Command::cargo_bin("wellness").unwrap();
    cmd.arg("completions").arg("bash");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("_wellness"));
}

#[test]
fn test_config_init_and_show() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");

    wellness(&file)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration initialized"));
    assert!(file.exists());

    wellness(&file)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:5000"));
}

#[test]
fn test_api_url_flag_overrides_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");
    write_config(&file, "http://from-file.test", "");

    wellness(&file)
        .args(["--api-url", "http://from-flag.test", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://from-flag.test"));
}

#[test]
fn test_logout_without_session() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");

    wellness(&file)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("You are not logged in."));
}

#[test]
fn test_exercise_log_posts_and_lists() {
    let mut server = Server::new();
    let create = server
        .mock("POST", "/api/exercises")
        .match_body(Matcher::Json(json!({
            "exerciseType": "Running",
            "duration": 30.0,
            "distance": 3.0,
            "caloriesBurned": 300.0
        })))
        .with_status(201)
        .expect(1)
        .create();
    let list = server
        .mock("GET", "/api/exercises")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"exerciseType":"Running","duration":30,"distance":3,"caloriesBurned":300}]"#)
        .expect(1)
        .create();

    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");
    write_config(&file, &server.url(), "");

    wellness(&file)
        .args(["exercise", "log", "--type", "running", "--duration", "30", "--distance", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise logged successfully!"))
        .stdout(predicate::str::contains("Calories Burned Overview"));

    create.assert();
    list.assert();
}

#[test]
fn test_invalid_exercise_fails_without_request() {
    let mut server = Server::new();
    let create = server.mock("POST", "/api/exercises").expect(0).create();

    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");
    write_config(&file, &server.url(), "");

    wellness(&file)
        .args(["exercise", "log", "--type", "Cycling", "--duration", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Duration must be positive"));

    create.assert();
}

#[test]
fn test_history_requires_login() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");

    wellness(&file)
        .arg("history")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Please log in first."));
}

#[test]
fn test_rejected_session_is_cleared() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/user/tracking")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Token expired"}"#)
        .create();

    let dir = tempdir().unwrap();
    let file = dir.path().join("config.toml");
    write_config(&file, &server.url(), "stale-token");

    wellness(&file)
        .arg("history")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error fetching health data"));

    let saved = fs::read_to_string(&file).unwrap();
    assert!(!saved.contains("stale-token"));
}
