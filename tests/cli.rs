mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn hnview(home: &TempDir) -> Command {
    hnview_at(home.path())
}

fn hnview_at(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hnview").unwrap();
    cmd.env("HNVIEW_HOME", home)
        .env("RUST_LOG", "off")
        .arg("--no-color");
    cmd
}

/// Runs `check` off the async runtime so the local server keeps serving meanwhile.
async fn off_runtime(check: impl FnOnce() + Send + 'static) {
    tokio::task::spawn_blocking(check).await.unwrap();
}

#[test]
fn query_round_trips_through_store() {
    let home = TempDir::new().unwrap();

    hnview(&home)
        .args(["query", "--set", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Query set: abc"));

    hnview(&home)
        .arg("query")
        .assert()
        .success()
        .stdout(predicate::str::diff("abc\n"));

    assert!(home.path().join("store.json").exists());
}

#[test]
fn cleared_query_is_reported_empty() {
    let home = TempDir::new().unwrap();

    hnview(&home).args(["query", "--set", "abc"]).assert().success();
    hnview(&home).args(["query", "--clear"]).assert().success();

    hnview(&home)
        .arg("query")
        .assert()
        .success()
        .stdout(predicate::str::contains("No query remembered."));
}

#[test]
fn default_query_seeds_an_empty_store() {
    let home = TempDir::new().unwrap();

    hnview(&home)
        .args(["config", "default-query", "rust"])
        .assert()
        .success();

    hnview(&home)
        .arg("query")
        .assert()
        .success()
        .stdout(predicate::str::diff("rust\n"));
}

#[test]
fn config_lists_all_keys() {
    let home = TempDir::new().unwrap();

    hnview(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("endpoint = https://hn.algolia.com/api/v1/search?query="))
        .stdout(predicate::str::contains("query-key = search"))
        .stdout(predicate::str::contains("timeout = none"));
}

#[test]
fn bad_config_value_fails() {
    let home = TempDir::new().unwrap();

    hnview(&home)
        .args(["config", "timeout", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn unreachable_server_shows_error_banner() {
    let home = TempDir::new().unwrap();
    hnview(&home)
        .args(["config", "endpoint", "http://127.0.0.1:1/search?query="])
        .assert()
        .success();

    hnview(&home)
        .args(["search", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Something went wrong while loading..."))
        .stdout(predicate::str::contains("No stories."));
}

#[tokio::test(flavor = "multi_thread")]
async fn search_prints_results_and_remembers_terms() {
    let base = support::serve(support::search_api()).await;
    let home = TempDir::new().unwrap();
    let path = home.path().to_path_buf();
    let endpoint = format!("{}/search?query=", base);

    off_runtime(move || {
        hnview_at(&path)
            .args(["config", "endpoint", endpoint.as_str()])
            .assert()
            .success();

        hnview_at(&path)
            .args(["search", "rust", "async"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1. Alpha rust async"))
            .stdout(predicate::str::contains("2. Beta rust async"))
            .stdout(predicate::str::contains("by alice"))
            .stdout(predicate::str::contains("Something went wrong").not());

        hnview_at(&path)
            .arg("query")
            .assert()
            .success()
            .stdout(predicate::str::diff("rust async\n"));
    })
    .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn browse_submits_and_dismisses() {
    let base = support::serve(support::search_api()).await;
    let home = TempDir::new().unwrap();
    let path = home.path().to_path_buf();
    let endpoint = format!("{}/search?query=", base);

    off_runtime(move || {
        hnview_at(&path)
            .args(["config", "endpoint", endpoint.as_str()])
            .assert()
            .success();

        hnview_at(&path)
            .arg("browse")
            .write_stdin("query react\nsubmit\ndismiss 1\nbogus\nquit\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Loading ..."))
            .stdout(predicate::str::contains("1. Alpha react"))
            .stdout(predicate::str::contains("Dismissed (1): Alpha react"))
            .stdout(predicate::str::contains("1. Beta react"))
            .stderr(predicate::str::contains("Unknown command: bogus"));
    })
    .await;
}

#[test]
fn cleared_query_falls_back_to_default() {
    let home = TempDir::new().unwrap();

    hnview(&home)
        .args(["config", "default-query", "rust"])
        .assert()
        .success();
    hnview(&home).args(["query", "--set", "abc"]).assert().success();
    hnview(&home).args(["query", "--clear"]).assert().success();

    hnview(&home)
        .arg("query")
        .assert()
        .success()
        .stdout(predicate::str::diff("rust\n"));
}
