//! End-to-end tests for the memory-list binary.

use assert_cmd::Command;
use memory_store::{Category, MemoryDocument};
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::tempdir;

fn list_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("memory-list").unwrap();
    cmd.env("MEMORY_DIR", root);
    cmd
}

fn write_fixture(root: &Path, category: Category, slug: &str, title: &str, updated: &str) {
    let document = MemoryDocument {
        title: title.to_string(),
        tags: Vec::new(),
        created: "2024-01-01T00:00:00.000Z".to_string(),
        updated: updated.to_string(),
        body: "body".to_string(),
    };
    let dir = root.join(category.as_str());
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(format!("{slug}.md")), document.encode(category)).unwrap();
}

fn parse_stdout(output: &[u8]) -> Value {
    serde_json::from_slice(output).unwrap()
}

#[test]
fn test_lists_newest_update_first() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), Category::Projects, "jan", "Jan", "2024-01-01T00:00:00.000Z");
    write_fixture(dir.path(), Category::Projects, "mar", "Mar", "2024-03-01T00:00:00.000Z");
    write_fixture(dir.path(), Category::Projects, "feb", "Feb", "2024-02-01T00:00:00.000Z");

    let output = list_cmd(dir.path()).arg("projects").assert().success();
    let parsed = parse_stdout(&output.get_output().stdout);

    let titles: Vec<&str> = parsed["categories"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Mar", "Feb", "Jan"]);
    assert_eq!(parsed["totalMemories"], 3);
    assert_eq!(parsed["showing"], "projects");
}

#[test]
fn test_limit_truncates_but_total_counts_all() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), Category::Clients, "a", "A", "2024-01-01T00:00:00.000Z");
    write_fixture(dir.path(), Category::Clients, "b", "B", "2024-01-02T00:00:00.000Z");
    write_fixture(dir.path(), Category::Clients, "c", "C", "2024-01-03T00:00:00.000Z");

    let output = list_cmd(dir.path()).args(["clients", "1"]).assert().success();
    let parsed = parse_stdout(&output.get_output().stdout);

    assert_eq!(parsed["categories"]["clients"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["totalMemories"], 3);
}

#[test]
fn test_empty_categories_are_omitted() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), Category::General, "only", "Only", "2024-01-01T00:00:00.000Z");

    let output = list_cmd(dir.path()).assert().success();
    let parsed = parse_stdout(&output.get_output().stdout);

    let categories = parsed["categories"].as_object().unwrap();
    assert_eq!(categories.len(), 1);
    assert!(categories.contains_key("general"));
}

#[test]
fn test_missing_root_lists_nothing() {
    let dir = tempdir().unwrap();
    let output = list_cmd(&dir.path().join("never-created")).assert().success();
    let parsed = parse_stdout(&output.get_output().stdout);
    assert_eq!(parsed["totalMemories"], 0);
}

#[test]
fn test_invalid_category_is_rejected() {
    let dir = tempdir().unwrap();
    list_cmd(dir.path())
        .arg("nonsense")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid category: nonsense"));
}
