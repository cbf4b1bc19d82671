//! End-to-end tests for the memory-read binary.

use assert_cmd::Command;
use memory_store::{Category, MemoryStore};
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn read_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("memory-read").unwrap();
    cmd.env("MEMORY_DIR", root);
    cmd
}

fn store_at(root: &Path) -> MemoryStore {
    MemoryStore::new(root.to_str().unwrap())
}

#[test]
fn test_reads_back_raw_content() {
    let dir = tempdir().unwrap();
    store_at(dir.path())
        .create(Category::General, "Note", "The body.", Vec::new())
        .unwrap();

    read_cmd(dir.path())
        .arg("general/note.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ok\":true"))
        .stdout(predicate::str::contains("\"path\":\"general/note.md\""))
        .stdout(predicate::str::contains("# Note"))
        .stdout(predicate::str::contains("The body."));
}

#[test]
fn test_missing_memory_reports_not_found() {
    let dir = tempdir().unwrap();
    read_cmd(dir.path())
        .arg("general/nope.md")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"ok\":false"))
        .stdout(predicate::str::contains("Memory not found: general/nope.md"));
}

#[test]
fn test_escaping_path_is_rejected() {
    let dir = tempdir().unwrap();
    read_cmd(dir.path())
        .arg("../../etc/passwd")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid path"));
}
