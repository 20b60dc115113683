//! Integration tests for taxonomy export

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::frontsync_cmd;

fn init_workspace(temp: &TempDir) {
    frontsync_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_export_aggregates_tags_and_merges_with_registry() {
    let temp = TempDir::new().unwrap();
    init_workspace(&temp);

    // Pre-existing registry entry "a".
    frontsync_cmd()
        .current_dir(temp.path())
        .args(["term", "create", "tag", "a"])
        .assert()
        .success();

    fs::write(temp.path().join("one.md"), "---\ntags:\n- a\n- b\n---\n").unwrap();
    fs::write(temp.path().join("two.md"), "---\ntags:\n- b\n- c\n---\n").unwrap();

    frontsync_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 tag(s), 0 category(ies)"));

    frontsync_cmd()
        .current_dir(temp.path())
        .args(["term", "list", "tag"])
        .assert()
        .success()
        .stdout(predicate::eq("a\nb\nc\n"));
}

#[test]
fn test_export_skips_unparseable_files() {
    let temp = TempDir::new().unwrap();
    init_workspace(&temp);

    fs::write(temp.path().join("good.md"), "---\ntags:\n- ok\n---\n").unwrap();
    fs::write(temp.path().join("plain.md"), "no front matter\n").unwrap();
    fs::write(temp.path().join("broken.md"), "---\ntags: [oops\n---\n").unwrap();

    frontsync_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 tag(s)"))
        .stdout(predicate::str::contains("Skipped 2 document(s)"));
}

#[test]
fn test_export_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();
    init_workspace(&temp);

    fs::write(
        temp.path().join("one.md"),
        "---\ntags:\n- a\ncategories:\n- news\n---\n",
    )
    .unwrap();

    frontsync_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 tag(s), 1 category(ies)"));

    frontsync_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 tag(s), 1 category(ies)"));
}

#[test]
fn test_export_reads_nested_and_toml_documents() {
    let temp = TempDir::new().unwrap();
    init_workspace(&temp);

    fs::create_dir_all(temp.path().join("posts/deep")).unwrap();
    fs::write(
        temp.path().join("posts/deep/one.md"),
        "---\ntags:\n- nested\n---\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("posts/two.md"),
        "+++\ntags = [\"toml-tag\"]\n+++\n",
    )
    .unwrap();

    frontsync_cmd()
        .current_dir(temp.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 tag(s)"));

    frontsync_cmd()
        .current_dir(temp.path())
        .args(["term", "list", "tag"])
        .assert()
        .success()
        .stdout(predicate::eq("nested\ntoml-tag\n"));
}
