use assert_cmd::Command;
use predicates::prelude::*;
use roster::model::User;
use std::fs;
use std::path::Path;

fn roster(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd.arg("--fileName").arg(file);
    cmd
}

fn add(file: &Path, item: &str) {
    roster(file)
        .args(["--operation", "add", "--item", item])
        .assert()
        .success();
}

const ANN: &str = r#"{"id":"1","email":"a@x.com","age":30}"#;
const BOB: &str = r#"{"id":"2","email":"b@x.com","age":22}"#;

#[test]
fn add_creates_the_file_with_a_single_element_array() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");

    roster(&file)
        .args(["--operation", "add", "--item", ANN])
        .assert()
        .success()
        .stdout("");

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        r#"[{"id":"1","email":"a@x.com","age":30}]"#
    );
}

#[test]
fn adding_a_duplicate_id_warns_but_still_appends() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);

    roster(&file)
        .args([
            "--operation",
            "add",
            "--item",
            r#"{"id":"1","email":"b@x.com","age":22}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item with id 1 already exists"));

    let users: Vec<User> = serde_json::from_slice(&fs::read(&file).unwrap()).unwrap();
    assert_eq!(
        users,
        vec![User::new("1", "a@x.com", 30), User::new("1", "b@x.com", 22)]
    );
}

#[test]
fn list_emits_the_file_contents_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);
    add(&file, BOB);

    let contents = fs::read_to_string(&file).unwrap();
    roster(&file)
        .args(["--operation", "list"])
        .assert()
        .success()
        .stdout(contents);
}

#[test]
fn list_of_a_missing_file_prints_nothing_and_creates_it_empty() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");

    roster(&file)
        .args(["--operation", "list"])
        .assert()
        .success()
        .stdout("");

    assert!(file.exists());
    assert_eq!(fs::metadata(&file).unwrap().len(), 0);
}

#[test]
fn listing_twice_produces_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);

    let first = roster(&file)
        .args(["--operation", "list"])
        .assert()
        .success();
    let second = roster(&file)
        .args(["--operation", "list"])
        .assert()
        .success();
    assert_eq!(first.get_output().stdout, second.get_output().stdout);
}

#[test]
fn find_by_id_prints_the_first_matching_record() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);
    add(&file, BOB);

    roster(&file)
        .args(["--operation", "findById", "--id", "1"])
        .assert()
        .success()
        .stdout(r#"{"id":"1","email":"a@x.com","age":30}"#);
}

#[test]
fn find_by_id_with_an_absent_id_prints_nothing_and_leaves_the_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);
    let before = fs::read(&file).unwrap();

    roster(&file)
        .args(["--operation", "findById", "--id", "9"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read(&file).unwrap(), before);
}

#[test]
fn remove_deletes_only_the_first_match_and_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);
    add(&file, BOB);
    add(&file, r#"{"id":"3","email":"c@x.com","age":41}"#);

    roster(&file)
        .args(["--operation", "remove", "--id", "2"])
        .assert()
        .success()
        .stdout("");

    let users: Vec<User> = serde_json::from_slice(&fs::read(&file).unwrap()).unwrap();
    let ids: Vec<_> = users.into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn removing_the_last_record_leaves_an_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);

    roster(&file)
        .args(["--operation", "remove", "--id", "1"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&file).unwrap(), "[]");
}

#[test]
fn remove_with_an_absent_id_warns_and_leaves_the_file_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);
    let before = fs::read(&file).unwrap();

    roster(&file)
        .args(["--operation", "remove", "--id", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item with id 9 not found"));

    assert_eq!(fs::read(&file).unwrap(), before);
}

#[test]
fn missing_file_name_fails_before_any_file_access() {
    Command::cargo_bin("roster")
        .unwrap()
        .args(["--operation", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("-fileName flag has to be specified"));
}

#[test]
fn missing_operation_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");

    roster(&file)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "-operation flag has to be specified",
        ));
    // Validation runs before any file I/O.
    assert!(!file.exists());
}

#[test]
fn add_without_item_fails() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir.path().join("users.json"))
        .args(["--operation", "add"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-item flag has to be specified"));
}

#[test]
fn find_by_id_without_id_fails() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir.path().join("users.json"))
        .args(["--operation", "findById"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-id flag has to be specified"));
}

#[test]
fn unsupported_operation_fails() {
    let dir = tempfile::tempdir().unwrap();
    roster(&dir.path().join("users.json"))
        .args(["--operation", "drop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Operation drop not allowed!"));
}

#[test]
fn malformed_item_aborts_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    add(&file, ANN);
    let before = fs::read(&file).unwrap();

    roster(&file)
        .args(["--operation", "add", "--item", "{not json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));

    assert_eq!(fs::read(&file).unwrap(), before);
}

#[test]
fn corrupt_store_file_aborts_list() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("users.json");
    fs::write(&file, "definitely not json").unwrap();

    roster(&file)
        .args(["--operation", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}
