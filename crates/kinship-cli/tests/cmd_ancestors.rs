//! Integration tests for `kinship ancestors`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `kinship` binary.
fn kinship_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("kinship");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path.to_str().expect("fixture path is UTF-8").to_owned()
}

fn kinship(args: &[&str]) -> Output {
    Command::new(kinship_bin())
        .args(args)
        .output()
        .expect("run kinship")
}

#[test]
fn ancestors_nearest_first_with_terms() {
    let out = kinship(&["ancestors", fixture("family.json").as_str(), "7"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "1\t3\tIvy\tparent\n2\t1\tRose\tgrandparent\n2\t2\tTom\tgrandparent\n"
    );
}

#[test]
fn root_person_has_no_ancestors() {
    let out = kinship(&["ancestors", fixture("family.json").as_str(), "1"]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn json_output_counts_ancestors() {
    let out = kinship(&["ancestors", fixture("family.json").as_str(), "9", "-f", "json"]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["person"], "9");
    assert_eq!(value["count"], 2);
    let ancestors = value["ancestors"].as_array().expect("array");
    assert_eq!(ancestors[0]["id"], "2");
    assert_eq!(ancestors[1]["id"], "8");
    assert_eq!(ancestors[1]["term"], "parent");
}

#[test]
fn cyclic_ancestry_terminates() {
    let out = kinship(&["ancestors", fixture("cyclic.json").as_str(), "a"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 2, "{stdout}");
}

#[test]
fn unknown_person_exits_1() {
    let out = kinship(&["ancestors", fixture("family.json").as_str(), "x"]);
    assert_eq!(out.status.code(), Some(1));
}
