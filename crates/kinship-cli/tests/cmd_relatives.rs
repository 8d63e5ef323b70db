//! Integration tests for `kinship relatives`.
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
fn lists_blood_and_marriage_relatives() {
    let out = kinship(&["relatives", fixture("family.json").as_str(), "4"]);
    assert!(out.status.success(), "exit code: {:?}", out.status.code());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        concat!(
            "1\tRose\tchild\n",
            "2\tTom\tchild\n",
            "3\tIvy\tsibling\n",
            "5\tLea\tspouse\n",
            "6\tKit\tparent\n",
            "7\tMax\taunt/uncle\n",
            "9\tNed\tsibling (half)\n",
        )
    );
}

#[test]
fn in_laws_are_kept() {
    let out = kinship(&["relatives", fixture("family.json").as_str(), "5"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("3\tIvy\tnot related (in-law)"), "{stdout}");
    assert!(!stdout.contains("Uma"), "{stdout}");
}

#[test]
fn include_unrelated_lists_everyone() {
    let out = kinship(&["relatives", fixture("family.json").as_str(), "4", "--include-unrelated"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 9, "{stdout}");
    assert!(stdout.contains("10\tUma\tnot related"), "{stdout}");
}

#[test]
fn json_rows_carry_names() {
    let out = kinship(&["relatives", fixture("family.json").as_str(), "10", "-f", "json"]);
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["person"], "10");
    assert_eq!(value["count"], 0);
}

#[test]
fn unknown_person_exits_1() {
    let out = kinship(&["relatives", fixture("family.json").as_str(), "99"]);
    assert_eq!(out.status.code(), Some(1));
}
