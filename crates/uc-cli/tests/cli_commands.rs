//! Integration tests: cli_commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn undercroft() -> Command {
    Command::cargo_bin("undercroft").unwrap()
}

const TINY_WORLD: &str = r#"{
    "meta": {
        "name": "Broom Closet",
        "start_room": "closet",
        "trophy_case": "shelf",
        "lamp": "bulb",
        "underworld": "closet",
        "max_score": 0
    },
    "rooms": [
        { "id": "closet", "name": "Closet", "description": "A cramped closet.", "flags": ["lit"] }
    ],
    "objects": [
        { "id": "shelf", "name": "shelf", "brief": "shelf", "location": { "room": "closet" },
          "flags": ["container", "open", "scenery"], "capacity": 10 },
        { "id": "bulb", "name": "bulb", "brief": "light bulb", "location": { "room": "closet" },
          "flags": ["takeable", "light_source"], "weight": 1, "size": 1 }
    ],
    "actors": []
}"#;

// -- check --

#[test]
fn check_builtin_world() {
    undercroft()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All checks passed for 'The Great Underground Empire'",
        ))
        .stdout(predicate::str::contains("100 rooms"));
}

#[test]
fn check_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("closet.json");
    fs::write(&path, TINY_WORLD).unwrap();

    undercroft()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Broom Closet"))
        .stdout(predicate::str::contains("1 rooms, 2 objects"));
}

#[test]
fn check_broken_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();

    undercroft()
        .args(["check", "--world"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot load"));
}

#[test]
fn check_missing_file_fails() {
    undercroft()
        .args(["check", "--world", "/nonexistent/world.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// -- play --

#[test]
fn play_prints_the_opening() {
    undercroft()
        .arg("play")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("West of House"))
        .stdout(predicate::str::contains("small mailbox"));
}

#[test]
fn play_runs_commands_from_stdin() {
    undercroft()
        .args(["play", "--peaceful"])
        .write_stdin("take leaflet\nread leaflet\ninventory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Taken."))
        .stdout(predicate::str::contains("WELCOME TO ZORK!"))
        .stdout(predicate::str::contains("You are carrying:"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn play_stops_at_quit() {
    undercroft()
        .args(["play", "--peaceful"])
        .write_stdin("quit\ntake leaflet\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Taken.").not());
}

#[test]
fn play_reports_unknown_words() {
    undercroft()
        .arg("play")
        .write_stdin("frobnicate\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("I don't know the word \"frobnicate\"."));
}

#[test]
fn play_saves_to_the_save_dir() {
    let dir = TempDir::new().unwrap();
    undercroft()
        .args(["play", "--peaceful", "--save-dir"])
        .arg(dir.path())
        .write_stdin("take leaflet\nsave first\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved."));
    assert!(dir.path().join("first.json").exists());

    undercroft()
        .args(["play", "--peaceful", "--save-dir"])
        .arg(dir.path())
        .write_stdin("restore first\ninventory\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored."))
        .stdout(predicate::str::contains("A leaflet"));
}

#[test]
fn play_without_save_dir_cannot_save() {
    undercroft()
        .arg("play")
        .write_stdin("save\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Save failed"));
}

#[test]
fn play_custom_world() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("closet.json");
    fs::write(&path, TINY_WORLD).unwrap();

    undercroft()
        .args(["play", "--world"])
        .arg(&path)
        .write_stdin("take bulb\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("A cramped closet."))
        .stdout(predicate::str::contains("Taken."));
}

#[test]
fn help_lists_subcommands() {
    undercroft()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("check"));
}
