//! End-to-end tests driving the compiled `revdex` binary.
//!
//! Without `--data` every invocation runs against the seeded in-memory
//! store, so Pikachu and the id-1 reference rows are always present.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn revdex() -> Command {
    Command::cargo_bin("revdex").unwrap()
}

#[test]
fn help_flag_shows_usage() {
    revdex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("revdex"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag_matches_cargo() {
    revdex()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_shows_seeded_pikachu() {
    revdex()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pikachu"));
}

#[test]
fn list_categories_shows_seeded_rows() {
    revdex()
        .args(["list", "--kind", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mouse"))
        .stdout(predicate::str::contains("Flame"));
}

#[test]
fn list_types_as_json() {
    revdex()
        .args(["--output-format", "json", "list", "--kind", "types"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Electric\""))
        .stdout(predicate::str::contains("\"Fire\""));
}

// ── get ───────────────────────────────────────────────────────────────────────

#[test]
fn get_by_id_finds_pikachu() {
    revdex()
        .args(["get", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pikachu"))
        .stdout(predicate::str::contains("1903-01-01"));
}

#[test]
fn get_by_name_finds_pikachu() {
    revdex()
        .args(["get", "Pikachu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pikachu"));
}

#[test]
fn get_owner_by_name() {
    revdex()
        .args(["get", "Ash Ketchum", "--kind", "owner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ash Ketchum"));
}

#[test]
fn get_pokemon_as_json_includes_reviews() {
    revdex()
        .args(["--output-format", "json", "get", "Pikachu"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"reviews\""));
}

// ── create ────────────────────────────────────────────────────────────────────

#[test]
fn create_against_seeded_store_succeeds() {
    revdex()
        .args([
            "create",
            "Bulbasaur",
            "--birth-date",
            "1996-02-27",
            "--category-id",
            "1",
            "--owner-id",
            "1",
            "--type-id",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created pokemon 'Bulbasaur'"));
}

#[test]
fn create_with_data_file_persists_across_invocations() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("pokedex.json");
    let data_arg = data.to_str().unwrap();

    revdex()
        .args([
            "--data",
            data_arg,
            "create",
            "Eevee",
            "--birth-date",
            "1996-02-27",
            "--category-id",
            "1",
            "--owner-id",
            "2",
            "--type-id",
            "1",
        ])
        .assert()
        .success();

    revdex()
        .args(["--data", data_arg, "get", "Eevee"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Eevee"));
}

#[test]
fn quiet_create_prints_nothing_on_stdout() {
    revdex()
        .args([
            "-q",
            "create",
            "Squirtle",
            "--birth-date",
            "1996-02-27",
            "--category-id",
            "1",
            "--owner-id",
            "1",
            "--type-id",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn shell_completions_emit_a_script() {
    revdex()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
