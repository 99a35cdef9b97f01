//! Integration tests for vetform-cli.

use assert_cmd::Command;
use predicates::prelude::*;

fn vetform() -> Command {
    Command::cargo_bin("vetform").unwrap()
}

// ── Top-level flags ───────────────────────────────────────────────────────────

#[test]
fn help_flag_shows_commands() {
    vetform()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("countries"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn version_flag_matches_cargo() {
    vetform()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help_and_fails() {
    vetform().assert().failure();
}

// ── check ─────────────────────────────────────────────────────────────────────

#[test]
fn check_accepts_a_valid_record_from_flags() {
    vetform()
        .args([
            "check",
            "--full-name",
            "Maria José da Silva",
            "--email",
            "maria.jose@example.com",
            "--birth-date",
            "1985-03-22",
            "--country",
            "Brasil",
            "--as-of",
            "2026-08-05",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Form is valid"));
}

#[test]
fn check_rejects_an_underage_record_with_exit_code_2() {
    vetform()
        .args([
            "check",
            "--full-name",
            "Ana Lima",
            "--email",
            "ana@gmail.com",
            "--birth-date",
            "2020-01-01",
            "--country",
            "Brasil",
            "--as-of",
            "2026-08-05",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("birthDate"));
}

#[test]
fn check_reports_typo_domains_with_the_suggestion() {
    vetform()
        .args([
            "check",
            "--full-name",
            "Ana Lima",
            "--email",
            "ana@gmail.con",
            "--birth-date",
            "1990-05-15",
            "--country",
            "Brasil",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("gmail.com"));
}

#[test]
fn check_reads_a_json_form_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.json");
    std::fs::write(
        &path,
        r#"{
            "fullName": "Maria José da Silva",
            "email": "maria.jose@example.com",
            "birthDate": "1985-03-22",
            "country": "Brasil"
        }"#,
    )
    .unwrap();

    vetform()
        .arg("check")
        .arg(&path)
        .args(["--as-of", "2026-08-05"])
        .assert()
        .success();
}

#[test]
fn check_reads_stdin_with_a_dash() {
    vetform()
        .args(["check", "-", "--as-of", "2026-08-05"])
        .write_stdin(
            r#"{
                "fullName": "Maria José da Silva",
                "email": "maria.jose@example.com",
                "birthDate": "1985-03-22",
                "country": "Brasil"
            }"#,
        )
        .assert()
        .success();
}

#[test]
fn check_json_output_carries_the_report_shape() {
    vetform()
        .args([
            "check",
            "--full-name",
            "Jo",
            "--email",
            "invalid-email",
            "--birth-date",
            "2020-01-01",
            "--country",
            "",
            "--as-of",
            "2026-08-05",
            "--output-format",
            "json",
        ])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(r#""isValid": false"#))
        .stdout(predicate::str::contains("email-malformed"))
        .stdout(predicate::str::contains("country-required"));
}

#[test]
fn check_slash_dates_pass_strict_but_fail_relaxed() {
    let record = [
        "--full-name",
        "Ana Lima",
        "--email",
        "ana@gmail.com",
        "--birth-date",
        "15/05/1990",
        "--country",
        "Brasil",
        "--as-of",
        "2026-08-05",
    ];

    vetform()
        .arg("check")
        .args(record)
        .args(["--profile", "strict"])
        .assert()
        .success();

    vetform()
        .arg("check")
        .args(record)
        .args(["--profile", "relaxed"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("birthDate"));
}

#[test]
fn check_honours_the_latam_catalog() {
    vetform()
        .args([
            "check",
            "--full-name",
            "Ana Lima",
            "--email",
            "ana@gmail.com",
            "--birth-date",
            "1990-05-15",
            "--country",
            "Uruguay",
            "--catalog",
            "latam",
            "--as-of",
            "2026-08-05",
        ])
        .assert()
        .success();
}

#[test]
fn check_honours_a_countries_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("allowed.txt");
    std::fs::write(&path, "# custom whitelist\nWakanda\n").unwrap();

    vetform()
        .args([
            "check",
            "--full-name",
            "Ana Lima",
            "--email",
            "ana@gmail.com",
            "--birth-date",
            "1990-05-15",
            "--country",
            "Wakanda",
            "--as-of",
            "2026-08-05",
        ])
        .arg("--countries-file")
        .arg(&path)
        .assert()
        .success();
}

// ── countries ─────────────────────────────────────────────────────────────────

#[test]
fn countries_lists_the_global_catalog() {
    vetform()
        .arg("countries")
        .assert()
        .success()
        .stdout(predicate::str::contains("México"))
        .stdout(predicate::str::contains("Brasil"));
}

#[test]
fn countries_json_output_is_an_array() {
    vetform()
        .args(["countries", "--catalog", "latam", "--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Uruguay\""));
}

// ── normalize ─────────────────────────────────────────────────────────────────

#[test]
fn normalize_collapses_whitespace() {
    vetform()
        .args(["normalize", "  João    da   Silva  "])
        .assert()
        .success()
        .stdout(predicate::str::diff("João da Silva\n"));
}

#[test]
fn normalize_json_output_carries_both_forms() {
    vetform()
        .args(["normalize", " Ana  Lima ", "--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""normalized": "Ana Lima""#));
}

// ── completions ───────────────────────────────────────────────────────────────

#[test]
fn completions_emit_a_bash_script() {
    vetform()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vetform"));
}
