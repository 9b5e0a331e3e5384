//! Process-level CLI tests for `corec`, exercising the six end-to-end
//! scenarios of `SPEC_FULL.md` section 8 against the real binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn corec() -> Command {
    Command::new(env!("CARGO_BIN_EXE_corec"))
}

#[test]
fn help_flag_succeeds() {
    corec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("corec"));
}

#[test]
fn version_flag_succeeds() {
    corec().arg("--version").assert().success();
}

#[test]
fn read_write_round_trip() {
    let fixtures = fixtures_dir();
    corec()
        .arg(fixtures.join("read_write.core"))
        .arg(fixtures.join("read_write.dat"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("program\n  int X;\nbegin\n  read X;\n  write X;\nend\n")
                .and(predicate::str::contains("----------Program Output----------"))
                .and(predicate::str::contains("X = 42")),
        );
}

#[test]
fn arithmetic_computes_expected_values() {
    let fixtures = fixtures_dir();
    corec()
        .arg(fixtures.join("arithmetic.core"))
        .arg(fixtures.join("empty.dat"))
        .assert()
        .success()
        .stdout(predicate::str::contains("X = 14").and(predicate::str::contains("Y = 13")));
}

#[test]
fn loop_sums_to_six() {
    let fixtures = fixtures_dir();
    corec()
        .arg(fixtures.join("loop.core"))
        .arg(fixtures.join("empty.dat"))
        .assert()
        .success()
        .stdout(predicate::str::contains("S = 6"));
}

#[test]
fn uninitialized_use_is_fatal() {
    let fixtures = fixtures_dir();
    corec()
        .arg(fixtures.join("uninitialized.core"))
        .arg(fixtures.join("empty.dat"))
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("X").and(predicate::str::contains("initialized")));
}

#[test]
fn redeclaration_is_fatal() {
    let fixtures = fixtures_dir();
    corec()
        .arg(fixtures.join("redeclare.core"))
        .arg(fixtures.join("empty.dat"))
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("X").and(predicate::str::contains("declared")));
}

#[test]
fn data_file_exhaustion_is_fatal() {
    let fixtures = fixtures_dir();
    corec()
        .arg(fixtures.join("data_exhaustion.core"))
        .arg(fixtures.join("data_exhaustion.dat"))
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("data file"));
}

#[test]
fn no_print_suppresses_pretty_print_prefix() {
    let fixtures = fixtures_dir();
    corec()
        .arg("--no-print")
        .arg(fixtures.join("read_write.core"))
        .arg(fixtures.join("read_write.dat"))
        .assert()
        .success()
        .stdout(predicate::str::contains("program\n").not());
}
