use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_prime_range"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prime_range"));
}

#[test]
fn shows_version() {
    Command::new(env!("CARGO_BIN_EXE_prime_range"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_flag() {
    Command::new(env!("CARGO_BIN_EXE_prime_range"))
        .arg("--format")
        .assert()
        .failure();
}

#[test]
fn fails_when_stdin_is_closed() {
    Command::new(env!("CARGO_BIN_EXE_prime_range"))
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed").count(1));
}
