use assert_cmd::Command;
use predicates::prelude::*;

const START_PROMPT: &str = "Please enter the start of the range (non-negative integer): ";
const END_PROMPT: &str = "Please enter the end of the range (non-negative integer): ";

fn prime_range() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_prime_range"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn ten_to_twenty() {
    prime_range()
        .write_stdin("10\n20\n")
        .assert()
        .success()
        .stdout(format!(
            "{START_PROMPT}{END_PROMPT}\
             The last prime numbers in the range [10, 20] are: 13, 17, 19\n\
             The number of prime numbers in this range is: 4\n"
        ))
        .stderr(predicate::str::is_empty());
}

#[test]
fn zero_to_one_has_no_primes() {
    prime_range()
        .write_stdin("0\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "No prime numbers found in the range [0, 1]\n\
             The number of prime numbers in this range is: 0\n",
        ));
}

#[test]
fn inverted_range_is_retried() {
    prime_range()
        .write_stdin("5\n3\n3\n5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "Error: Start of the range must be less than or equal to the end of the range.",
            )
            .and(predicate::str::contains("[3, 5] are: 3, 5\n")),
        );
}

#[test]
fn negative_start_is_retried() {
    prime_range()
        .write_stdin("-2\n5\n2\n5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error: Range values must be non-negative.")
                .and(predicate::str::contains("[2, 5] are: 2, 3, 5\n"))
                .and(predicate::str::contains("this range is: 3\n")),
        );
}

#[test]
fn non_integer_start_is_retried() {
    prime_range()
        .write_stdin("abc\n1\n100\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Error: Invalid input. Please enter integer values.")
                .and(predicate::str::contains("[1, 100] are: 83, 89, 97\n"))
                .and(predicate::str::contains("this range is: 25\n")),
        );
}

#[test]
fn verbose_logs_go_to_stderr() {
    prime_range()
        .arg("-v")
        .write_stdin("x\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("rejected input").not())
        .stderr(predicate::str::contains("rejected input"));
}

#[test]
fn positional_arguments_do_not_stop_the_session() {
    prime_range()
        .args(["10", "20"])
        .write_stdin("2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2, 3] are: 2, 3\n"));
}

#[test]
fn digit_separators_are_accepted() {
    prime_range()
        .write_stdin("1_000\n1_010\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The last prime numbers in the range [1000, 1010] are: 1009\n",
        ));
}
