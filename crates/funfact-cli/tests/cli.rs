use assert_cmd::Command;
use predicates::prelude::*;

// Routes the fixed endpoint through a closed local port so every fetch fails
// fast with a network error instead of depending on the real API.
const DEAD_PROXY: &str = "http://127.0.0.1:1";

fn funfact() -> Command {
    let mut cmd = Command::cargo_bin("funfact").unwrap();
    cmd.env("HTTPS_PROXY", DEAD_PROXY)
        .env("https_proxy", DEAD_PROXY)
        .env("ALL_PROXY", DEAD_PROXY)
        .env_remove("NO_PROXY")
        .env_remove("no_proxy");
    cmd
}

#[test]
fn test_help() {
    funfact()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fun facts"));
}

#[test]
fn test_rejects_unknown_flag() {
    funfact().arg("--count").assert().failure();
}

#[test]
fn test_decline_exits_zero() {
    funfact()
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Welcome to the Fun Fact Generator!",
        ))
        .stdout(predicate::str::contains("Error fetching fact: "))
        .stdout(predicate::str::contains(
            "Failed to fetch a fact. Please try again.",
        ))
        .stdout(predicate::str::contains(
            "Would you like another fact? (y/n): ",
        ))
        .stdout(predicate::str::contains(
            "Thanks for using the Fun Fact Generator!",
        ));
}

#[test]
fn test_closed_stdin_exits_zero() {
    funfact()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[cfg(unix)]
#[test]
fn test_interrupt_exits_zero() {
    use std::io::{BufRead, BufReader, Read};
    use std::process::{Command as StdCommand, Stdio};

    let mut child = StdCommand::new(assert_cmd::cargo::cargo_bin("funfact"))
        .env("HTTPS_PROXY", DEAD_PROXY)
        .env("https_proxy", DEAD_PROXY)
        .env("ALL_PROXY", DEAD_PROXY)
        .env_remove("NO_PROXY")
        .env_remove("no_proxy")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    // The handler is installed before the banner is printed.
    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut first = String::new();
    stdout.read_line(&mut first).unwrap();
    assert_eq!(first.trim_end(), "Welcome to the Fun Fact Generator!");

    let status = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).unwrap();
    let exit = child.wait().unwrap();

    assert!(exit.success(), "exit status: {:?}", exit);
    assert!(rest.contains("Program interrupted. Goodbye!"), "stdout: {}", rest);
}
