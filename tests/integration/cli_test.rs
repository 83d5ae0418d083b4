//! End-to-end tests against the compiled binary

use assert_cmd::Command;
use predicates::prelude::*;

fn theater_seats() -> Command {
    let mut cmd = Command::cargo_bin("theater-seats").expect("binary should build");
    cmd.env_remove("THEATER_SEATS_LOG");
    cmd
}

#[test]
fn exit_choice_succeeds() {
    theater_seats()
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Theater Seat Management ---"))
        .stdout(predicate::str::contains(
            "Exiting... Thank you for using the Theater Seat Management System.",
        ));
}

#[test]
fn booking_session_prints_chart() {
    theater_seats()
        .write_stdin("1\nA\n1\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seat A1 has been booked."))
        .stdout(predicate::str::contains("   A B C D E F G H I J K L"))
        .stdout(predicate::str::contains(" 1 X O O O O O O O O O O O"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    theater_seats().write_stdin("").assert().success();
}

#[test]
fn debug_logging_goes_to_stderr() {
    theater_seats()
        .args(["--log", "debug"])
        .write_stdin("1 B 2 4")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seat B2 has been booked."))
        .stderr(predicate::str::contains("seat booked"));
}

#[test]
fn invalid_log_filter_fails() {
    theater_seats()
        .args(["--log", "theater_seats=bogus"])
        .write_stdin("4")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize logging"));
}

#[test]
fn help_mentions_tui_flag() {
    theater_seats()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--tui"));
}
