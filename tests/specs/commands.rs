//! Specs for each subcommand.

use crate::prelude::*;

// =============================================================================
// ALARM
// =============================================================================

/// > alarm --at 00:00 prints 42
#[test]
fn alarm_at_midnight() {
    let temp = Project::empty();
    doubles(&["alarm", "--at", "00:00"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("42\n");
}

/// > alarm --at 10:00 prints 100
#[test]
fn alarm_at_ten() {
    let temp = Project::empty();
    doubles(&["alarm", "--at", "10:00"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("100\n");
}

/// > any other time prints 0
#[test]
fn alarm_at_noon_is_silent() {
    let temp = Project::empty();
    doubles(&["alarm", "--at", "12:00"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("0\n");
}

/// > alarm without --at reads the system clock
#[test]
fn alarm_uses_system_clock() {
    let temp = Project::empty();
    let run = doubles(&["alarm"]).pwd(temp.path()).passes();
    assert!(["0\n", "42\n", "100\n"].contains(&run.stdout().as_str()));
}

/// > malformed --at is an argument error (exit 2)
#[test]
fn alarm_rejects_bad_time() {
    let temp = Project::empty();
    doubles(&["alarm", "--at", "25:00"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("argument error");
}

// =============================================================================
// LOG
// =============================================================================

/// > log writes to stderr by default
#[test]
fn log_defaults_to_stderr() {
    let temp = Project::empty();
    doubles(&["log", "hello"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("")
        .stderr_has("[INFO] hello\n");
}

/// > --target overrides configured targets and fans out in order
#[test]
fn log_to_file_and_stdout() {
    let temp = Project::with_defaults();
    doubles(&[
        "log",
        "--level",
        "warn",
        "--target",
        "stdout",
        "--target",
        "file:app.log",
        "disk almost full",
    ])
    .pwd(temp.path())
    .passes()
    .stdout_eq("[WARN] disk almost full\n");

    assert_eq!(temp.read("app.log"), "[WARN] disk almost full\n");
}

/// > file targets append
#[test]
fn log_file_target_appends() {
    let temp = Project::empty();
    temp.config("[log]\ntargets = [\"file:app.log\"]\n");

    doubles(&["log", "one"]).pwd(temp.path()).passes();
    doubles(&["log", "-l", "error", "two"])
        .pwd(temp.path())
        .passes();

    assert_eq!(temp.read("app.log"), "[INFO] one\n[ERROR] two\n");
}

/// > an invalid --target is a config error (exit 2)
#[test]
fn log_rejects_bad_target() {
    let temp = Project::empty();
    doubles(&["log", "--target", "syslog", "hi"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("invalid log target 'syslog'");
}

/// > an unwritable file target is an io error (exit 3)
#[test]
fn log_reports_unwritable_file() {
    let temp = Project::empty();
    doubles(&["log", "--target", "file:missing/dir/app.log", "hi"])
        .pwd(temp.path())
        .exits(3)
        .stderr_has("io error");
}

// =============================================================================
// USER
// =============================================================================

/// > user save then user load round-trips
#[test]
fn user_round_trip() {
    let temp = Project::empty();

    doubles(&["user", "save", "test_name", "42"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("saved { test_name, 42 }\n");
    doubles(&["user", "load", "test_name"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("{ test_name, 42 }\n");

    assert!(temp.path().join(".doubles/users/test_name.json").exists());
}

/// > --db selects the database directory
#[test]
fn user_db_flag() {
    let temp = Project::empty();

    doubles(&["user", "save", "alice", "30", "--db", "people"])
        .pwd(temp.path())
        .passes();

    assert!(temp.path().join("people/alice.json").exists());
    doubles(&["user", "load", "alice", "--db", "people"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("{ alice, 30 }\n");
}

/// > [database] path in config selects the database directory
#[test]
fn user_db_from_config() {
    let temp = Project::empty();
    temp.config("[database]\npath = \"records\"\n");

    doubles(&["user", "save", "bob", "7"])
        .pwd(temp.path())
        .passes();

    assert!(temp.path().join("records/bob.json").exists());
}

/// > loading a missing user exits 1
#[test]
fn user_load_missing_fails() {
    let temp = Project::empty();
    doubles(&["user", "load", "ghost"])
        .pwd(temp.path())
        .exits(1)
        .stderr_has("not found: user 'ghost'");
}

/// > path-like names are an argument error (exit 2)
#[test]
fn user_rejects_path_like_name() {
    let temp = Project::empty();
    doubles(&["user", "save", "../escape", "1"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("invalid user name");
}

// =============================================================================
// CALC / PRIME
// =============================================================================

/// > calc 2 + 2 prints 4
#[test]
fn calc_adds() {
    let temp = Project::empty();
    doubles(&["calc", "2", "+", "2"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("4\n");
}

/// > calc 10 - 5 = prints 5
#[test]
fn calc_subtracts() {
    let temp = Project::empty();
    doubles(&["calc", "10", "-", "5", "="])
        .pwd(temp.path())
        .passes()
        .stdout_eq("5\n");
}

/// > unknown keys are an argument error (exit 2)
#[test]
fn calc_rejects_unknown_key() {
    let temp = Project::empty();
    doubles(&["calc", "2", "*", "3"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unknown calculator key '*'");
}

/// > prime reports primality
#[test]
fn prime_reports() {
    let temp = Project::empty();
    doubles(&["prime", "7"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("7 is prime\n");
    doubles(&["prime", "8"])
        .pwd(temp.path())
        .passes()
        .stdout_eq("8 is not prime\n");
}
