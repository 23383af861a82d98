//! Specs for doubles.toml handling.

use crate::prelude::*;

/// > Unsupported version exits 2
#[test]
fn unsupported_version_fails() {
    let temp = Project::empty();
    temp.config("version = 2\n");

    doubles(&["prime", "7"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// > Missing version exits 2
#[test]
fn missing_version_fails() {
    let temp = Project::empty();
    temp.file("doubles.toml", "[log]\ntargets = [\"stdout\"]\n");

    doubles(&["prime", "7"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("missing required field: version");
}

/// > Unknown keys are warnings (forward compatibility)
#[test]
fn unknown_config_key_warns() {
    let temp = Project::empty();
    temp.config("version = 1\ncolour = \"blue\"\n");

    doubles(&["prime", "7"])
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `colour`");
}

/// > Unknown nested keys are warnings
#[test]
fn unknown_nested_config_key_warns() {
    let temp = Project::empty();
    temp.config("[database]\nengine = \"sqlite\"\n");

    doubles(&["prime", "7"])
        .pwd(temp.path())
        .passes()
        .stderr_has("unrecognized field `database.engine`");
}

/// > Valid config produces no warnings
#[test]
fn valid_config_no_warnings() {
    let temp = Project::with_defaults();

    doubles(&["prime", "7"])
        .pwd(temp.path())
        .passes()
        .stderr_lacks("warning");
}

/// > Config is discovered from parent directories
#[test]
fn config_found_in_parent_dir() {
    let temp = Project::empty();
    temp.config("[log]\ntargets = [\"stdout\"]\n");
    temp.file("sub/dir/.keep", "");

    doubles(&["log", "found"])
        .pwd(temp.path().join("sub/dir"))
        .passes()
        .stdout_eq("[INFO] found\n");
}

/// > -C with a missing file exits 2
#[test]
fn explicit_missing_config_fails() {
    let temp = Project::empty();

    doubles(&["-C", "nope.toml", "prime", "7"])
        .pwd(temp.path())
        .exits(2)
        .stderr_has("config file not found");
}
