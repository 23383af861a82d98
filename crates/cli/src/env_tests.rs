// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn names_doubles_log_is_correct() {
    assert_eq!(names::DOUBLES_LOG, "DOUBLES_LOG");
}

#[test]
fn names_doubles_config_is_correct() {
    assert_eq!(names::DOUBLES_CONFIG, "DOUBLES_CONFIG");
}

#[test]
fn logging_is_off_by_default() {
    assert_eq!(DEFAULT_LOG_FILTER, "off");
}
