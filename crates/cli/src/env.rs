// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variables read by the doubles binary.

/// Generated env var name constants.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Tracing filter directive used when `DOUBLES_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "off";

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
