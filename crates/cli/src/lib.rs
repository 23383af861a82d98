// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency-injected collaborators with swappable test doubles.
//!
//! Each system under test borrows its collaborator as `&dyn Trait`, so a
//! production implementation or any double from [`double`] and [`testing`]
//! can stand behind it.

pub mod calc;
pub mod car;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod double;
pub mod env;
pub mod error;
pub mod logger;
pub mod member;
pub mod prime;
pub mod repository;
pub mod scheduler;
pub mod testing;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{Error, ExitCode, Result};
pub use logger::{Level, LogTarget, Logger};
pub use repository::{Database, Repository, User};
pub use scheduler::{Scheduler, Time};

#[cfg(test)]
pub mod test_utils;
