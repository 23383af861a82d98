// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logger::Level;

/// Runs the collaborators behind each lesson against their real implementations
#[derive(Parser)]
#[command(name = "doubles")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "DOUBLES_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the scheduler's alarm value
    Alarm(AlarmArgs),
    /// Write a message through the logger
    Log(LogArgs),
    /// Save or load users through the repository
    #[command(subcommand)]
    User(UserCommand),
    /// Drive the calculator with a key sequence
    Calc(CalcArgs),
    /// Report whether a number is prime
    Prime(PrimeArgs),
}

#[derive(clap::Args)]
pub struct AlarmArgs {
    /// Pin the clock to this time (HH:MM) instead of reading the system clock
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,
}

#[derive(clap::Args)]
pub struct LogArgs {
    /// Severity of the message
    #[arg(short, long, value_enum, default_value = "info")]
    pub level: Level,

    /// Log target (stderr, stdout, or file:<path>); overrides the config
    #[arg(short, long = "target", value_name = "SPEC")]
    pub targets: Vec<String>,

    /// Message to write
    pub message: String,
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Store a user record
    Save(UserSaveArgs),
    /// Print a stored user record
    Load(UserLoadArgs),
}

#[derive(clap::Args)]
pub struct UserSaveArgs {
    /// User name (also the record key)
    pub name: String,

    /// User age
    pub age: u32,

    /// Database directory; overrides the config
    #[arg(long, value_name = "DIR")]
    pub db: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct UserLoadArgs {
    /// User name to look up
    pub name: String,

    /// Database directory; overrides the config
    #[arg(long, value_name = "DIR")]
    pub db: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CalcArgs {
    /// Keys to press: numbers, `+`, `-`, `=`
    #[arg(required = true, allow_hyphen_values = true, value_name = "KEY")]
    pub keys: Vec<String>,
}

#[derive(clap::Args)]
pub struct PrimeArgs {
    /// Number to test
    pub n: u64,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
