// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Doubles CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use doubles::cli::{Cli, Command};
use doubles::discovery;
use doubles::env::{DEFAULT_LOG_FILTER, names};
use doubles::error::ExitCode;

mod cmd_alarm;
mod cmd_log;
mod cmd_math;
mod cmd_user;

fn init_logging() {
    let filter = EnvFilter::try_from_env(names::DOUBLES_LOG)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("doubles: {}", e);
            match e.downcast_ref::<doubles::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        // Show help for bare invocation
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    let cwd = std::env::current_dir()?;
    let config = discovery::load_config(cli.config.as_deref(), &cwd)?;

    match command {
        Command::Alarm(args) => cmd_alarm::run(args),
        Command::Log(args) => cmd_log::run(&config, args),
        Command::User(user) => cmd_user::run(&config, user),
        Command::Calc(args) => cmd_math::calc(args),
        Command::Prime(args) => cmd_math::prime(args),
    }
}
