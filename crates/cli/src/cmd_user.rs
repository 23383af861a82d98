// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User command implementation.

use std::path::Path;

use doubles::cli::UserCommand;
use doubles::config::Config;
use doubles::error::{Error, ExitCode};
use doubles::repository::{FileDatabase, Repository, User};

/// Run `user save` or `user load` against the file database.
pub fn run(config: &Config, command: &UserCommand) -> anyhow::Result<ExitCode> {
    match command {
        UserCommand::Save(args) => {
            let database = open(args.db.as_deref(), config);
            let user = User::new(args.name.as_str(), args.age);
            Repository::new(&database).save(&user)?;
            println!("saved {}", user);
        }
        UserCommand::Load(args) => {
            let database = open(args.db.as_deref(), config);
            let user = Repository::new(&database)
                .load(&args.name)?
                .ok_or_else(|| Error::NotFound(format!("user '{}'", args.name)))?;
            println!("{}", user);
        }
    }
    Ok(ExitCode::Success)
}

fn open(explicit: Option<&Path>, config: &Config) -> FileDatabase {
    let dir = explicit.unwrap_or(config.database.path.as_path());
    tracing::debug!("using database at {}", dir.display());
    FileDatabase::new(dir)
}
