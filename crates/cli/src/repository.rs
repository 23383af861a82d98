// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User persistence behind an injected database.
//!
//! `Repository` never talks to storage directly. It hands every operation
//! to a [`Database`], so tests can substitute an in-memory fake.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    age: u32,
}

impl User {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {}, {} }}", self.name, self.age)
    }
}

/// Storage collaborator for [`Repository`].
pub trait Database {
    /// Store `user` under `name`, replacing any previous record.
    fn save_user(&self, name: &str, user: &User) -> Result<()>;

    /// Load the user stored under `name`; `Ok(None)` if there is none.
    fn load_user(&self, name: &str) -> Result<Option<User>>;
}

/// One JSON file per user in a directory.
#[derive(Debug, Clone)]
pub struct FileDatabase {
    dir: PathBuf,
}

impl FileDatabase {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, name: &str) -> Result<PathBuf> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', '\0']);
        if !valid {
            return Err(Error::Argument(format!("invalid user name '{}'", name)));
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }
}

impl Database for FileDatabase {
    fn save_user(&self, name: &str, user: &User) -> Result<()> {
        let path = self.record_path(name)?;
        fs::create_dir_all(&self.dir).map_err(|source| Error::Io {
            path: self.dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(user).map_err(|e| Error::Record {
            path: path.clone(),
            message: e.to_string(),
        })?;
        fs::write(&path, json).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        tracing::trace!("wrote {}", path.display());
        Ok(())
    }

    fn load_user(&self, name: &str) -> Result<Option<User>> {
        let path = self.record_path(name)?;
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(Error::Io { path, source }),
        };
        let user = serde_json::from_str(&content).map_err(|e| Error::Record {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(user))
    }
}

/// Saves and loads users through whatever database it is given.
pub struct Repository<'a> {
    database: &'a dyn Database,
}

impl<'a> Repository<'a> {
    pub fn new(database: &'a dyn Database) -> Self {
        Self { database }
    }

    /// Store `user` under its own name.
    pub fn save(&self, user: &User) -> Result<()> {
        tracing::debug!("saving user {}", user.name());
        self.database.save_user(user.name(), user)
    }

    pub fn load(&self, name: &str) -> Result<Option<User>> {
        tracing::debug!("loading user {}", name);
        self.database.load_user(name)
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
