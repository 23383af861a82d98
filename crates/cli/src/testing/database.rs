// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Doubles for [`Database`].

use crate::double::{FakeStore, MockMethod, Strictness};
use crate::error::Result;
use crate::repository::{Database, User};

/// Working in-memory database.
#[derive(Debug, Default)]
pub struct FakeDatabase {
    users: FakeStore<String, User>,
}

impl FakeDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Database for FakeDatabase {
    fn save_user(&self, name: &str, user: &User) -> Result<()> {
        self.users.save(name.to_string(), user.clone());
        Ok(())
    }

    fn load_user(&self, name: &str) -> Result<Option<User>> {
        Ok(self.users.load(name))
    }
}

/// Mock database. Unconfigured saves succeed and unconfigured loads find
/// nothing.
pub struct MockDatabase {
    pub save_user: MockMethod<(String, User), Result<()>>,
    pub load_user: MockMethod<String, Result<Option<User>>>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self::with_strictness(Strictness::default())
    }

    pub fn with_strictness(strictness: Strictness) -> Self {
        let mut save_user: MockMethod<(String, User), Result<()>> =
            MockMethod::with_fallback("save_user", |_| Ok(()));
        let mut load_user: MockMethod<String, Result<Option<User>>> =
            MockMethod::with_fallback("load_user", |_| Ok(None));
        save_user.set_strictness(strictness);
        load_user.set_strictness(strictness);
        Self {
            save_user,
            load_user,
        }
    }
}

impl Default for MockDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl Database for MockDatabase {
    fn save_user(&self, name: &str, user: &User) -> Result<()> {
        self.save_user.invoke((name.to_string(), user.clone()))
    }

    fn load_user(&self, name: &str) -> Result<Option<User>> {
        self.load_user.invoke(name.to_string())
    }
}
