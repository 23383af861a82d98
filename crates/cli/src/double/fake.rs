// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory backing store for fake collaborators.

use std::borrow::Borrow;
use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

/// A lightweight, fully working key-value store.
///
/// A value saved under a key loads back unchanged under the same key.
/// Loading a key that was never saved returns `None`.
#[derive(Debug)]
pub struct FakeStore<K, V> {
    entries: RefCell<HashMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> FakeStore<K, V> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Store `value` under `key`, returning the value it replaced.
    pub fn save(&self, key: K, value: V) -> Option<V> {
        self.entries.borrow_mut().insert(key, value)
    }

    /// Copy of the value stored under `key`.
    pub fn load<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.borrow().get(key).cloned()
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.borrow_mut().remove(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for FakeStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
