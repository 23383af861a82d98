// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canned-answer adapter.

use std::cell::Cell;

/// Returns preconfigured results; never verifies anything.
///
/// Every call returns the default answer unless an argument-specific answer
/// was registered with [`Stub::with_answer`]. The first matching answer wins.
#[derive(Debug, Clone)]
pub struct Stub<A, R> {
    default: R,
    answers: Vec<(A, R)>,
    calls: Cell<usize>,
}

impl<A, R: Clone> Stub<A, R> {
    /// Stub that answers `value` to every call.
    pub fn returning(value: R) -> Self {
        Self {
            default: value,
            answers: Vec::new(),
            calls: Cell::new(0),
        }
    }

    /// Answer `value` when called with exactly `args`.
    pub fn with_answer(mut self, args: A, value: R) -> Self {
        self.answers.push((args, value));
        self
    }

    /// Number of calls answered so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<A: PartialEq, R: Clone> Stub<A, R> {
    /// Produce the canned answer for `args`.
    pub fn answer(&self, args: &A) -> R {
        self.calls.set(self.calls.get() + 1);
        self.answers
            .iter()
            .find(|(a, _)| a == args)
            .map(|(_, r)| r.clone())
            .unwrap_or_else(|| self.default.clone())
    }
}

#[cfg(test)]
#[path = "stub_tests.rs"]
mod tests;
