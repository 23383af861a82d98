// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Recording adapter with a read-only query surface.
//!
//! A spy only records. Whether the recorded interaction is acceptable is
//! decided by the test after the system under test has run.

use super::log::{CallLog, Recorder};

/// Records every call to one operation.
#[derive(Debug)]
pub struct Spy<A> {
    log: CallLog<A>,
}

impl<A> Spy<A> {
    /// Spy with a private sequence.
    pub fn new(method: &'static str) -> Self {
        Self {
            log: CallLog::new(method),
        }
    }

    /// Spy sharing `recorder`'s sequence, for cross-operation ordering.
    pub fn with_recorder(recorder: &Recorder, method: &'static str) -> Self {
        Self {
            log: recorder.log(method),
        }
    }

    /// Record a call. Called by the double's trait implementation.
    pub fn record(&self, args: A) {
        self.log.record(args);
    }

    pub fn was_called(&self) -> bool {
        !self.log.is_empty()
    }

    pub fn call_count(&self) -> usize {
        self.log.len()
    }

    /// True if this operation's first call precedes `other`'s first call.
    ///
    /// False when either operation was never called. Only meaningful for
    /// spies created from the same [`Recorder`].
    pub fn called_before<B>(&self, other: &Spy<B>) -> bool {
        match (self.log.first_seq(), other.log.first_seq()) {
            (Some(mine), Some(theirs)) => mine < theirs,
            _ => false,
        }
    }

    pub fn log(&self) -> &CallLog<A> {
        &self.log
    }
}

impl<A: Clone> Spy<A> {
    /// Recorded arguments in call order.
    pub fn calls(&self) -> Vec<A> {
        self.log.args()
    }

    /// Arguments of the `index`-th call (zero-based).
    pub fn nth(&self, index: usize) -> Option<A> {
        self.log.entries().get(index).map(|c| c.args.clone())
    }

    pub fn last(&self) -> Option<A> {
        self.log.entries().last().map(|c| c.args.clone())
    }
}

impl<A: PartialEq> Spy<A> {
    pub fn called_with(&self, args: &A) -> bool {
        self.log.entries().iter().any(|c| &c.args == args)
    }

    pub fn count_with(&self, args: &A) -> usize {
        self.log.entries().iter().filter(|c| &c.args == args).count()
    }
}

#[cfg(test)]
#[path = "spy_tests.rs"]
mod tests;
