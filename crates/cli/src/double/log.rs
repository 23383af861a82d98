// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only invocation logs shared by spies and mocks.

use std::cell::{Cell, Ref, RefCell};
use std::rc::Rc;

/// Monotonic sequence source.
///
/// Every log created from the same recorder draws sequence numbers from one
/// counter, so calls recorded on different operations (or different doubles)
/// can be compared for relative order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    next: Rc<Cell<u64>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty log for `method` that shares this recorder's sequence.
    pub fn log<A>(&self, method: &'static str) -> CallLog<A> {
        CallLog {
            method,
            recorder: self.clone(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Number of invocations recorded so far across all attached logs.
    pub fn total(&self) -> u64 {
        self.next.get()
    }

    fn tick(&self) -> u64 {
        let seq = self.next.get();
        self.next.set(seq + 1);
        seq
    }
}

/// One recorded call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<A> {
    /// Operation name (e.g., "write").
    pub method: &'static str,
    /// Arguments as passed by the caller.
    pub args: A,
    /// Position in the recorder's global sequence.
    pub seq: u64,
}

/// Append-only log of invocations of a single operation.
#[derive(Debug)]
pub struct CallLog<A> {
    method: &'static str,
    recorder: Recorder,
    calls: RefCell<Vec<Invocation<A>>>,
}

impl<A> CallLog<A> {
    /// Create a log with its own private recorder.
    pub fn new(method: &'static str) -> Self {
        Recorder::new().log(method)
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn recorder(&self) -> &Recorder {
        &self.recorder
    }

    /// Append a call and return its sequence number.
    pub fn record(&self, args: A) -> u64 {
        let seq = self.recorder.tick();
        self.calls.borrow_mut().push(Invocation {
            method: self.method,
            args,
            seq,
        });
        seq
    }

    pub fn len(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.borrow().is_empty()
    }

    /// Borrow the recorded invocations in call order.
    pub fn entries(&self) -> Ref<'_, [Invocation<A>]> {
        Ref::map(self.calls.borrow(), Vec::as_slice)
    }

    /// Sequence number of the first recorded call.
    pub fn first_seq(&self) -> Option<u64> {
        self.calls.borrow().first().map(|c| c.seq)
    }

    /// Sequence number of the most recent call.
    pub fn last_seq(&self) -> Option<u64> {
        self.calls.borrow().last().map(|c| c.seq)
    }

    /// Drop all recorded calls. The recorder's counter keeps running.
    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl<A: Clone> CallLog<A> {
    /// Copy of every recorded invocation.
    pub fn invocations(&self) -> Vec<Invocation<A>> {
        self.calls.borrow().clone()
    }

    /// Copy of every recorded argument tuple, in call order.
    pub fn args(&self) -> Vec<A> {
        self.calls.borrow().iter().map(|c| c.args.clone()).collect()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
