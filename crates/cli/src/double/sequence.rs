// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative ordering between expectations.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Call progress of one expectation, shared with any sequence it joins.
#[derive(Debug)]
pub(crate) struct Progress {
    pub(crate) label: String,
    pub(crate) expected: Cell<usize>,
    pub(crate) calls: Cell<usize>,
}

impl Progress {
    pub(crate) fn new(label: String, expected: usize) -> Self {
        Self {
            label,
            expected: Cell::new(expected),
            calls: Cell::new(0),
        }
    }

    pub(crate) fn is_satisfied(&self) -> bool {
        self.calls.get() >= self.expected.get()
    }
}

/// Expectations added to a sequence must be satisfied in the order they
/// were added. A sequence may span several methods and several mocks.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    steps: Rc<RefCell<Vec<Rc<Progress>>>>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of expectations in the sequence.
    pub fn len(&self) -> usize {
        self.steps.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.borrow().is_empty()
    }

    /// Append a step; returns its position.
    pub(crate) fn push(&self, step: Rc<Progress>) -> usize {
        let mut steps = self.steps.borrow_mut();
        steps.push(step);
        steps.len() - 1
    }

    /// Labels of unsatisfied steps positioned before `index`.
    pub(crate) fn pending_before(&self, index: usize) -> Vec<String> {
        self.steps
            .borrow()
            .iter()
            .take(index)
            .filter(|step| !step.is_satisfied())
            .map(|step| step.label.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
