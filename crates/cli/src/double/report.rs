// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mock verification failures.

use std::fmt;

/// A single expectation mismatch, naming expected vs. observed interaction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// Fewer calls than expected by the time of verification.
    #[error("{method}({expectation}): expected {expected} call(s), actual {actual} (unsatisfied)")]
    Unsatisfied {
        method: &'static str,
        expectation: String,
        expected: usize,
        actual: usize,
    },

    /// More calls than expected.
    #[error("{method}({expectation}): expected {expected} call(s), actual {actual} (over-saturated)")]
    Oversaturated {
        method: &'static str,
        expectation: String,
        expected: usize,
        actual: usize,
    },

    /// Called while earlier steps of its sequence were still pending.
    #[error("{method}({expectation}): called out of order, still waiting for {}", .pending.join(", "))]
    OutOfOrder {
        method: &'static str,
        expectation: String,
        pending: Vec<String>,
    },

    /// Call matched no expectation on a strict mock.
    #[error("{method}: uninteresting call with {args} on a strict mock")]
    Uninteresting { method: &'static str, args: String },
}

impl Violation {
    /// Operation the violation was recorded on.
    pub fn method(&self) -> &'static str {
        match self {
            Violation::Unsatisfied { method, .. }
            | Violation::Oversaturated { method, .. }
            | Violation::OutOfOrder { method, .. }
            | Violation::Uninteresting { method, .. } => *method,
        }
    }
}

/// Every violation found by one verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationError {
    pub violations: Vec<Violation>,
}

impl VerificationError {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for VerificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mock verification failed ({} violation(s))", self.violations.len())?;
        for v in &self.violations {
            write!(f, "\n  - {}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for VerificationError {}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
