// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Argument matchers for mock expectations and default actions.

use std::fmt;

/// Decides whether a call's arguments are covered by an expectation.
pub struct Matcher<A> {
    test: Box<dyn Fn(&A) -> bool>,
    description: String,
}

impl<A> Matcher<A> {
    /// Matches every call.
    pub fn any() -> Self {
        Self {
            test: Box::new(|_| true),
            description: "any arguments".to_string(),
        }
    }

    /// Matches calls for which `predicate` holds.
    pub fn when(description: impl Into<String>, predicate: impl Fn(&A) -> bool + 'static) -> Self {
        Self {
            test: Box::new(predicate),
            description: description.into(),
        }
    }

    pub fn matches(&self, args: &A) -> bool {
        (self.test)(args)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl<A: PartialEq + fmt::Debug + 'static> Matcher<A> {
    /// Matches calls whose arguments equal `expected`.
    pub fn eq(expected: A) -> Self {
        let description = format!("{:?}", expected);
        Self {
            test: Box::new(move |args| *args == expected),
            description,
        }
    }
}

impl<A> fmt::Debug for Matcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Matcher").field(&self.description).finish()
    }
}

impl<A> fmt::Display for Matcher<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
