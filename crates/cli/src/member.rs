// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A type whose state is private but still verifiable from tests.

/// Tracks a member's age; the age is not part of the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    // Only observable through the test accessor.
    #[cfg_attr(not(any(test, feature = "test-accessors")), allow(dead_code))]
    age: u32,
}

impl Default for Member {
    fn default() -> Self {
        Self { age: 42 }
    }
}

impl Member {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the member to the updated age bracket.
    pub fn update(&mut self) {
        self.age = 100;
    }

    /// Test-only view of the private age.
    #[cfg(any(test, feature = "test-accessors"))]
    pub fn age(&self) -> u32 {
        self.age
    }
}

#[cfg(test)]
#[path = "member_tests.rs"]
mod tests;
