// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Doubles for [`Time`].

use crate::double::{MockMethod, Strictness, Stub};
use crate::scheduler::Time;

/// Always reports the same time.
#[derive(Debug, Clone)]
pub struct StubTime {
    current_time: Stub<(), String>,
}

impl StubTime {
    pub fn new(reading: impl Into<String>) -> Self {
        Self {
            current_time: Stub::returning(reading.into()),
        }
    }

    /// How many times the time was read.
    pub fn reads(&self) -> usize {
        self.current_time.calls()
    }
}

impl Time for StubTime {
    fn current_time(&self) -> String {
        self.current_time.answer(&())
    }
}

/// Mock time source; configure through the public `current_time` field.
pub struct MockTime {
    pub current_time: MockMethod<(), String>,
}

impl MockTime {
    pub fn new() -> Self {
        Self::with_strictness(Strictness::default())
    }

    pub fn with_strictness(strictness: Strictness) -> Self {
        let mut current_time = MockMethod::new("current_time");
        current_time.set_strictness(strictness);
        Self { current_time }
    }
}

impl Default for MockTime {
    fn default() -> Self {
        Self::new()
    }
}

impl Time for MockTime {
    fn current_time(&self) -> String {
        self.current_time.invoke(())
    }
}
