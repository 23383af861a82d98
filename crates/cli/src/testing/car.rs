// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Doubles for [`Car`].

use crate::car::Car;
use crate::double::{MockMethod, Recorder, Spy, Strictness};

/// Mock car. Both methods share one call sequence.
pub struct MockCar {
    pub go: MockMethod<(), ()>,
    pub name: MockMethod<(), String>,
}

impl MockCar {
    /// Warns about calls nobody expected.
    pub fn naggy() -> Self {
        Self::with_strictness(Strictness::Naggy)
    }

    /// Ignores calls nobody expected.
    pub fn nice() -> Self {
        Self::with_strictness(Strictness::Nice)
    }

    /// Fails on calls nobody expected.
    pub fn strict() -> Self {
        Self::with_strictness(Strictness::Strict)
    }

    pub fn with_strictness(strictness: Strictness) -> Self {
        let recorder = Recorder::new();
        let mut go: MockMethod<(), ()> = MockMethod::new("go").with_recorder(&recorder);
        let mut name: MockMethod<(), String> = MockMethod::new("name").with_recorder(&recorder);
        go.set_strictness(strictness);
        name.set_strictness(strictness);
        Self { go, name }
    }
}

impl Car for MockCar {
    fn go(&self) {
        self.go.invoke(())
    }

    fn name(&self) -> String {
        self.name.invoke(())
    }
}

/// Records calls and otherwise behaves like the trait defaults.
#[derive(Debug)]
pub struct SpyCar {
    pub go: Spy<()>,
    pub name: Spy<()>,
}

impl SpyCar {
    pub fn new() -> Self {
        let recorder = Recorder::new();
        Self {
            go: Spy::with_recorder(&recorder, "go"),
            name: Spy::with_recorder(&recorder, "name"),
        }
    }
}

impl Default for SpyCar {
    fn default() -> Self {
        Self::new()
    }
}

impl Car for SpyCar {
    fn go(&self) {
        self.go.record(());
    }

    fn name(&self) -> String {
        self.name.record(());
        "Avante".to_string()
    }
}
