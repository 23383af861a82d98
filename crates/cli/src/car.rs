// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A collaborator with default method bodies.

/// Both methods have working defaults, so implementers override only what
/// they need.
pub trait Car {
    fn go(&self) {}

    fn name(&self) -> String {
        "Avante".to_string()
    }
}

/// A car that keeps every default.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sedan;

impl Car for Sedan {}

/// Look the car up by name, then drive it.
pub fn process(car: &dyn Car) -> String {
    let name = car.name();
    tracing::debug!("processing {}", name);
    car.go();
    name
}

#[cfg(test)]
#[path = "car_tests.rs"]
mod tests;
