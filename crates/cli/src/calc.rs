// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pocket calculator driven by key presses.

use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Plus,
    Minus,
}

/// Immediate-execution calculator: `2 + 2 =` displays `4`.
#[derive(Debug, Default, Clone)]
pub struct Calculator {
    display: f64,
    accumulator: Option<f64>,
    pending: Option<Op>,
    entry: Option<f64>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> f64 {
        self.display
    }

    pub fn enter(&mut self, value: f64) {
        self.entry = Some(value);
        self.display = value;
    }

    pub fn press_plus(&mut self) {
        self.apply();
        self.pending = Some(Op::Plus);
    }

    pub fn press_minus(&mut self) {
        self.apply();
        self.pending = Some(Op::Minus);
    }

    pub fn press_equals(&mut self) {
        self.apply();
        self.pending = None;
    }

    /// Press one key.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Number(n) => self.enter(n),
            Key::Plus => self.press_plus(),
            Key::Minus => self.press_minus(),
            Key::Equals => self.press_equals(),
        }
    }

    // Fold the current entry into the accumulator using the pending operator.
    fn apply(&mut self) {
        let Some(value) = self.entry.take() else {
            return;
        };
        let result = match (self.accumulator, self.pending) {
            (Some(acc), Some(Op::Plus)) => acc + value,
            (Some(acc), Some(Op::Minus)) => acc - value,
            _ => value,
        };
        self.accumulator = Some(result);
        self.display = result;
    }
}

/// A calculator key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key {
    Number(f64),
    Plus,
    Minus,
    Equals,
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "+" => Ok(Key::Plus),
            "-" => Ok(Key::Minus),
            "=" => Ok(Key::Equals),
            _ => s
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Key::Number)
                .ok_or_else(|| Error::Argument(format!("unknown calculator key '{}'", s))),
        }
    }
}

/// Press every key in order, finishing with `=`, and return the display.
pub fn evaluate<S: AsRef<str>>(keys: &[S]) -> Result<f64> {
    let mut calc = Calculator::new();
    for key in keys {
        calc.press(key.as_ref().parse()?);
    }
    calc.press_equals();
    Ok(calc.display())
}

#[cfg(test)]
#[path = "calc_tests.rs"]
mod tests;
