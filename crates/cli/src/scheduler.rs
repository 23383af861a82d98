// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alarm scheduling against an injected time source.

/// Source of the current wall-clock time.
pub trait Time {
    /// Current local time formatted as `HH:MM`.
    fn current_time(&self) -> String;
}

/// Reads the local system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Time for SystemClock {
    fn current_time(&self) -> String {
        chrono::Local::now().format("%H:%M").to_string()
    }
}

/// A clock pinned to one reading.
///
/// Used by `doubles alarm --at`. The reading is validated on construction.
#[derive(Debug, Clone)]
pub struct FixedClock {
    reading: String,
}

impl FixedClock {
    /// Parse an `HH:MM` reading.
    pub fn parse(reading: &str) -> crate::Result<Self> {
        let time = chrono::NaiveTime::parse_from_str(reading, "%H:%M").map_err(|e| {
            crate::Error::Argument(format!("invalid time '{}' (expected HH:MM): {}", reading, e))
        })?;
        Ok(Self {
            reading: time.format("%H:%M").to_string(),
        })
    }
}

impl Time for FixedClock {
    fn current_time(&self) -> String {
        self.reading.clone()
    }
}

/// Alarm value returned at midnight.
pub const MIDNIGHT_ALARM: i32 = 42;

/// Alarm value returned at ten o'clock.
pub const MORNING_ALARM: i32 = 100;

/// Alarm value for every other time.
pub const NO_ALARM: i32 = 0;

/// Decides which alarm fires, based on whatever time source it is given.
pub struct Scheduler<'a> {
    time: &'a dyn Time,
}

impl<'a> Scheduler<'a> {
    pub fn new(time: &'a dyn Time) -> Self {
        Self { time }
    }

    pub fn alarm(&self) -> i32 {
        let current = self.time.current_time();
        tracing::debug!("alarm check at {}", current);
        match current.as_str() {
            "00:00" => MIDNIGHT_ALARM,
            "10:00" => MORNING_ALARM,
            _ => NO_ALARM,
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
