// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ready-made test doubles for the crate's collaborator traits.
//!
//! Each double implements the same trait as the production collaborator
//! and is built from the adapters in [`crate::double`].

mod car;
mod database;
mod target;
mod time;

pub use car::{MockCar, SpyCar};
pub use database::{FakeDatabase, MockDatabase};
pub use target::{MockLogTarget, SpyLogTarget};
pub use time::{MockTime, StubTime};
