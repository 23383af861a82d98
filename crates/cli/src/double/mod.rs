// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reusable building blocks for test doubles.
//!
//! A double is any type that implements a collaborator trait in place of the
//! real implementation. Rather than generating per-method code, a double
//! composes one adapter per trait method:
//!
//! - [`Stub`]: canned answers, optionally per argument.
//! - [`FakeStore`]: a working in-memory map for round-trip collaborators.
//! - [`Spy`]: an append-only call log with a read-only query surface.
//! - [`MockMethod`]: default actions plus verified expectations.
//!
//! Configuration takes `&mut self` and invocation takes `&self`, so a double
//! cannot be reconfigured while a system under test borrows it.

mod fake;
mod log;
mod matcher;
mod mock;
mod report;
mod sequence;
mod spy;
mod stub;

pub use fake::FakeStore;
pub use log::{CallLog, Invocation, Recorder};
pub use matcher::Matcher;
pub use mock::{Expectation, ExpectationState, MockMethod, OnCall, Strictness};
pub use report::{VerificationError, Violation};
pub use sequence::Sequence;
pub use spy::Spy;
pub use stub::Stub;
