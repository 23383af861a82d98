// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mock adapter: default actions plus verified expectations.
//!
//! A mock struct holds one [`MockMethod`] per trait method and forwards each
//! trait call to [`MockMethod::invoke`]. Tests configure it up front:
//!
//! ```ignore
//! let mut target = MockLogTarget::new();
//! target.write.expect_call(Matcher::eq((Level::Info, "test_message".to_string())));
//! ```
//!
//! Each call is matched against the expectations in declaration order. The
//! first matching expectation that still wants calls takes it. When every
//! matching expectation is already saturated the call counts against the
//! last one, which then reports over-saturation. Calls matching no
//! expectation are "uninteresting" and handled by the method's
//! [`Strictness`].
//!
//! Outstanding violations fail the test when the `MockMethod` is dropped.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::log::{CallLog, Recorder};
use super::matcher::Matcher;
use super::report::{VerificationError, Violation};
use super::sequence::{Progress, Sequence};

type Action<A, R> = Box<dyn Fn(&A) -> R>;

/// How a mock treats calls that match no expectation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Return the default value and emit a warning.
    #[default]
    Naggy,
    /// Return the default value silently.
    Nice,
    /// Return the default value and fail verification.
    Strict,
}

/// Progress of a single expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectationState {
    /// Still waiting for `remaining` matching calls.
    Pending { remaining: usize },
    /// Called exactly as often as expected, in order.
    Satisfied,
    /// Called too often or out of sequence.
    Violated,
}

/// Default action used when no expectation supplies a return value.
pub struct OnCall<A, R> {
    matcher: Matcher<A>,
    action: Option<Action<A, R>>,
}

impl<A, R> OnCall<A, R> {
    /// Compute the return value from the call's arguments.
    pub fn will_by_default(&mut self, action: impl Fn(&A) -> R + 'static) -> &mut Self {
        self.action = Some(Box::new(action));
        self
    }
}

impl<A, R: Clone + 'static> OnCall<A, R> {
    /// Return a copy of `value` on every matching call.
    pub fn will_return(&mut self, value: R) -> &mut Self {
        self.will_by_default(move |_| value.clone())
    }
}

/// A declared interaction: which arguments, how many calls, in what order.
pub struct Expectation<A, R> {
    method: &'static str,
    matcher: Matcher<A>,
    progress: Rc<Progress>,
    action: Option<Action<A, R>>,
    sequence: Option<(Sequence, usize)>,
    out_of_order: RefCell<Vec<Vec<String>>>,
}

impl<A, R> Expectation<A, R> {
    fn new(method: &'static str, matcher: Matcher<A>) -> Self {
        let label = format!("{}({})", method, matcher.description());
        Self {
            method,
            matcher,
            progress: Rc::new(Progress::new(label, 1)),
            action: None,
            sequence: None,
            out_of_order: RefCell::new(Vec::new()),
        }
    }

    /// Expect exactly `n` matching calls (default 1).
    pub fn times(&mut self, n: usize) -> &mut Self {
        self.progress.expected.set(n);
        self
    }

    /// Compute the return value of matching calls.
    pub fn returning(&mut self, action: impl Fn(&A) -> R + 'static) -> &mut Self {
        self.action = Some(Box::new(action));
        self
    }

    /// Must be satisfied after every expectation added to `sequence` before it.
    pub fn in_sequence(&mut self, sequence: &Sequence) -> &mut Self {
        let index = sequence.push(Rc::clone(&self.progress));
        self.sequence = Some((sequence.clone(), index));
        self
    }

    /// Matching calls observed so far.
    pub fn calls(&self) -> usize {
        self.progress.calls.get()
    }

    pub fn state(&self) -> ExpectationState {
        let calls = self.progress.calls.get();
        let expected = self.progress.expected.get();
        if calls > expected || !self.out_of_order.borrow().is_empty() {
            ExpectationState::Violated
        } else if calls == expected {
            ExpectationState::Satisfied
        } else {
            ExpectationState::Pending {
                remaining: expected - calls,
            }
        }
    }

    fn violations(&self) -> Vec<Violation> {
        let calls = self.progress.calls.get();
        let expected = self.progress.expected.get();
        let expectation = self.matcher.description().to_string();

        let mut violations: Vec<Violation> = self
            .out_of_order
            .borrow()
            .iter()
            .map(|pending| Violation::OutOfOrder {
                method: self.method,
                expectation: expectation.clone(),
                pending: pending.clone(),
            })
            .collect();

        if calls > expected {
            violations.push(Violation::Oversaturated {
                method: self.method,
                expectation,
                expected,
                actual: calls,
            });
        } else if calls < expected {
            violations.push(Violation::Unsatisfied {
                method: self.method,
                expectation,
                expected,
                actual: calls,
            });
        }
        violations
    }

    /// Stop this expectation from blocking later steps of its sequence.
    fn retire(&self) {
        self.progress.expected.set(self.progress.calls.get());
    }
}

impl<A, R: Clone + 'static> Expectation<A, R> {
    /// Return a copy of `value` on every matching call.
    pub fn return_const(&mut self, value: R) -> &mut Self {
        self.returning(move |_| value.clone())
    }
}

/// Mock adapter for one trait method taking arguments `A` and returning `R`.
pub struct MockMethod<A, R> {
    name: &'static str,
    strictness: Strictness,
    defaults: Vec<OnCall<A, R>>,
    expectations: Vec<Expectation<A, R>>,
    fallback: Action<A, R>,
    log: CallLog<A>,
    warnings: RefCell<Vec<String>>,
    uninteresting: RefCell<Vec<Violation>>,
    matched: Cell<usize>,
}

impl<A, R: Default + 'static> MockMethod<A, R> {
    /// Mock whose last-resort return value is `R::default()`.
    pub fn new(name: &'static str) -> Self {
        Self::with_fallback(name, |_| R::default())
    }
}

impl<A, R> MockMethod<A, R> {
    /// Mock whose last-resort return value comes from `fallback`.
    pub fn with_fallback(name: &'static str, fallback: impl Fn(&A) -> R + 'static) -> Self {
        Self {
            name,
            strictness: Strictness::default(),
            defaults: Vec::new(),
            expectations: Vec::new(),
            fallback: Box::new(fallback),
            log: CallLog::new(name),
            warnings: RefCell::new(Vec::new()),
            uninteresting: RefCell::new(Vec::new()),
            matched: Cell::new(0),
        }
    }

    /// Record calls into `recorder`'s sequence (for cross-method ordering).
    pub fn with_recorder(mut self, recorder: &Recorder) -> Self {
        self.log = recorder.log(self.name);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    pub fn set_strictness(&mut self, strictness: Strictness) {
        self.strictness = strictness;
    }

    /// Declare a default action for calls matching `matcher`.
    ///
    /// Later declarations take precedence over earlier ones.
    pub fn on_call(&mut self, matcher: Matcher<A>) -> &mut OnCall<A, R> {
        self.defaults.push(OnCall {
            matcher,
            action: None,
        });
        let last = self.defaults.len() - 1;
        &mut self.defaults[last]
    }

    /// Declare that calls matching `matcher` must happen (once, by default).
    pub fn expect_call(&mut self, matcher: Matcher<A>) -> &mut Expectation<A, R> {
        self.expectations.push(Expectation::new(self.name, matcher));
        let last = self.expectations.len() - 1;
        &mut self.expectations[last]
    }

    pub fn has_expectations(&self) -> bool {
        !self.expectations.is_empty()
    }

    pub fn expectations(&self) -> &[Expectation<A, R>] {
        &self.expectations
    }

    /// Every call received, covered or not.
    pub fn calls(&self) -> &CallLog<A> {
        &self.log
    }

    pub fn call_count(&self) -> usize {
        self.log.len()
    }

    /// Calls that matched an expectation.
    pub fn matched_count(&self) -> usize {
        self.matched.get()
    }

    /// Warnings emitted for uninteresting calls under [`Strictness::Naggy`].
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    /// Check every expectation as if the test ended now.
    ///
    /// Pending expectations count as unsatisfied.
    pub fn verify(&self) -> Result<(), VerificationError> {
        let mut violations: Vec<Violation> = self
            .expectations
            .iter()
            .flat_map(Expectation::violations)
            .collect();
        violations.extend(self.uninteresting.borrow().iter().cloned());

        if violations.is_empty() {
            Ok(())
        } else {
            Err(VerificationError { violations })
        }
    }

    /// Verify, then forget all expectations and recorded failures.
    ///
    /// Default actions and the call log are kept.
    pub fn checkpoint(&mut self) -> Result<(), VerificationError> {
        let result = self.verify();
        for expectation in &self.expectations {
            expectation.retire();
        }
        self.expectations.clear();
        self.uninteresting.borrow_mut().clear();
        result
    }

    fn default_value(&self, args: &A) -> R {
        self.defaults
            .iter()
            .rev()
            .filter(|d| d.matcher.matches(args))
            .find_map(|d| d.action.as_ref())
            .map(|action| action(args))
            .unwrap_or_else(|| (self.fallback)(args))
    }

    fn select(&self, args: &A) -> Option<&Expectation<A, R>> {
        let mut last_match = None;
        for expectation in &self.expectations {
            if !expectation.matcher.matches(args) {
                continue;
            }
            if !expectation.progress.is_satisfied() {
                return Some(expectation);
            }
            last_match = Some(expectation);
        }
        last_match
    }
}

impl<A: fmt::Debug, R> MockMethod<A, R> {
    /// Handle one call from the system under test.
    pub fn invoke(&self, args: A) -> R {
        let result = match self.select(&args) {
            Some(expectation) => {
                if let Some((sequence, index)) = &expectation.sequence {
                    let pending = sequence.pending_before(*index);
                    if !pending.is_empty() {
                        tracing::debug!(
                            "{}({:?}) called before {}",
                            self.name,
                            args,
                            pending.join(", ")
                        );
                        expectation.out_of_order.borrow_mut().push(pending);
                    }
                }
                let progress = &expectation.progress;
                progress.calls.set(progress.calls.get() + 1);
                self.matched.set(self.matched.get() + 1);
                tracing::trace!("{}({:?}) matched {}", self.name, args, progress.label);

                match &expectation.action {
                    Some(action) => action(&args),
                    None => self.default_value(&args),
                }
            }
            None => {
                self.uninteresting_call(&args);
                self.default_value(&args)
            }
        };

        self.log.record(args);
        result
    }

    fn uninteresting_call(&self, args: &A) {
        match self.strictness {
            Strictness::Naggy => {
                let message = format!(
                    "uninteresting mock function call - returning default value: {}({:?})",
                    self.name, args
                );
                tracing::warn!("{}", message);
                self.warnings.borrow_mut().push(message);
            }
            Strictness::Nice => {
                tracing::trace!("uninteresting call {}({:?}) ignored", self.name, args);
            }
            Strictness::Strict => {
                tracing::debug!("uninteresting call {}({:?}) on strict mock", self.name, args);
                self.uninteresting.borrow_mut().push(Violation::Uninteresting {
                    method: self.name,
                    args: format!("{:?}", args),
                });
            }
        }
    }
}

impl<A, R> Drop for MockMethod<A, R> {
    // Unverified mocks must fail the test that owns them.
    #[allow(clippy::panic)]
    fn drop(&mut self) {
        if std::thread::panicking() {
            return;
        }
        if let Err(err) = self.verify() {
            panic!("{}", err);
        }
    }
}

#[cfg(test)]
#[path = "mock_tests.rs"]
mod tests;
