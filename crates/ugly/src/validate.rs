//! The construction-time validation pass.
//!
//! A validation pass is a pure function over an action's stored inputs: it
//! may look at them and at nothing else. No I/O, no clock reads, no writes
//! to collaborators - checks are limited to structural properties of the
//! inputs (presence, type, non-emptiness). That discipline is a documented
//! contract, not a runtime check; the tests pin the observable half of it
//! (same inputs, same failures, every time).

use smallvec::SmallVec;

use crate::error::ValidationError;

/// Ordered collection of failed checks, built by a validation pass.
///
/// Each failed [`check`](Validation::check) appends one human-readable
/// message; the order messages are appended is the order they surface in
/// the aggregated [`ValidationError`].
#[derive(Debug, Default)]
pub struct Validation {
    failures: SmallVec<[String; 4]>,
}

impl Validation {
    /// A pass with no checks recorded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one check. When `ok` is false, `message` is appended to the
    /// failure list.
    #[must_use]
    pub fn check(mut self, ok: bool, message: impl Into<String>) -> Self {
        if !ok {
            self.failures.push(message.into());
        }
        self
    }

    /// Like [`check`](Validation::check), but the message is only built on
    /// failure. Use this when the message formats the offending input.
    #[must_use]
    pub fn check_with(mut self, ok: bool, message: impl FnOnce() -> String) -> Self {
        if !ok {
            self.failures.push(message());
        }
        self
    }

    /// True when no check has failed.
    pub fn is_passing(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failed checks' messages, in registration order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Collapse the pass: `Ok(())` when everything passed, otherwise the
    /// aggregated [`ValidationError`].
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(self.failures.into_vec()))
        }
    }
}
