//! Error types.
//!
//! The framework owns exactly one error: [`ValidationError`], raised when a
//! construction attempt fails its checks. Everything raised inside an
//! action's body or a continuation passes through to the caller unmodified -
//! no wrapping, no retries, no suppression.

use thiserror::Error;

/// Aggregated construction failure.
///
/// Carries every failed check's message, in check-registration order. The
/// display form joins them with `"; "`. No partially-constructed action
/// exists once this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", .failures.join("; "))]
pub struct ValidationError {
    failures: Vec<String>,
}

impl ValidationError {
    pub(crate) fn new(failures: Vec<String>) -> Self {
        Self { failures }
    }

    /// The individual failure messages, in registration order.
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// The messages joined with `"; "`, as they appear in the display form.
    pub fn joined(&self) -> String {
        self.failures.join("; ")
    }
}
