//! # Ugly
//!
//! A uniform calling convention for side effects: validated construction,
//! one invocation entry point, and outcomes observable only inside a
//! caller-supplied continuation.
//!
//! ## Core Concepts
//!
//! Ugly separates **pure context** from **impure context**:
//! - [`Action`] = a declared unit of side-effecting work with named inputs
//! - [`Outcome`] = what one specific action reports back
//! - [`Unit`] = the canonical "nothing to report" sentinel
//!
//! The key principle: **every side effect wears the same shape**. An action
//! is a plain struct built from named fields, validated before it may run,
//! invoked at exactly one entry point - and whatever it reports is visible
//! only inside the continuation the caller hands over. Code outside the
//! continuation stays pure; code inside knows it is standing in the blast
//! radius of an effect.
//!
//! ## Architecture
//!
//! ```text
//! AddTwoNumbers { a, b }      (named inputs, plain struct)
//!     │
//!     ▼ make()
//! validate() ─► failures? ──► Err(ValidationError)  "a must be numeric; ..."
//!     │
//!     ▼ no failures
//! Ready<A>
//!     │
//!     ├─► call()            Outcome = Unit, no continuation involved
//!     ├─► call_with(k)      outcome delivered into k, exactly once
//!     ├─► try_call_with(k)  same, continuation may fail with ?
//!     └─► call_detached()   outcome produced and dropped (explicit sharp edge)
//!               │
//!               ▼
//!         invoke() - the one place effects happen
//! ```
//!
//! ## Key Invariants
//!
//! 1. **Failed validation never runs** - construction fails atomically with
//!    every failed check's message joined by `"; "`, in registration order
//! 2. **One entry point** - [`make`] is the only constructor of a usable
//!    action, the `call` family the only way to run one
//! 3. **Unit is not null** - it is a concrete singleton that inspects as an
//!    empty aggregate, so "no result" needs no nullable value
//! 4. **Outcomes are scoped** - a non-Unit outcome reaches exactly one
//!    continuation and nothing else; no return value carries it out
//! 5. **The framework is thin** - body and continuation errors propagate to
//!    the caller unmodified; there is no retry, wrapping, or suppression
//!
//! ## Example
//!
//! ```ignore
//! use ugly_core::{make, Action, Outcome, Validation};
//!
//! struct AddTwoNumbers {
//!     a: String,
//!     b: String,
//! }
//!
//! #[derive(Debug)]
//! struct Added {
//!     sum: f64,
//! }
//!
//! impl Outcome for Added {}
//!
//! impl Action for AddTwoNumbers {
//!     type Outcome = Added;
//!
//!     fn validate(&self) -> Validation {
//!         Validation::new()
//!             .check(self.a.parse::<f64>().is_ok(), "a must be numeric")
//!             .check(self.b.parse::<f64>().is_ok(), "b must be numeric")
//!     }
//!
//!     fn invoke(&mut self) -> anyhow::Result<Added> {
//!         let a: f64 = self.a.parse()?;
//!         let b: f64 = self.b.parse()?;
//!         Ok(Added { sum: a + b })
//!     }
//! }
//!
//! let mut add = make(AddTwoNumbers { a: "1".into(), b: "2".into() })?;
//! add.call_with(|added| println!("sum = {}", added.sum))?;
//! ```
//!
//! ## What This Is Not
//!
//! Ugly is **not**:
//! - A job runner or scheduler
//! - A retry or timeout engine
//! - An async framework - the `call` family blocks the calling thread
//! - A dependency-injection container - collaborators an action needs are
//!   plain fields the caller puts in
//!
//! Ugly **is**:
//! > A minimal runtime contract that turns an arbitrary side-effecting
//! > operation into a uniform, composable unit - and keeps its result from
//! > leaking into code that never asked to be impure.

// Core modules
mod action;
mod error;
mod outcome;
mod outcome_macro;
mod ready;
mod validate;


// Serde auto-serialization tests (test-only)
#[cfg(test)]
mod serde_auto_tests;


// Re-export the action contract
pub use crate::action::Action;

// Re-export outcome types
pub use crate::outcome::{Outcome, Unit};

// Re-export construction and invocation
pub use crate::ready::{make, Ready};

// Re-export validation types
pub use crate::validate::Validation;

// Re-export error types
pub use crate::error::ValidationError;
