//! # Add Two Numbers Demo
//!
//! The smallest complete action: named inputs, a validation pass that
//! rejects non-numeric input at construction time, and an outcome that is
//! only visible inside the continuation.

use anyhow::Result;
use ugly_core::{make, Action, Outcome, Validation};

// ============================================================================
// Action (named inputs)
// ============================================================================

/// Adds two raw string inputs, as they might arrive from a form or CLI.
struct AddTwoNumbers {
    a: String,
    b: String,
}

// ============================================================================
// Outcome
// ============================================================================

#[derive(Debug)]
struct Added {
    sum: f64,
}

impl Outcome for Added {}

// ============================================================================
// Contract
// ============================================================================

impl Action for AddTwoNumbers {
    type Outcome = Added;

    fn validate(&self) -> Validation {
        Validation::new()
            .check_with(self.a.parse::<f64>().is_ok(), || {
                format!("a must be numeric, got {:?}", self.a)
            })
            .check_with(self.b.parse::<f64>().is_ok(), || {
                format!("b must be numeric, got {:?}", self.b)
            })
    }

    fn invoke(&mut self) -> Result<Added> {
        let a: f64 = self.a.parse()?;
        let b: f64 = self.b.parse()?;
        Ok(Added { sum: a + b })
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    // Happy path: the sum exists only inside the continuation.
    let mut add = make(AddTwoNumbers {
        a: "1".to_string(),
        b: "2".to_string(),
    })?;
    add.call_with(|added| println!("1 + 2 = {}", added.sum))?;

    // Inputs can come from anywhere; here, the command line.
    let mut args = std::env::args().skip(1);
    if let (Some(a), Some(b)) = (args.next(), args.next()) {
        match make(AddTwoNumbers {
            a: a.clone(),
            b: b.clone(),
        }) {
            Ok(mut add) => add.call_with(|added| println!("{a} + {b} = {}", added.sum))?,
            Err(err) => println!("rejected: {err}"),
        }
    }

    // Failed construction: every failed check's message, joined, in order.
    match make(AddTwoNumbers {
        a: "x".to_string(),
        b: "two".to_string(),
    }) {
        Ok(_) => unreachable!("non-numeric input must fail construction"),
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
