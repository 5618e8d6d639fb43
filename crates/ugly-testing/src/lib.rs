//! Testing utilities for the Ugly action protocol.
//!
//! Probes, capture sinks and an invocation log for asserting on what an
//! action's body and continuation actually did: how many times a
//! collaborator was hit, which outcome a continuation received, and in what
//! order bodies ran.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use ugly_core::{make, Action};

/// Shared hit counter standing in for an injected collaborator.
///
/// Clone it into an action's fields, `bump` it from the body, and assert on
/// `hits` afterwards - the cheapest way to prove a body ran exactly as many
/// times as it was called.
#[derive(Clone, Debug, Default)]
pub struct Probe {
    hits: Arc<Mutex<u64>>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one hit.
    pub fn bump(&self) {
        *self.hits.lock().unwrap() += 1;
    }

    /// How many times the probe was hit.
    pub fn hits(&self) -> u64 {
        *self.hits.lock().unwrap()
    }
}

/// Captures the outcome delivered to a continuation.
///
/// `sink()` hands out a continuation suitable for `call_with`; `take()`
/// retrieves whatever it was given. Deliveries are counted separately so a
/// test can assert "exactly once" without consuming the value.
#[derive(Debug, Default)]
pub struct Capture<T> {
    slot: Arc<Mutex<Option<T>>>,
    deliveries: Arc<Mutex<u64>>,
}

impl<T> Clone for Capture<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            deliveries: Arc::clone(&self.deliveries),
        }
    }
}

impl<T> Capture<T> {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            deliveries: Arc::new(Mutex::new(0)),
        }
    }

    /// Remove and return the captured outcome, if one arrived.
    pub fn take(&self) -> Option<T> {
        self.slot.lock().unwrap().take()
    }

    /// How many times the sink was invoked.
    pub fn deliveries(&self) -> u64 {
        *self.deliveries.lock().unwrap()
    }
}

impl<T: Send + 'static> Capture<T> {
    /// A continuation that stows its argument in this capture.
    pub fn sink(&self) -> impl FnOnce(T) + Send + 'static {
        let slot = Arc::clone(&self.slot);
        let deliveries = Arc::clone(&self.deliveries);
        move |outcome| {
            *deliveries.lock().unwrap() += 1;
            *slot.lock().unwrap() = Some(outcome);
        }
    }
}

/// One recorded invocation.
#[derive(Clone, Debug, Serialize)]
pub struct LogEntry {
    pub invocation: Uuid,
    pub action: String,
    pub at: DateTime<Utc>,
    pub outcome: Option<Value>,
}

/// Append-only record of invocations, written from inside action bodies.
///
/// Clone the log into each action under test and `record` from the bodies;
/// the entry order is the order the bodies actually ran.
#[derive(Clone, Debug, Default)]
pub struct InvocationLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl InvocationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning its correlation id.
    pub fn record(&self, action: &str, outcome: Option<Value>) -> Uuid {
        let invocation = Uuid::new_v4();
        self.entries.lock().unwrap().push(LogEntry {
            invocation,
            action: action.to_string(),
            at: Utc::now(),
            outcome,
        });
        invocation
    }

    /// Snapshot of the entries recorded so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

/// Run an action's construction path, returning the individual failure
/// messages - empty when construction succeeds.
///
/// Sugar for asserting on single messages instead of the joined string.
pub fn validation_failures<A: Action>(action: A) -> Vec<String> {
    match make(action) {
        Ok(_ready) => Vec::new(),
        Err(err) => err.failures().to_vec(),
    }
}
