//! Tests for automatic serde serialization of outcomes.
//!
//! These tests demonstrate the desired behavior: an outcome should only need
//! #[derive(Serialize)] and the auto_json!() macro to show up structured in
//! logs, and Unit should read and write as the empty mapping.

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::{auto_json, Outcome, Unit};

// ============================================================================
// Test Outcomes - Using ONLY serde derives, NO manual to_json()
// ============================================================================

#[derive(Debug, Serialize)]
struct ReportStored {
    report_id: Uuid,
    bytes: usize,
}

impl Outcome for ReportStored {
    // Just one line instead of a manual implementation!
    auto_json!();
}

/// An outcome that opts out of serialization entirely.
#[derive(Debug)]
struct RawHandle {
    #[allow(dead_code)]
    fd: i32,
}

impl Outcome for RawHandle {}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_outcome_auto_serializes() {
    let report_id = Uuid::new_v4();
    let outcome = ReportStored {
        report_id,
        bytes: 2048,
    };

    let payload = outcome.to_json().unwrap();

    assert_eq!(payload["report_id"], report_id.to_string());
    assert_eq!(payload["bytes"], 2048);
}

#[test]
fn test_outcome_without_serialize_reports_none() {
    let outcome = RawHandle { fd: 3 };

    assert!(outcome.to_json().is_none());
}

#[test]
fn test_is_unit_is_a_static_property() {
    assert!(<Unit as Outcome>::IS_UNIT);
    assert!(!<ReportStored as Outcome>::IS_UNIT);
    assert!(!<RawHandle as Outcome>::IS_UNIT);
}

#[test]
fn test_unit_serializes_as_empty_map() {
    assert_eq!(serde_json::to_value(Unit).unwrap(), json!({}));
    assert_eq!(Unit.to_json(), Some(json!({})));
}

#[test]
fn test_unit_deserializes_from_empty_shapes() {
    assert_eq!(serde_json::from_value::<Unit>(json!({})).unwrap(), Unit);
    assert_eq!(serde_json::from_value::<Unit>(json!(null)).unwrap(), Unit);
    assert_eq!(serde_json::from_value::<Unit>(json!([])).unwrap(), Unit);
}

#[test]
fn test_unit_rejects_populated_values() {
    assert!(serde_json::from_value::<Unit>(json!({ "a": 1 })).is_err());
    assert!(serde_json::from_value::<Unit>(json!([1])).is_err());
    assert!(serde_json::from_value::<Unit>(json!(42)).is_err());
    assert!(serde_json::from_value::<Unit>(json!("unit")).is_err());
}

#[test]
fn test_unit_round_trips() {
    let json = serde_json::to_value(Unit).unwrap();
    let back: Unit = serde_json::from_value(json).unwrap();

    assert_eq!(back, Unit);
}
