//! Macros for reducing outcome boilerplate.

/// Auto-implement `to_json()` for outcomes that derive `Serialize`.
///
/// Use this inside your `Outcome` impl block as a one-liner replacement for
/// manual serialization code.
///
/// # Example
///
/// ```ignore
/// use ugly_core::{auto_json, Outcome};
/// use serde::Serialize;
///
/// #[derive(Debug, Serialize)]
/// struct ReportStored {
///     report_id: Uuid,
///     bytes: usize,
/// }
///
/// impl Outcome for ReportStored {
///     auto_json!(); // One line instead of a whole method!
/// }
/// ```
#[macro_export]
macro_rules! auto_json {
    () => {
        fn to_json(&self) -> Option<serde_json::Value> {
            serde_json::to_value(self).ok()
        }
    };
}
