//! # Report Writer Demo
//!
//! Two cooperating actions over the real filesystem: a Unit-returning writer
//! called without a continuation, and an outcome-returning tally whose
//! result is only visible inside one. Run with `RUST_LOG=debug` to watch
//! construction and invocation events.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use ugly_core::{auto_json, make, Action, Outcome, Unit, Validation};
use uuid::Uuid;

// ============================================================================
// Write Report (Unit - nothing to report back)
// ============================================================================

struct WriteReport {
    path: PathBuf,
    lines: Vec<String>,
}

impl Action for WriteReport {
    type Outcome = Unit;

    fn validate(&self) -> Validation {
        Validation::new()
            .check(!self.path.as_os_str().is_empty(), "path must not be empty")
            .check(
                !self.lines.is_empty(),
                "report must have at least one line",
            )
    }

    fn invoke(&mut self) -> Result<Unit> {
        let mut text = self.lines.join("\n");
        text.push('\n');
        fs::write(&self.path, text)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(Unit)
    }
}

// ============================================================================
// Tally Report (outcome delivered into the continuation)
// ============================================================================

struct TallyReport {
    path: PathBuf,
}

#[derive(Debug, Serialize)]
struct ReportTally {
    lines: usize,
    words: usize,
}

impl Outcome for ReportTally {
    auto_json!();
}

impl Action for TallyReport {
    type Outcome = ReportTally;

    fn validate(&self) -> Validation {
        Validation::new().check(!self.path.as_os_str().is_empty(), "path must not be empty")
    }

    fn invoke(&mut self) -> Result<ReportTally> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        Ok(ReportTally {
            lines: text.lines().count(),
            words: text.split_whitespace().count(),
        })
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::temp_dir().join(format!("report-{}.txt", Uuid::new_v4()));

    let mut write = make(WriteReport {
        path: path.clone(),
        lines: vec![
            "monday: two deploys, zero rollbacks".to_string(),
            "tuesday: one incident, resolved by lunch".to_string(),
        ],
    })?;
    write.call()?;
    println!("wrote {}", path.display());

    let mut tally = make(TallyReport { path: path.clone() })?;
    tally.call_with(|t| {
        println!("{} lines, {} words", t.lines, t.words);
        if let Some(json) = t.to_json() {
            println!("structured: {json}");
        }
    })?;

    fs::remove_file(&path).ok();
    Ok(())
}
