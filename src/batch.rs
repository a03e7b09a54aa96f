//! Batch build: every namespace, every unit, all failures collected
//!
//! One bad definition never blocks its siblings. The report carries
//! both halves of the outcome so callers decide rendering and exit
//! codes; nothing in here prints or exits.

use std::path::Path;

use serde::Serialize;

use crate::builder;
use crate::error::{BuildError, ConveyorResult};
use crate::locator;
use crate::models::BuiltUnit;

/// Outcome of one batch run over the whole source tree
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Units built, in discovery order
    pub built: Vec<BuiltUnit>,

    /// Failed units with their causes, in discovery order
    pub errors: Vec<BuildError>,
}

impl BuildReport {
    /// True when every discovered unit built cleanly
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Artifact files written (two per built unit)
    pub fn artifacts_written(&self) -> usize {
        self.built.len() * 2
    }

    /// Single-line JSON rendering for `--json` output
    pub fn to_json(&self) -> String {
        let event = ReportEvent {
            event: "build_report",
            built: self.built.len(),
            artifacts: self.artifacts_written(),
            errors: self
                .errors
                .iter()
                .map(|e| ReportError {
                    unit: e.unit.to_string(),
                    message: e.cause.to_string(),
                })
                .collect(),
        };
        serde_json::to_string(&event).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Debug, Serialize)]
struct ReportEvent {
    event: &'static str,
    built: usize,
    artifacts: usize,
    errors: Vec<ReportError>,
}

#[derive(Debug, Serialize)]
struct ReportError {
    unit: String,
    message: String,
}

/// Discover and build every unit under the source root.
///
/// Only discovery itself can fail; individual build failures land in
/// the report and the run continues with the remaining units.
pub fn run_all(source_root: &Path, output_root: &Path) -> ConveyorResult<BuildReport> {
    let units = locator::discover_units(source_root)?;

    let mut report = BuildReport::default();
    for unit in &units {
        match builder::build_unit(source_root, output_root, unit) {
            Ok(Some(built)) => report.built.push(built),
            Ok(None) => {}
            Err(err) => report.errors.push(err),
        }
    }
    Ok(report)
}
