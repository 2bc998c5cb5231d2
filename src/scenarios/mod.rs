//! Scenario orchestration
//!
//! Each scenario runs the same four stages: build the fixture, derive the new
//! columns, assemble and print the report table, and persist it with a
//! metadata header. The runners take the time source and output path as
//! parameters so tests can pin the timestamp and redirect the file.

pub mod scenario_a;
pub mod scenario_b;
pub mod scenario_c;

use crate::report::{ReportMetadata, ReportTable};
use std::path::PathBuf;

/// The assembled output of one scenario run, returned for inspection
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    /// The metadata header that was written
    pub metadata: ReportMetadata,
    /// The derived report table
    pub table: ReportTable,
    /// Where the results file was written
    pub output_path: PathBuf,
}
