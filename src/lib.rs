//! Worked ICU analytics examples: time-series feature derivation (LOCF +
//! TSLO), inverse-probability-of-treatment weighting, and calibration
//! back-calculation, each reported as an aligned console table and a CSV
//! file with a metadata header.

pub mod algorithm;
pub mod error;
pub mod models;
pub mod report;
pub mod scenarios;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use error::{EvalError, Result};
pub use models::{CalibrationMetrics, PatientRecord, VitalSample, VitalSeries};

// Report pipeline
pub use report::{CellValue, Column, ReportMetadata, ReportTable, write_report};

// Time source
pub use utils::{FixedClock, SystemClock, TimeSource};
