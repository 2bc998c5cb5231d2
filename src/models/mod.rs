//! Typed input rows for the three scenarios
//!
//! Each scenario has its own tiny, scenario-specific table. The fixtures are
//! explicit typed values injected into the scenario runners, so the same
//! computation functions can be exercised with generated inputs in tests.

pub mod calibration;
pub mod cohort;
pub mod vitals;

pub use calibration::CalibrationMetrics;
pub use cohort::PatientRecord;
pub use vitals::{VitalSample, VitalSeries};
