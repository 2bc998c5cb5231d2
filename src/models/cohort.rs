//! Patient cohort model for the weighting scenario
//!
//! A patient row carries the observed treatment status and the estimated
//! propensity score. Scores are validated on construction: a score at the
//! boundary {0, 1} would make the inverse weight a division by zero, so it
//! must fail here rather than surface as infinity in a report.

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};

/// A patient with observed treatment status and estimated propensity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Patient identifier
    pub patient_id: u32,
    /// Whether the patient received the treatment (A = 1)
    pub treated: bool,
    /// Estimated propensity score g = P(A=1 | L), strictly in (0, 1)
    pub propensity: f64,
}

impl PatientRecord {
    /// Create a patient record, validating the propensity score
    pub fn new(patient_id: u32, treated: bool, propensity: f64) -> Result<Self> {
        if !propensity.is_finite() || propensity <= 0.0 || propensity >= 1.0 {
            return Err(EvalError::PropensityOutOfRange {
                patient_id,
                value: propensity,
            });
        }
        Ok(Self {
            patient_id,
            treated,
            propensity,
        })
    }
}
