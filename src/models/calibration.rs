//! Calibration metrics for a model evaluated on a held-out hospital
//!
//! The observed event rate is derived from the two counts rather than stored
//! redundantly, so the rate and the counts cannot drift apart.

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};

/// External-validation metrics for a predictive model at one site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationMetrics {
    /// Area under the ROC curve
    pub auc: f64,
    /// Calibration-in-the-large bias: mean predicted minus observed rate
    pub citl_bias: f64,
    /// Calibration slope; 1.0 is ideal
    pub slope: f64,
    /// Number of observed positive cases
    pub positive_cases: u64,
    /// Total number of patients at the site
    pub total_patients: u64,
}

impl CalibrationMetrics {
    /// Create a metrics record, validating counts and finiteness
    pub fn new(
        auc: f64,
        citl_bias: f64,
        slope: f64,
        positive_cases: u64,
        total_patients: u64,
    ) -> Result<Self> {
        for (name, value) in [("AUC", auc), ("CITL bias", citl_bias), ("slope", slope)] {
            if !value.is_finite() {
                return Err(EvalError::NonFiniteMetric { name, value });
            }
        }
        if total_patients == 0 {
            return Err(EvalError::ZeroTotalPatients);
        }
        if positive_cases > total_patients {
            return Err(EvalError::PositiveCasesExceedTotal {
                positive: positive_cases,
                total: total_patients,
            });
        }
        Ok(Self {
            auc,
            citl_bias,
            slope,
            positive_cases,
            total_patients,
        })
    }

    /// Observed event rate: positive cases over total patients
    #[must_use]
    pub fn observed_rate(&self) -> f64 {
        self.positive_cases as f64 / self.total_patients as f64
    }
}
