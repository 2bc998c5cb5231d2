//! Inverse-probability-of-treatment weight computation
//!
//! Raw IPTW is the reciprocal of the conditional probability of the observed
//! treatment; the stabilized weight normalizes it by the marginal treatment
//! probability. The cohort sum of stabilized weights is a diagnostic scalar,
//! reported but never enforced against a target.

use crate::error::{EvalError, Result};
use crate::models::PatientRecord;

/// Assumed marginal probability of treatment, P(A=1)
pub const MARGINAL_TREATMENT_PROBABILITY: f64 = 0.5;

/// Derived weights for one patient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatientWeights {
    /// The input row the weights were derived from
    pub record: PatientRecord,
    /// P(A|L): g if treated, 1 - g otherwise
    pub conditional_probability: f64,
    /// Raw IPTW: 1 / P(A|L)
    pub raw_weight: f64,
    /// P(A): the marginal probability of the observed treatment arm
    pub marginal_probability: f64,
    /// Stabilized IPTW: P(A) / P(A|L)
    pub stabilized_weight: f64,
}

/// Per-patient weights plus the cohort diagnostic sum
#[derive(Debug, Clone, PartialEq)]
pub struct CohortWeights {
    /// One weight row per input patient, in input order
    pub rows: Vec<PatientWeights>,
    /// Sum of stabilized weights over the cohort
    pub stabilized_sum: f64,
}

/// P(A|L): the conditional probability of the treatment the patient received
#[must_use]
pub fn conditional_probability(record: &PatientRecord) -> f64 {
    if record.treated {
        record.propensity
    } else {
        1.0 - record.propensity
    }
}

/// Derive raw and stabilized weights for one patient.
///
/// The propensity score is re-checked here so that a record assembled without
/// [`PatientRecord::new`] still cannot put an infinity into a report.
pub fn compute_weights(record: &PatientRecord, marginal: f64) -> Result<PatientWeights> {
    if !marginal.is_finite() || marginal <= 0.0 || marginal >= 1.0 {
        return Err(EvalError::MarginalOutOfRange(marginal));
    }
    if !record.propensity.is_finite() || record.propensity <= 0.0 || record.propensity >= 1.0 {
        return Err(EvalError::PropensityOutOfRange {
            patient_id: record.patient_id,
            value: record.propensity,
        });
    }

    let conditional = conditional_probability(record);
    let marginal_probability = if record.treated { marginal } else { 1.0 - marginal };

    Ok(PatientWeights {
        record: *record,
        conditional_probability: conditional,
        raw_weight: 1.0 / conditional,
        marginal_probability,
        stabilized_weight: marginal_probability / conditional,
    })
}

/// Derive weights for every patient and the cohort sum of stabilized weights
pub fn weight_cohort(records: &[PatientRecord], marginal: f64) -> Result<CohortWeights> {
    let rows = records
        .iter()
        .map(|record| compute_weights(record, marginal))
        .collect::<Result<Vec<_>>>()?;
    let stabilized_sum = rows.iter().map(|row| row.stabilized_weight).sum();

    Ok(CohortWeights {
        rows,
        stabilized_sum,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cohort() -> Vec<PatientRecord> {
        vec![
            PatientRecord::new(1, true, 0.8).unwrap(),
            PatientRecord::new(2, true, 0.4).unwrap(),
            PatientRecord::new(3, false, 0.9).unwrap(),
            PatientRecord::new(4, false, 0.2).unwrap(),
        ]
    }

    #[test]
    fn test_worked_cohort_rows() {
        let weights = weight_cohort(&cohort(), MARGINAL_TREATMENT_PROBABILITY).unwrap();
        let expected = [
            (0.8, 1.25, 0.625),
            (0.4, 2.5, 1.25),
            (0.1, 10.0, 5.0),
            (0.8, 1.25, 0.625),
        ];
        for (row, (conditional, raw, stabilized)) in weights.rows.iter().zip(expected) {
            assert_relative_eq!(row.conditional_probability, conditional, max_relative = 1e-12);
            assert_relative_eq!(row.raw_weight, raw, max_relative = 1e-12);
            assert_relative_eq!(row.stabilized_weight, stabilized, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_worked_cohort_sum() {
        let weights = weight_cohort(&cohort(), MARGINAL_TREATMENT_PROBABILITY).unwrap();
        assert_relative_eq!(weights.stabilized_sum, 7.5, max_relative = 1e-12);
    }

    #[test]
    fn test_stabilized_equals_raw_times_marginal() {
        let weights = weight_cohort(&cohort(), MARGINAL_TREATMENT_PROBABILITY).unwrap();
        for row in &weights.rows {
            assert_relative_eq!(
                row.stabilized_weight,
                row.raw_weight * row.marginal_probability,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_stabilized_weights_are_positive() {
        let weights = weight_cohort(&cohort(), MARGINAL_TREATMENT_PROBABILITY).unwrap();
        assert!(weights.rows.iter().all(|row| row.stabilized_weight > 0.0));
    }

    #[test]
    fn test_boundary_propensity_rejected() {
        let record = PatientRecord {
            patient_id: 9,
            treated: true,
            propensity: 1.0,
        };
        assert!(matches!(
            compute_weights(&record, MARGINAL_TREATMENT_PROBABILITY),
            Err(EvalError::PropensityOutOfRange { patient_id: 9, .. })
        ));
    }

    #[test]
    fn test_marginal_out_of_range_rejected() {
        let record = PatientRecord::new(1, true, 0.8).unwrap();
        for marginal in [0.0, 1.0, f64::NAN] {
            assert!(matches!(
                compute_weights(&record, marginal),
                Err(EvalError::MarginalOutOfRange(_))
            ));
        }
    }
}
