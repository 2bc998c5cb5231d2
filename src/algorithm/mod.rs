//! Pure derivations for the three scenarios
//!
//! Everything in this module is a deterministic function of its typed inputs:
//! LOCF imputation and the TSLO feature (Scenario A), raw and stabilized
//! inverse-probability weights (Scenario B), and the calibration
//! back-calculation with its slope-band catalog (Scenario C).

pub mod calibration;
pub mod imputation;
pub mod weighting;

pub use calibration::{SlopeBand, SlopeBandCatalog, average_predicted_probability};
pub use imputation::{DerivedVitalRow, derive_vital_features, impute_locf, time_since_last_observation};
pub use weighting::{CohortWeights, MARGINAL_TREATMENT_PROBABILITY, PatientWeights, weight_cohort};
