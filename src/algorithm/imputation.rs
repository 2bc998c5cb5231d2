//! LOCF imputation and the time-since-last-observation feature
//!
//! Both passes run forward over a validated [`VitalSeries`] in O(n). The TSLO
//! anchor is the most recent row whose value was *actually observed*; carrying
//! a value forward does not move the anchor. Rows before the first observation
//! have no anchor, so both the imputed value and the TSLO stay `None` there.

use crate::models::VitalSeries;

/// One row of the augmented Scenario A table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedVitalRow {
    /// Time of the row, in hours
    pub time_hours: f64,
    /// The raw measurement, kept so the imputation is auditable
    pub raw: Option<f64>,
    /// The measurement after LOCF; `None` only before the first observation
    pub imputed: Option<f64>,
    /// Hours since the most recent true observation; 0.0 at observed rows
    pub tslo_hours: Option<f64>,
}

/// Replace each missing measurement with the most recent preceding
/// observation. A missing value with no preceding observation stays missing.
#[must_use]
pub fn impute_locf(series: &VitalSeries) -> Vec<Option<f64>> {
    let mut carried: Option<f64> = None;
    series
        .samples()
        .iter()
        .map(|sample| {
            if sample.heart_rate.is_some() {
                carried = sample.heart_rate;
            }
            carried
        })
        .collect()
}

/// For each row, hours elapsed since the most recent truly observed row at or
/// before it; 0.0 at an observed row, `None` before the first observation.
#[must_use]
pub fn time_since_last_observation(series: &VitalSeries) -> Vec<Option<f64>> {
    let mut last_observed_at: Option<f64> = None;
    series
        .samples()
        .iter()
        .map(|sample| {
            if sample.heart_rate.is_some() {
                last_observed_at = Some(sample.time_hours);
            }
            last_observed_at.map(|anchor| sample.time_hours - anchor)
        })
        .collect()
}

/// Run both derivations and zip them back onto the input rows
#[must_use]
pub fn derive_vital_features(series: &VitalSeries) -> Vec<DerivedVitalRow> {
    let imputed = impute_locf(series);
    let tslo = time_since_last_observation(series);

    series
        .samples()
        .iter()
        .zip(imputed)
        .zip(tslo)
        .map(|((sample, imputed), tslo_hours)| DerivedVitalRow {
            time_hours: sample.time_hours,
            raw: sample.heart_rate,
            imputed,
            tslo_hours,
        })
        .collect()
}
