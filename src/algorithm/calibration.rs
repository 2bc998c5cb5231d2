//! Calibration back-calculation and the slope-band catalog
//!
//! The numeric content of Scenario C is a single rearrangement of the CITL
//! definition. The interpretive prose is catalog content, not logic: a static
//! table maps slope bands (relative to the ideal slope of 1.0) to a verdict
//! and a clinical-implication text, and the arithmetic never touches it.

use crate::error::{EvalError, Result};
use crate::models::CalibrationMetrics;
use serde::Deserialize;
use std::cmp::Ordering;

const EMBEDDED_CATALOG: &str = include_str!("slope_bands.json");

/// Where a slope sits relative to the ideal slope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlopeRelation {
    /// Slope below ideal: overly extreme predictions (over-fitting)
    Below,
    /// Slope exactly at ideal
    Ideal,
    /// Slope above ideal: overly conservative predictions (under-fitting)
    Above,
}

/// One catalog entry: fixed prose for a slope band
#[derive(Debug, Clone, Deserialize)]
pub struct SlopeBand {
    /// Band position relative to the ideal slope
    pub relation: SlopeRelation,
    /// Short refinement verdict
    pub verdict: String,
    /// Full interpretation text for the slope metric row
    pub interpretation: String,
    /// Clinical-implication text for individual-patient decision-making
    pub clinical_implication: String,
}

/// The static slope-band catalog, embedded as JSON at compile time
#[derive(Debug, Clone, Deserialize)]
pub struct SlopeBandCatalog {
    ideal_slope: f64,
    bands: Vec<SlopeBand>,
}

impl SlopeBandCatalog {
    /// Parse the embedded catalog
    pub fn embedded() -> Result<Self> {
        let catalog: Self = serde_json::from_str(EMBEDDED_CATALOG)?;
        Ok(catalog)
    }

    /// The slope value considered ideal
    #[must_use]
    pub fn ideal_slope(&self) -> f64 {
        self.ideal_slope
    }

    /// Look up the band for a finite slope value
    pub fn band_for(&self, slope: f64) -> Result<&SlopeBand> {
        // Slope finiteness is validated when the metrics are constructed, so
        // partial_cmp only fails for a NaN smuggled in via a struct literal.
        let relation = match slope.partial_cmp(&self.ideal_slope) {
            Some(Ordering::Less) => SlopeRelation::Below,
            Some(Ordering::Equal) => SlopeRelation::Ideal,
            Some(Ordering::Greater) => SlopeRelation::Above,
            None => {
                return Err(EvalError::NonFiniteMetric {
                    name: "slope",
                    value: slope,
                });
            }
        };
        self.bands
            .iter()
            .find(|band| band.relation == relation)
            .ok_or(EvalError::MissingSlopeBand(match relation {
                SlopeRelation::Below => "below-ideal",
                SlopeRelation::Ideal => "ideal",
                SlopeRelation::Above => "above-ideal",
            }))
    }
}

/// Recover the average predicted probability from the CITL definition:
/// CITL = average predicted - observed rate, so the average predicted
/// probability is the bias plus the observed rate.
#[must_use]
pub fn average_predicted_probability(metrics: &CalibrationMetrics) -> f64 {
    metrics.citl_bias + metrics.observed_rate()
}
