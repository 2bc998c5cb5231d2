//! Vital-sign time series model
//!
//! This module contains the sample and series types for Scenario A. A series
//! is validated on construction: timestamps must be finite and strictly
//! increasing, since both the imputation pass and the TSLO feature assume a
//! well-ordered timeline.

use crate::error::{EvalError, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A single (time, measurement) pair from an irregularly sampled vital sign
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSample {
    /// Time of the row, in hours from the start of the recording
    pub time_hours: f64,
    /// Measured heart rate, or `None` when the measurement is missing
    pub heart_rate: Option<f64>,
}

impl VitalSample {
    /// Create an observed sample
    #[must_use]
    pub fn observed(time_hours: f64, heart_rate: f64) -> Self {
        Self {
            time_hours,
            heart_rate: Some(heart_rate),
        }
    }

    /// Create a sample with a missing measurement
    #[must_use]
    pub fn missing(time_hours: f64) -> Self {
        Self {
            time_hours,
            heart_rate: None,
        }
    }
}

/// An ordered vital-sign series with validated timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct VitalSeries {
    samples: Vec<VitalSample>,
}

impl VitalSeries {
    /// Create a series, validating that it is non-empty and that timestamps
    /// are finite and strictly increasing.
    pub fn new(samples: Vec<VitalSample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(EvalError::EmptySeries);
        }

        for (index, sample) in samples.iter().enumerate() {
            if !sample.time_hours.is_finite() {
                return Err(EvalError::NonFiniteTimestamp {
                    index,
                    value: sample.time_hours,
                });
            }
        }

        // Equal timestamps are rejected too: they give the forward fill and
        // the TSLO anchor no defined order.
        for (index, (previous, current)) in samples.iter().tuple_windows().enumerate() {
            if current.time_hours <= previous.time_hours {
                return Err(EvalError::NonMonotonicTimestamps {
                    index: index + 1,
                    previous: previous.time_hours,
                    current: current.time_hours,
                });
            }
        }

        Ok(Self { samples })
    }

    /// The validated samples, in time order
    #[must_use]
    pub fn samples(&self) -> &[VitalSample] {
        &self.samples
    }

    /// Number of rows in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no rows (never true for a validated series)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
