//! Error handling for the ICU evaluation scenarios.

/// Specialized error type for scenario computation and reporting
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// A vital-sign series was constructed without any samples
    #[error("Vital series is empty: at least one sample is required")]
    EmptySeries,

    /// A timestamp in a vital-sign series was NaN or infinite
    #[error("Timestamp at row {index} is not finite: {value}")]
    NonFiniteTimestamp { index: usize, value: f64 },

    /// Timestamps in a vital-sign series were not strictly increasing
    #[error(
        "Timestamps must be strictly increasing: row {index} has {current} after {previous}"
    )]
    NonMonotonicTimestamps {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// A propensity score was outside the open interval (0, 1)
    #[error(
        "Propensity score for patient {patient_id} must lie strictly in (0, 1), got {value}"
    )]
    PropensityOutOfRange { patient_id: u32, value: f64 },

    /// The marginal treatment probability was outside the open interval (0, 1)
    #[error("Marginal treatment probability must lie strictly in (0, 1), got {0}")]
    MarginalOutOfRange(f64),

    /// A calibration metric was NaN or infinite
    #[error("Calibration metric {name} is not finite: {value}")]
    NonFiniteMetric { name: &'static str, value: f64 },

    /// Observed rate is undefined for an empty population
    #[error("Total patient count must be positive to compute an observed rate")]
    ZeroTotalPatients,

    /// The positive-case count exceeded the population size
    #[error("Positive cases ({positive}) exceed total patients ({total})")]
    PositiveCasesExceedTotal { positive: u64, total: u64 },

    /// A report row did not match the table's column count
    #[error("Report row has {actual} cells but the table has {expected} columns")]
    RowArityMismatch { expected: usize, actual: usize },

    /// The embedded slope-band catalog lacks an entry for a slope relation
    #[error("Slope-band catalog has no {0} band")]
    MissingSlopeBand(&'static str),

    /// Error parsing the embedded slope-band catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),

    /// Error creating the output directory or writing a results file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scenario operations
pub type Result<T> = std::result::Result<T, EvalError>;
