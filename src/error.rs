use thiserror::Error;

/// An invalid simulation parameter, rejected before any day is simulated.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ParameterError {
    /// The campaign must run for at least one day.
    #[error("number of days must be positive, got {0}")]
    NonPositiveDays(i64),

    /// The mean inter-arrival time feeds the inverse-CDF transform and must
    /// be positive.
    #[error("mean inter-arrival time must be positive, got {0}")]
    NonPositiveArrivalMean(f64),

    /// The mean service time feeds the inverse-CDF transform and must be
    /// positive.
    #[error("mean service time must be positive, got {0}")]
    NonPositiveServiceMean(f64),
}
