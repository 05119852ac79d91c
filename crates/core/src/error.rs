//! Error types for the fwi-core crate.

/// Error type for all fallible operations in the fwi-core crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FwiError {
    /// An input lies outside the range the equations are defined for.
    #[error("{input} = {value} is outside its valid range {range}")]
    OutOfDomain {
        /// Name of the offending input.
        input: &'static str,
        /// The rejected value.
        value: f64,
        /// Human readable valid range, e.g. `[0, 100]`.
        range: &'static str,
    },

    /// An input is NaN or infinite.
    #[error("{input} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending input.
        input: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Month outside 1..=12.
    #[error("month must be in 1..=12, got {month}")]
    InvalidMonth {
        /// The rejected month.
        month: u8,
    },

    /// Hourly time step that is zero, negative or non-finite.
    #[error("time step must be finite and positive, got {hours} h")]
    InvalidTimeStep {
        /// The rejected step length in hours.
        hours: f64,
    },

    /// Danger thresholds were built from an empty band list.
    #[error("danger thresholds need at least one band")]
    EmptyThresholds,

    /// A danger band minimum is negative or non-finite.
    #[error("danger band minimum must be finite and non-negative, got {minimum}")]
    InvalidThreshold {
        /// The rejected minimum FWI.
        minimum: f64,
    },

    /// Danger band minimums are not strictly ascending.
    #[error("danger band minimums must be strictly ascending, {previous} is followed by {next}")]
    UnorderedThresholds {
        /// Minimum of the earlier band.
        previous: f64,
        /// Minimum of the band that follows it.
        next: f64,
    },

    /// An observation inside a time series was rejected.
    #[error("observation {index} rejected: {source}")]
    SeriesObservation {
        /// Zero-based position of the observation in the series.
        index: usize,
        /// Why the observation was rejected.
        #[source]
        source: Box<FwiError>,
    },
}

impl FwiError {
    /// True for the input-domain family of errors (out of range, non-finite, bad month).
    ///
    /// Errors wrapped in [`FwiError::SeriesObservation`] are inspected recursively.
    pub fn is_domain_error(&self) -> bool {
        match self {
            Self::OutOfDomain { .. } | Self::NonFinite { .. } | Self::InvalidMonth { .. } => true,
            Self::SeriesObservation { source, .. } => source.is_domain_error(),
            _ => false,
        }
    }

    pub(crate) fn at_index(self, index: usize) -> Self {
        Self::SeriesObservation {
            index,
            source: Box::new(self),
        }
    }
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, FwiError>;

/// Reject NaN and infinities.
pub(crate) fn check_finite(input: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FwiError::NonFinite { input, value })
    }
}

/// Reject values outside `[min, max]` (inclusive). `range` is the label used in the message.
pub(crate) fn check_range(
    input: &'static str,
    value: f64,
    min: f64,
    max: f64,
    range: &'static str,
) -> Result<f64> {
    let value = check_finite(input, value)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(FwiError::OutOfDomain {
            input,
            value,
            range,
        })
    }
}

/// Reject negative values.
pub(crate) fn check_non_negative(input: &'static str, value: f64) -> Result<f64> {
    check_range(input, value, 0.0, f64::INFINITY, "[0, inf)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_out_of_domain() {
        let e = FwiError::OutOfDomain {
            input: "relative_humidity",
            value: 150.0,
            range: "[0, 100]",
        };
        assert_eq!(
            e.to_string(),
            "relative_humidity = 150 is outside its valid range [0, 100]"
        );
    }

    #[test]
    fn error_invalid_month() {
        let e = FwiError::InvalidMonth { month: 13 };
        assert_eq!(e.to_string(), "month must be in 1..=12, got 13");
    }

    #[test]
    fn error_series_observation_wraps_source() {
        let e = FwiError::InvalidMonth { month: 0 }.at_index(4);
        assert_eq!(
            e.to_string(),
            "observation 4 rejected: month must be in 1..=12, got 0"
        );
        assert!(e.is_domain_error());
    }

    #[test]
    fn threshold_errors_are_not_domain_errors() {
        assert!(!FwiError::EmptyThresholds.is_domain_error());
        assert!(!FwiError::InvalidTimeStep { hours: 0.0 }.is_domain_error());
    }

    #[test]
    fn check_range_accepts_bounds() {
        assert_eq!(check_range("rh", 0.0, 0.0, 100.0, "[0, 100]"), Ok(0.0));
        assert_eq!(check_range("rh", 100.0, 0.0, 100.0, "[0, 100]"), Ok(100.0));
    }

    #[test]
    fn check_range_rejects_nan_as_non_finite() {
        assert!(matches!(
            check_range("rh", f64::NAN, 0.0, 100.0, "[0, 100]"),
            Err(FwiError::NonFinite { input: "rh", .. })
        ));
    }

    #[test]
    fn check_non_negative_rejects_negative_zero_crossing() {
        assert!(check_non_negative("precipitation", -1e-12).is_err());
        assert!(check_non_negative("precipitation", 0.0).is_ok());
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<FwiError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<FwiError>();
    }
}
