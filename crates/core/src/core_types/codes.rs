//! Moisture codes carried between days and the indices derived from them

use crate::error::{check_non_negative, check_range, Result};
use serde::{Deserialize, Serialize};

/// Conventional upper bound of the fine fuel moisture code.
pub const FFMC_MAX: f64 = 101.0;

/// The three moisture codes a station carries from one day to the next.
///
/// Day N's state is a pure function of day N-1's state and day N's weather. The caller owns one
/// instance per station and replaces it with the state returned by each pipeline call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireCodeState {
    /// Fine Fuel Moisture Code, `[0, 101]`.
    pub ffmc: f64,
    /// Duff Moisture Code, `>= 0`.
    pub dmc: f64,
    /// Drought Code, `>= 0`.
    pub dc: f64,
}

impl FireCodeState {
    /// Conventional start-up values for the first day of the fire season.
    pub const STARTUP: FireCodeState = FireCodeState {
        ffmc: 85.0,
        dmc: 6.0,
        dc: 15.0,
    };

    /// Create a state from explicit codes.
    #[must_use]
    pub const fn new(ffmc: f64, dmc: f64, dc: f64) -> Self {
        FireCodeState { ffmc, dmc, dc }
    }

    /// Check that every code lies in its domain.
    ///
    /// # Errors
    /// [`crate::FwiError::NonFinite`] or [`crate::FwiError::OutOfDomain`] for the first bad code.
    pub fn validate(&self) -> Result<()> {
        check_ffmc(self.ffmc)?;
        check_non_negative("dmc", self.dmc)?;
        check_non_negative("dc", self.dc)?;
        Ok(())
    }
}

impl Default for FireCodeState {
    fn default() -> Self {
        Self::STARTUP
    }
}

pub(crate) fn check_ffmc(ffmc: f64) -> Result<f64> {
    check_range("ffmc", ffmc, 0.0, FFMC_MAX, "[0, 101]")
}

/// Indices recomputed from scratch every day; never carried forward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedIndices {
    /// Initial Spread Index.
    pub isi: f64,
    /// Buildup Index.
    pub bui: f64,
    /// Fire Weather Index.
    pub fwi: f64,
    /// Daily Severity Rating.
    pub dsr: f64,
}

/// Output of one pipeline call: the new codes to carry forward plus today's indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyResult {
    /// Today's codes; pass these as yesterday's on the next call.
    pub state: FireCodeState,
    /// Today's derived indices.
    pub indices: DerivedIndices,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FwiError;

    #[test]
    fn test_default_is_startup() {
        let state = FireCodeState::default();
        assert_eq!(state.ffmc, 85.0);
        assert_eq!(state.dmc, 6.0);
        assert_eq!(state.dc, 15.0);
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(FireCodeState::new(0.0, 0.0, 0.0).validate().is_ok());
        assert!(FireCodeState::new(101.0, 400.0, 900.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_ffmc_above_101() {
        let err = FireCodeState::new(101.5, 6.0, 15.0).validate().unwrap_err();
        assert!(matches!(err, FwiError::OutOfDomain { input: "ffmc", .. }));
    }

    #[test]
    fn test_validate_rejects_negative_codes() {
        assert!(FireCodeState::new(85.0, -1.0, 15.0).validate().is_err());
        assert!(FireCodeState::new(85.0, 6.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let json = serde_json::to_string(&FireCodeState::STARTUP).unwrap();
        assert_eq!(json, r#"{"ffmc":85.0,"dmc":6.0,"dc":15.0}"#);
    }
}
