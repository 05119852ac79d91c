//! Buildup Index (BUI)
//!
//! Total fuel available for combustion, a weighted combination of DMC and DC.
//!
//! # Scientific References
//! - Van Wagner, C.E. & Pickett, T.L. (1985). Forestry Technical Report 33, Eq. 27a/27b

use crate::error::{check_non_negative, Result};

/// Compute the Buildup Index from today's DMC and DC.
///
/// When the harmonic blend falls below the DMC the result is pulled back toward the DMC so
/// that BUI never drops far under it with a low DC.
///
/// # Errors
/// [`crate::FwiError::OutOfDomain`] or [`crate::FwiError::NonFinite`] for a negative or
/// non-finite code.
pub fn compute_bui(dmc: f64, dc: f64) -> Result<f64> {
    let dmc = check_non_negative("dmc", dmc)?;
    let dc = check_non_negative("dc", dc)?;

    if dmc == 0.0 && dc == 0.0 {
        return Ok(0.0);
    }

    let blend = 0.8 * dc * dmc / (dmc + 0.4 * dc);
    if blend < dmc {
        let ratio = (dmc - blend) / dmc;
        let correction = 0.92 + (0.0114 * dmc).powf(1.7);
        Ok((dmc - correction * ratio).max(0.0))
    } else {
        Ok(blend)
    }
}
