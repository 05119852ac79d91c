//! Fire Weather Index (FWI) and Daily Severity Rating (DSR)
//!
//! The FWI combines spread (ISI) and available fuel (BUI) into a fire intensity rating. The
//! DSR is a power transform of the FWI that averages sensibly over a season.
//!
//! # Scientific References
//! - Van Wagner, C.E. & Pickett, T.L. (1985). Forestry Technical Report 33, Eq. 28-31
//! - Van Wagner, C.E. (1970). "Conversion of Williams' severity rating for use with the FWI"

use crate::error::{check_non_negative, Result};

/// BUI above which the duff function switches to its saturating form.
const BUI_BREAKPOINT: f64 = 80.0;

/// Duff moisture function f(D).
fn duff_function(bui: f64) -> f64 {
    if bui <= BUI_BREAKPOINT {
        0.626 * bui.powf(0.809) + 2.0
    } else {
        1000.0 / (25.0 + 108.64 / (0.023 * bui).exp())
    }
}

/// Compute the Fire Weather Index.
///
/// # Errors
/// [`crate::FwiError::OutOfDomain`] or [`crate::FwiError::NonFinite`] for a negative or
/// non-finite ISI or BUI.
///
/// # Example
/// ```
/// use fwi_core::compute_fwi;
///
/// let fwi = compute_fwi(10.853661, 8.583881).unwrap();
/// assert!((fwi - 10.144).abs() < 0.001);
/// ```
pub fn compute_fwi(isi: f64, bui: f64) -> Result<f64> {
    let isi = check_non_negative("isi", isi)?;
    let bui = check_non_negative("bui", bui)?;

    let intermediate = 0.1 * isi * duff_function(bui);
    if intermediate <= 1.0 {
        Ok(intermediate)
    } else {
        Ok((2.72 * (0.434 * intermediate.ln()).powf(0.647)).exp())
    }
}

/// Compute the Daily Severity Rating from the FWI.
///
/// # Errors
/// [`crate::FwiError::OutOfDomain`] or [`crate::FwiError::NonFinite`] for a negative or
/// non-finite FWI.
pub fn compute_dsr(fwi: f64) -> Result<f64> {
    let fwi = check_non_negative("fwi", fwi)?;
    Ok(0.0272 * fwi.powf(1.77))
}
