//! Initial Spread Index (ISI)
//!
//! Expected rate of fire spread from wind and fine fuel moisture, without fuel quantity.
//!
//! The Fire Behaviour Prediction (FBP) system replaces the exponential wind function with a
//! saturating one above 40 km/h. That form is opt-in; the plain FWI System always uses the
//! exponential.
//!
//! # Scientific References
//! - Van Wagner, C.E. & Pickett, T.L. (1985). Forestry Technical Report 33, Eq. 24-26
//! - Forestry Canada Fire Danger Group (1992). Information Report ST-X-3, Eq. 53a

use crate::core_types::codes::check_ffmc;
use crate::core_types::KilometersPerHour;
use crate::error::{check_non_negative, Result};
use crate::fwi::fine_fuel::{ffmc_to_moisture, DAILY_MOISTURE_COEFFICIENT};

/// Wind speed at which the FBP wind function takes over (km/h).
pub const FBP_HIGH_WIND_THRESHOLD: f64 = 40.0;

/// Wind function f(W).
fn wind_function(wind_speed: f64, fbp_modification: bool) -> f64 {
    if fbp_modification && wind_speed >= FBP_HIGH_WIND_THRESHOLD {
        12.0 * (1.0 - (-0.0818 * (wind_speed - 28.0)).exp())
    } else {
        (0.05039 * wind_speed).exp()
    }
}

/// Fine fuel moisture function f(F).
fn moisture_function(moisture: f64) -> f64 {
    91.9 * (-0.1386 * moisture).exp() * (1.0 + moisture.powf(5.31) / 4.93e7)
}

/// Compute the Initial Spread Index.
///
/// # Arguments
/// * `ffmc` - Today's FFMC, `[0, 101]`
/// * `wind_speed` - Noon wind speed, `>= 0`
/// * `fbp_modification` - Use the FBP high-wind function at and above 40 km/h
///
/// # Errors
/// [`crate::FwiError::OutOfDomain`] or [`crate::FwiError::NonFinite`] for a bad FFMC or wind.
///
/// # Example
/// ```
/// use fwi_core::{compute_isi, KilometersPerHour};
///
/// let isi = compute_isi(87.69298, KilometersPerHour::new(25.0), false).unwrap();
/// assert!((isi - 10.854).abs() < 0.001);
/// ```
pub fn compute_isi(ffmc: f64, wind_speed: KilometersPerHour, fbp_modification: bool) -> Result<f64> {
    let ffmc = check_ffmc(ffmc)?;
    let wind_speed = check_non_negative("wind_speed", *wind_speed)?;

    let moisture = ffmc_to_moisture(ffmc, DAILY_MOISTURE_COEFFICIENT);
    Ok(0.208 * wind_function(wind_speed, fbp_modification) * moisture_function(moisture))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FwiError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn kmh(value: f64) -> KilometersPerHour {
        KilometersPerHour::new(value)
    }

    #[test]
    fn test_standard_day_one() {
        let isi = compute_isi(87.69298, kmh(25.0), false).unwrap();
        assert_abs_diff_eq!(isi, 10.853661, epsilon = 1e-5);
    }

    #[test]
    fn test_fbp_only_changes_high_wind() {
        let plain = compute_isi(90.0, kmh(25.0), false).unwrap();
        let fbp = compute_isi(90.0, kmh(25.0), true).unwrap();
        assert_eq!(plain, fbp);

        assert_abs_diff_eq!(compute_isi(90.0, kmh(40.0), false).unwrap(), 32.17682, epsilon = 1e-4);
        assert_abs_diff_eq!(compute_isi(90.0, kmh(40.0), true).unwrap(), 32.16926, epsilon = 1e-4);
    }

    #[test]
    fn test_fbp_branches_nearly_meet_at_threshold() {
        let below = compute_isi(90.0, kmh(FBP_HIGH_WIND_THRESHOLD - 1e-6), true).unwrap();
        let at = compute_isi(90.0, kmh(FBP_HIGH_WIND_THRESHOLD), true).unwrap();
        assert_relative_eq!(below, at, max_relative = 1e-3);
    }

    #[test]
    fn test_fbp_saturates_at_very_high_wind() {
        let gale = compute_isi(90.0, kmh(150.0), true).unwrap();
        let hurricane = compute_isi(90.0, kmh(300.0), true).unwrap();
        assert_relative_eq!(gale, hurricane, max_relative = 1e-3);
        assert!(compute_isi(90.0, kmh(150.0), false).unwrap() > gale);
    }

    #[test]
    fn test_wet_calm_is_near_zero() {
        let isi = compute_isi(0.0, kmh(0.0), false).unwrap();
        assert!(isi >= 0.0);
        assert!(isi < 1e-6);
    }

    #[test]
    fn test_increases_with_ffmc_and_wind() {
        let mut last = 0.0;
        for ffmc in [60.0, 75.0, 85.0, 92.0, 101.0] {
            let isi = compute_isi(ffmc, kmh(20.0), false).unwrap();
            assert!(isi > last);
            last = isi;
        }
        assert!(
            compute_isi(85.0, kmh(30.0), false).unwrap()
                > compute_isi(85.0, kmh(10.0), false).unwrap()
        );
    }

    #[test]
    fn test_rejects_negative_wind() {
        assert!(matches!(
            compute_isi(85.0, kmh(-1.0), false),
            Err(FwiError::OutOfDomain {
                input: "wind_speed",
                ..
            })
        ));
    }
}
