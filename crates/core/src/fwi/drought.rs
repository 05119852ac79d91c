//! Drought Code (DC)
//!
//! Seasonal drought indicator for deep compact organic layers. The code is a scaled moisture
//! equivalent: rain above 2.8 mm recharges it, potential evapotranspiration driven by
//! temperature and a monthly day-length factor drains it. Relative humidity and wind are unused.
//!
//! # Scientific References
//! - Van Wagner, C.E. & Pickett, T.L. (1985). Forestry Technical Report 33, Eq. 18-23

use crate::core_types::WeatherObservation;
use crate::error::{check_non_negative, Result};
use crate::fwi::day_length::dc_day_length_at;

/// Rain at or below this amount does not reach the deep layer (mm).
const RAIN_THRESHOLD: f64 = 2.8;

/// Below this temperature there is no evapotranspiration (°C).
const MIN_DRYING_TEMPERATURE: f64 = -2.8;

fn wet_by_rain(previous: f64, rain: f64) -> f64 {
    let effective_rain = 0.83 * rain - 1.27;
    let moisture_equivalent = 800.0 * (-previous / 400.0).exp();
    (previous - 400.0 * (1.0 + 3.937 * effective_rain / moisture_equivalent).ln()).max(0.0)
}

/// Compute today's Drought Code.
///
/// # Arguments
/// * `previous` - Yesterday's DC, `>= 0`
/// * `obs` - Today's observation
/// * `latitude_adjust` - Use latitude-banded day-length factors instead of the 46°N table
///
/// # Errors
/// [`crate::FwiError::OutOfDomain`] or [`crate::FwiError::NonFinite`] for a bad previous code,
/// temperature, precipitation or latitude, and [`crate::FwiError::InvalidMonth`].
pub fn compute_dc(previous: f64, obs: &WeatherObservation, latitude_adjust: bool) -> Result<f64> {
    let previous = check_non_negative("dc", previous)?;
    let temperature = obs.checked_temperature()?.max(MIN_DRYING_TEMPERATURE);
    let precipitation = obs.checked_precipitation()?;
    let latitude = obs.checked_latitude()?;
    let month_index = obs.checked_month()?;

    let day_length_factor = dc_day_length_at(latitude, month_index, latitude_adjust);
    let evapotranspiration = ((0.36 * (temperature + 2.8) + day_length_factor) / 2.0).max(0.0);

    let after_rain = if precipitation > RAIN_THRESHOLD {
        wet_by_rain(previous, precipitation)
    } else {
        previous
    };

    Ok((after_rain + evapotranspiration).max(0.0))
}
