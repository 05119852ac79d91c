//! Duff Moisture Code (DMC)
//!
//! Moisture of loosely compacted decomposing organic matter a few centimetres deep. Drying is
//! driven by temperature, humidity and day length; rain above 1.5 mm is partly intercepted and
//! wets the layer with an efficiency that falls as the layer gets drier.
//!
//! # Scientific References
//! - Van Wagner, C.E. & Pickett, T.L. (1985). Forestry Technical Report 33, Eq. 11-17

use crate::core_types::WeatherObservation;
use crate::error::{check_non_negative, Result};
use crate::fwi::day_length::dmc_day_length_at;

/// Rain at or below this amount does not reach the duff layer (mm).
const RAIN_THRESHOLD: f64 = 1.5;

/// Below this temperature the duff does not dry (°C).
const MIN_DRYING_TEMPERATURE: f64 = -1.1;

/// Slope of the rain-wetting efficiency as a function of yesterday's DMC, Eq. 13a-c.
fn wetting_slope(previous: f64) -> f64 {
    if previous <= 33.0 {
        100.0 / (0.5 + 0.3 * previous)
    } else if previous <= 65.0 {
        14.0 - 1.3 * previous.ln()
    } else {
        6.2 * previous.ln() - 17.2
    }
}

/// DMC after rain, Eq. 11-16. `rain` is the 24-hour total and must exceed the threshold.
fn wet_by_rain(previous: f64, rain: f64) -> f64 {
    let effective_rain = 0.92 * rain - 1.27;
    let moisture_before = 20.0 + 280.0 / (0.023 * previous).exp();
    let slope = wetting_slope(previous);
    let moisture_after =
        moisture_before + 1000.0 * effective_rain / (48.77 + slope * effective_rain);
    (43.43 * (5.6348 - (moisture_after - 20.0).ln())).max(0.0)
}

/// Compute today's Duff Moisture Code.
///
/// # Arguments
/// * `previous` - Yesterday's DMC, `>= 0`
/// * `obs` - Today's observation; wind speed is not used
/// * `latitude_adjust` - Use the latitude-banded day-length tables instead of the 46°N table
///
/// # Errors
/// [`crate::FwiError::OutOfDomain`] or [`crate::FwiError::NonFinite`] for a bad previous code,
/// temperature, humidity, precipitation or latitude, and [`crate::FwiError::InvalidMonth`].
///
/// # Example
/// ```
/// use fwi_core::{compute_dmc, WeatherObservation};
///
/// let obs = WeatherObservation::new(17.0, 42.0, 25.0, 0.0, 45.98, 4);
/// let dmc = compute_dmc(6.0, &obs, true).unwrap();
/// assert!((dmc - 8.545).abs() < 0.001);
/// ```
pub fn compute_dmc(previous: f64, obs: &WeatherObservation, latitude_adjust: bool) -> Result<f64> {
    let previous = check_non_negative("dmc", previous)?;
    let temperature = obs.checked_temperature()?.max(MIN_DRYING_TEMPERATURE);
    let relative_humidity = obs.checked_relative_humidity()?;
    let precipitation = obs.checked_precipitation()?;
    let latitude = obs.checked_latitude()?;
    let month_index = obs.checked_month()?;

    let day_length = dmc_day_length_at(latitude, month_index, latitude_adjust);
    let drying = 1.894 * (temperature + 1.1) * (100.0 - relative_humidity) * day_length * 1e-4;

    let after_rain = if precipitation > RAIN_THRESHOLD {
        wet_by_rain(previous, precipitation)
    } else {
        previous
    };

    Ok((after_rain + drying).max(0.0))
}
