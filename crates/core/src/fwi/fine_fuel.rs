//! Fine Fuel Moisture Code (FFMC)
//!
//! Tracks the moisture content of litter and other cured fine fuels. Yesterday's code is
//! converted to a moisture content, wetted by rain, relaxed toward an equilibrium moisture
//! content (drying or wetting, each with its own log-linear rate) and converted back.
//!
//! Two variants share the same physics:
//! - the daily code of Van Wagner & Pickett (1985), noon-to-noon with a 0.5 mm canopy
//!   interception on rain
//! - the hourly code of Van Wagner (1977), applied per step with no interception
//!
//! # Scientific References
//! - Van Wagner, C.E. & Pickett, T.L. (1985). Forestry Technical Report 33, Eq. 1-10
//! - Van Wagner, C.E. (1977). Information Report PS-X-69

use crate::core_types::codes::check_ffmc;
use crate::core_types::{HourlyObservation, Percent, WeatherObservation};
use crate::error::{FwiError, Result};

/// FFMC scale factor of the daily system.
pub(crate) const DAILY_MOISTURE_COEFFICIENT: f64 = 147.2;

/// More precise FFMC scale factor used by the hourly system.
pub(crate) const HOURLY_MOISTURE_COEFFICIENT: f64 = 147.27723;

/// Daily rain below this amount is intercepted by the canopy (mm).
const DAILY_RAIN_INTERCEPTION: f64 = 0.5;

/// Log drying/wetting rate multiplier for a one-day step.
const DAILY_RATE_MULTIPLIER: f64 = 0.581;

/// Log drying/wetting rate multiplier per hour.
const HOURLY_RATE_MULTIPLIER: f64 = 0.0579;

/// Fine fuel moisture content above which the rain response saturates (%).
const RAIN_SATURATION_MOISTURE: f64 = 150.0;

/// Real moisture content of pine litter tops out near 250%.
const MAX_MOISTURE: f64 = 250.0;

/// Convert an FFMC to fine fuel moisture content (%).
#[inline]
pub(crate) fn ffmc_to_moisture(ffmc: f64, coefficient: f64) -> f64 {
    coefficient * (101.0 - ffmc) / (59.5 + ffmc)
}

/// Inverse of [`ffmc_to_moisture`], clamped to the conventional `[0, 101]` scale.
#[inline]
fn moisture_to_ffmc(moisture: f64, coefficient: f64) -> f64 {
    (59.5 * (250.0 - moisture) / (coefficient + moisture)).clamp(0.0, 101.0)
}

/// Rain wetting of fine fuels, Eq. 3a/3b.
///
/// `rain` is the effective rainfall (after any interception) and must be positive.
fn wet_by_rain(moisture: f64, rain: f64) -> f64 {
    let wetting =
        42.5 * rain * (-100.0 / (251.0 - moisture)).exp() * (1.0 - (-6.93 / rain).exp());
    let wetted = if moisture > RAIN_SATURATION_MOISTURE {
        moisture + wetting + 0.0015 * (moisture - RAIN_SATURATION_MOISTURE).powi(2) * rain.sqrt()
    } else {
        moisture + wetting
    };
    wetted.min(MAX_MOISTURE)
}

/// Equilibrium moisture contents for drying and wetting, Eq. 4 and 5.
///
/// # Returns
/// `(drying, wetting)` in percent
fn equilibrium_moisture(temperature: f64, relative_humidity: f64) -> (f64, f64) {
    let saturation = ((relative_humidity - 100.0) / 10.0).exp();
    let temperature_term =
        0.18 * (21.1 - temperature) * (1.0 - (-0.115 * relative_humidity).exp());

    let drying = 0.942 * relative_humidity.powf(0.679) + 11.0 * saturation + temperature_term;
    let wetting = 0.618 * relative_humidity.powf(0.753) + 10.0 * saturation + temperature_term;
    (drying, wetting)
}

/// Log rate at the reference temperature of 21.1°C, Eq. 6a/7a.
///
/// `humidity_fraction` is `rh / 100` when drying and `(100 - rh) / 100` when wetting.
fn log_rate_at_reference(humidity_fraction: f64, wind_speed: f64) -> f64 {
    0.424 * (1.0 - humidity_fraction.powf(1.7))
        + 0.0694 * wind_speed.sqrt() * (1.0 - humidity_fraction.powi(8))
}

/// Move moisture content toward equilibrium over `hours` at the given rate multiplier.
///
/// Between the wetting and drying equilibria the fuel neither gains nor loses moisture.
fn relax_toward_equilibrium(
    moisture: f64,
    temperature: f64,
    relative_humidity: Percent,
    wind_speed: f64,
    rate_multiplier: f64,
    hours: f64,
) -> f64 {
    let (drying_emc, wetting_emc) = equilibrium_moisture(temperature, *relative_humidity);
    let temperature_factor = rate_multiplier * (0.0365 * temperature).exp();

    if moisture > drying_emc {
        let rate =
            log_rate_at_reference(relative_humidity.to_fraction(), wind_speed) * temperature_factor;
        drying_emc + (moisture - drying_emc) * 10.0_f64.powf(-rate * hours)
    } else if moisture < wetting_emc {
        let dryness = Percent::new(100.0 - *relative_humidity);
        let rate = log_rate_at_reference(dryness.to_fraction(), wind_speed) * temperature_factor;
        wetting_emc - (wetting_emc - moisture) * 10.0_f64.powf(-rate * hours)
    } else {
        moisture
    }
}

/// Compute today's Fine Fuel Moisture Code from yesterday's code and today's noon weather.
///
/// Rain only counts when the 24-hour total exceeds 0.5 mm; zero rain takes the no-rain path.
/// Latitude and month are not used and not validated here.
///
/// # Arguments
/// * `previous` - Yesterday's FFMC, `[0, 101]`
/// * `obs` - Today's observation
///
/// # Returns
/// Today's FFMC, clamped to `[0, 101]`
///
/// # Errors
/// [`FwiError::OutOfDomain`] or [`FwiError::NonFinite`] for a bad previous code, humidity,
/// wind speed, precipitation or temperature.
///
/// # Example
/// ```
/// use fwi_core::{compute_ffmc, WeatherObservation};
///
/// let obs = WeatherObservation::new(17.0, 42.0, 25.0, 0.0, 45.98, 4);
/// let ffmc = compute_ffmc(85.0, &obs).unwrap();
/// assert!((ffmc - 87.69).abs() < 0.01);
/// ```
pub fn compute_ffmc(previous: f64, obs: &WeatherObservation) -> Result<f64> {
    let previous = check_ffmc(previous)?;
    let temperature = obs.checked_temperature()?;
    let relative_humidity = obs.checked_relative_humidity()?;
    let wind_speed = obs.checked_wind_speed()?;
    let precipitation = obs.checked_precipitation()?;

    let mut moisture = ffmc_to_moisture(previous, DAILY_MOISTURE_COEFFICIENT);
    if precipitation > DAILY_RAIN_INTERCEPTION {
        moisture = wet_by_rain(moisture, precipitation - DAILY_RAIN_INTERCEPTION);
    }

    let moisture = relax_toward_equilibrium(
        moisture,
        temperature,
        Percent::new(relative_humidity),
        wind_speed,
        DAILY_RATE_MULTIPLIER,
        1.0,
    );
    Ok(moisture_to_ffmc(moisture, DAILY_MOISTURE_COEFFICIENT))
}

/// Compute the hourly Fine Fuel Moisture Code after a step of `time_step_hours`.
///
/// Any positive rainfall in the step wets the fuel; there is no interception threshold.
///
/// # Errors
/// [`FwiError::InvalidTimeStep`] for a zero, negative or non-finite step, otherwise the same
/// domain errors as [`compute_ffmc`].
pub fn compute_hourly_ffmc(
    previous: f64,
    obs: &HourlyObservation,
    time_step_hours: f64,
) -> Result<f64> {
    if !(time_step_hours.is_finite() && time_step_hours > 0.0) {
        return Err(FwiError::InvalidTimeStep {
            hours: time_step_hours,
        });
    }
    let previous = check_ffmc(previous)?;
    obs.validate()?;

    let precipitation = *obs.precipitation;
    let mut moisture = ffmc_to_moisture(previous, HOURLY_MOISTURE_COEFFICIENT);
    if precipitation > 0.0 {
        moisture = wet_by_rain(moisture, precipitation);
    }

    let moisture = relax_toward_equilibrium(
        moisture,
        *obs.temperature,
        obs.relative_humidity,
        *obs.wind_speed,
        HOURLY_RATE_MULTIPLIER,
        time_step_hours,
    );
    Ok(moisture_to_ffmc(moisture, HOURLY_MOISTURE_COEFFICIENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn obs(temperature: f64, rh: f64, wind: f64, rain: f64) -> WeatherObservation {
        WeatherObservation::new(temperature, rh, wind, rain, 45.98, 4)
    }

    #[test]
    fn test_standard_day_one() {
        let ffmc = compute_ffmc(85.0, &obs(17.0, 42.0, 25.0, 0.0)).unwrap();
        assert_abs_diff_eq!(ffmc, 87.6930, epsilon = 1e-3);
    }

    #[test]
    fn test_rain_day_uses_interception() {
        // 2.4 mm of rain after the standard day one
        let ffmc = compute_ffmc(87.69298, &obs(20.0, 21.0, 25.0, 2.4)).unwrap();
        assert_abs_diff_eq!(ffmc, 86.2476, epsilon = 1e-3);
    }

    #[test]
    fn test_heavy_rain_lowers_code() {
        let ffmc = compute_ffmc(85.0, &obs(17.0, 42.0, 25.0, 10.0)).unwrap();
        assert_abs_diff_eq!(ffmc, 67.4875, epsilon = 1e-3);
    }

    #[test]
    fn test_wetting_branch_when_below_equilibrium() {
        let ffmc = compute_ffmc(60.0, &obs(10.0, 90.0, 5.0, 0.0)).unwrap();
        assert_abs_diff_eq!(ffmc, 64.0502, epsilon = 1e-3);
    }

    #[test]
    fn test_rain_at_interception_is_ignored() {
        let dry = compute_ffmc(85.0, &obs(17.0, 42.0, 25.0, 0.0)).unwrap();
        let intercepted = compute_ffmc(85.0, &obs(17.0, 42.0, 25.0, 0.5)).unwrap();
        assert_eq!(dry, intercepted);
    }

    #[test]
    fn test_zero_and_tiny_rain_take_no_rain_path() {
        let dry = compute_ffmc(85.0, &obs(17.0, 42.0, 25.0, 0.0)).unwrap();
        let tiny = compute_ffmc(85.0, &obs(17.0, 42.0, 25.0, 1e-9)).unwrap();
        assert_eq!(dry, tiny);
    }

    #[test]
    fn test_output_clamped_to_scale() {
        let baked = compute_ffmc(101.0, &obs(40.0, 0.0, 60.0, 0.0)).unwrap();
        assert!(baked <= 101.0);
        let soaked = compute_ffmc(0.0, &obs(0.0, 100.0, 0.0, 200.0)).unwrap();
        assert!(soaked >= 0.0);
    }

    #[test]
    fn test_fully_cured_fuel_has_no_moisture() {
        assert_eq!(ffmc_to_moisture(101.0, DAILY_MOISTURE_COEFFICIENT), 0.0);
        assert_eq!(ffmc_to_moisture(101.0, HOURLY_MOISTURE_COEFFICIENT), 0.0);
    }

    #[test]
    fn test_negative_precipitation_rejected() {
        let err = compute_ffmc(85.0, &obs(17.0, 42.0, 25.0, -1.0)).unwrap_err();
        assert!(matches!(
            err,
            FwiError::OutOfDomain {
                input: "precipitation",
                ..
            }
        ));
    }

    #[test]
    fn test_ffmc_ignores_bad_month() {
        let mut o = obs(17.0, 42.0, 25.0, 0.0);
        o.month = 0;
        assert!(compute_ffmc(85.0, &o).is_ok());
    }

    #[test]
    fn test_hourly_step_dries_toward_equilibrium() {
        let hour = HourlyObservation::new(25.0, 30.0, 15.0, 0.0);
        let ffmc = compute_hourly_ffmc(85.0, &hour, 1.0).unwrap();
        assert_abs_diff_eq!(ffmc, 86.2747, epsilon = 1e-3);
    }

    #[test]
    fn test_hourly_rain_has_no_interception() {
        let hour = HourlyObservation::new(15.0, 80.0, 5.0, 0.4);
        let ffmc = compute_hourly_ffmc(85.0, &hour, 1.0).unwrap();
        assert!(ffmc < 85.0);
    }

    #[test]
    fn test_hourly_two_half_steps_match_one_full_step_without_rain() {
        let hour = HourlyObservation::new(25.0, 30.0, 15.0, 0.0);
        let full = compute_hourly_ffmc(85.0, &hour, 1.0).unwrap();
        let half = compute_hourly_ffmc(85.0, &hour, 0.5).unwrap();
        let two_halves = compute_hourly_ffmc(half, &hour, 0.5).unwrap();
        assert_abs_diff_eq!(full, two_halves, epsilon = 1e-4);
    }

    #[test]
    fn test_hourly_rejects_bad_time_step() {
        let hour = HourlyObservation::new(25.0, 30.0, 15.0, 0.0);
        for step in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                compute_hourly_ffmc(85.0, &hour, step),
                Err(FwiError::InvalidTimeStep { .. })
            ));
        }
    }
}
