//! Weather observations that drive the FWI System
//!
//! A daily observation is the noon local-standard-time reading for one station-day: temperature,
//! relative humidity and wind at noon plus the 24-hour rainfall ending at noon. The DMC and DC
//! stages also need the station latitude and the calendar month for their day-length factors.

use crate::core_types::units::{Celsius, Degrees, KilometersPerHour, Millimeters, Percent};
use crate::error::{check_finite, check_non_negative, check_range, FwiError, Result};
use serde::{Deserialize, Serialize};

/// Valid relative humidity range label.
pub(crate) const RH_RANGE: &str = "[0, 100]";

/// Valid latitude range label.
pub(crate) const LATITUDE_RANGE: &str = "[-90, 90]";

/// One station-day of weather input.
///
/// Created and owned by the caller; the engine only reads it.
///
/// # Example
/// ```
/// use fwi_core::WeatherObservation;
///
/// let obs = WeatherObservation::new(17.0, 42.0, 25.0, 0.0, 49.75, 7);
/// assert!(obs.validate().is_ok());
///
/// let soaked = WeatherObservation::new(17.0, 150.0, 25.0, 0.0, 49.75, 7);
/// assert!(soaked.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Noon air temperature. Any finite value, including below freezing.
    pub temperature: Celsius,

    /// Noon relative humidity, `[0, 100]`.
    pub relative_humidity: Percent,

    /// Noon 10-m open wind speed, `>= 0`.
    pub wind_speed: KilometersPerHour,

    /// 24-hour rainfall ending at noon, `>= 0`.
    pub precipitation: Millimeters,

    /// Station latitude in decimal degrees, `[-90, 90]`. Used only by DMC and DC.
    pub latitude: Degrees,

    /// Calendar month, `1..=12`. Used only by DMC and DC.
    pub month: u8,
}

impl WeatherObservation {
    /// Create a new daily observation
    ///
    /// # Arguments
    /// * `temperature` - Air temperature in °C
    /// * `relative_humidity` - Relative humidity in %
    /// * `wind_speed` - Wind speed in km/h
    /// * `precipitation` - 24-hour rainfall in mm
    /// * `latitude` - Station latitude in decimal degrees
    /// * `month` - Calendar month (1-12)
    #[must_use]
    pub fn new(
        temperature: f64,
        relative_humidity: f64,
        wind_speed: f64,
        precipitation: f64,
        latitude: f64,
        month: u8,
    ) -> Self {
        WeatherObservation {
            temperature: Celsius::new(temperature),
            relative_humidity: Percent::new(relative_humidity),
            wind_speed: KilometersPerHour::new(wind_speed),
            precipitation: Millimeters::new(precipitation),
            latitude: Degrees::new(latitude),
            month,
        }
    }

    /// Check every field against its declared domain.
    ///
    /// # Errors
    /// Returns the first domain violation found: [`FwiError::NonFinite`],
    /// [`FwiError::OutOfDomain`] or [`FwiError::InvalidMonth`].
    pub fn validate(&self) -> Result<()> {
        self.checked_temperature()?;
        self.checked_relative_humidity()?;
        self.checked_wind_speed()?;
        self.checked_precipitation()?;
        self.checked_latitude()?;
        self.checked_month()?;
        Ok(())
    }

    pub(crate) fn checked_temperature(&self) -> Result<f64> {
        check_finite("temperature", *self.temperature)
    }

    pub(crate) fn checked_relative_humidity(&self) -> Result<f64> {
        check_range("relative_humidity", *self.relative_humidity, 0.0, 100.0, RH_RANGE)
    }

    pub(crate) fn checked_wind_speed(&self) -> Result<f64> {
        check_non_negative("wind_speed", *self.wind_speed)
    }

    pub(crate) fn checked_precipitation(&self) -> Result<f64> {
        check_non_negative("precipitation", *self.precipitation)
    }

    pub(crate) fn checked_latitude(&self) -> Result<f64> {
        check_latitude(self.latitude)
    }

    /// Month as a zero-based table index.
    pub(crate) fn checked_month(&self) -> Result<usize> {
        check_month(self.month)
    }
}

pub(crate) fn check_latitude(latitude: Degrees) -> Result<f64> {
    check_range("latitude", *latitude, -90.0, 90.0, LATITUDE_RANGE)
}

/// Validate a calendar month and turn it into a zero-based table index.
pub(crate) fn check_month(month: u8) -> Result<usize> {
    if (1..=12).contains(&month) {
        Ok(usize::from(month - 1))
    } else {
        Err(FwiError::InvalidMonth { month })
    }
}

/// One hourly weather step for the hourly FFMC.
///
/// Rainfall is the amount that fell since the previous step, not a 24-hour total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    /// Air temperature.
    pub temperature: Celsius,
    /// Relative humidity, `[0, 100]`.
    pub relative_humidity: Percent,
    /// 10-m open wind speed, `>= 0`.
    pub wind_speed: KilometersPerHour,
    /// Rainfall since the previous step, `>= 0`.
    pub precipitation: Millimeters,
}

impl HourlyObservation {
    /// Create a new hourly observation
    #[must_use]
    pub fn new(temperature: f64, relative_humidity: f64, wind_speed: f64, precipitation: f64) -> Self {
        HourlyObservation {
            temperature: Celsius::new(temperature),
            relative_humidity: Percent::new(relative_humidity),
            wind_speed: KilometersPerHour::new(wind_speed),
            precipitation: Millimeters::new(precipitation),
        }
    }

    /// Check every field against its declared domain.
    ///
    /// # Errors
    /// Returns [`FwiError::NonFinite`] or [`FwiError::OutOfDomain`] for the first bad field.
    pub fn validate(&self) -> Result<()> {
        check_finite("temperature", *self.temperature)?;
        check_range("relative_humidity", *self.relative_humidity, 0.0, 100.0, RH_RANGE)?;
        check_non_negative("wind_speed", *self.wind_speed)?;
        check_non_negative("precipitation", *self.precipitation)?;
        Ok(())
    }
}
