//! Orchestration of the daily FWI chain
//!
//! One call advances one station by one day: yesterday's codes plus today's weather give
//! today's codes and indices. Days of one station must run in chronological order; separate
//! stations are independent and [`run_stations`] computes them in parallel.

use crate::core_types::codes::check_ffmc;
use crate::core_types::{
    DailyResult, DerivedIndices, FireCodeState, HourlyObservation, WeatherObservation,
};
use crate::error::{check_non_negative, Result};
use crate::fwi::{
    compute_bui, compute_dc, compute_dmc, compute_dsr, compute_ffmc, compute_fwi,
    compute_hourly_ffmc, compute_isi,
};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// Knobs shared by every stage of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Use latitude-banded day-length tables for DMC and DC (default `true`).
    /// When off, the 46°N tables apply everywhere.
    pub latitude_adjust: bool,

    /// Use the FBP high-wind function in the ISI (default `false`).
    pub fbp_modification: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            latitude_adjust: true,
            fbp_modification: false,
        }
    }
}

/// Advance one station by one day.
///
/// Both the previous state and the whole observation are validated before any stage runs, so
/// a rejected call never yields partial output.
///
/// # Errors
/// The first domain error found in `previous` or `obs`.
pub fn run_daily_pipeline(
    previous: &FireCodeState,
    obs: &WeatherObservation,
    options: &PipelineOptions,
) -> Result<DailyResult> {
    previous.validate()?;
    obs.validate()?;

    let dmc = compute_dmc(previous.dmc, obs, options.latitude_adjust)?;
    let dc = compute_dc(previous.dc, obs, options.latitude_adjust)?;
    let ffmc = compute_ffmc(previous.ffmc, obs)?;
    let isi = compute_isi(ffmc, obs.wind_speed, options.fbp_modification)?;
    let bui = compute_bui(dmc, dc)?;
    let fwi = compute_fwi(isi, bui)?;
    let dsr = compute_dsr(fwi)?;

    let result = DailyResult {
        state: FireCodeState { ffmc, dmc, dc },
        indices: DerivedIndices { isi, bui, fwi, dsr },
    };
    trace!(
        "ffmc={:.3} dmc={:.3} dc={:.3} isi={:.3} bui={:.3} fwi={:.3}",
        ffmc,
        dmc,
        dc,
        isi,
        bui,
        fwi
    );
    Ok(result)
}

/// Thread the daily pipeline through one station's observations, oldest first.
///
/// # Errors
/// A domain error for a bad `start`, checked even when there are no observations.
/// Otherwise [`crate::FwiError::SeriesObservation`] carrying the index of the first rejected
/// observation and the reason. Nothing computed for that or later days is returned.
pub fn run_station_series(
    start: &FireCodeState,
    observations: &[WeatherObservation],
    options: &PipelineOptions,
) -> Result<Vec<DailyResult>> {
    start.validate()?;
    debug!("Running station series over {} days", observations.len());

    let mut state = *start;
    let mut results = Vec::with_capacity(observations.len());
    for (index, obs) in observations.iter().enumerate() {
        let today = run_daily_pipeline(&state, obs, options).map_err(|e| {
            warn!("Station series stopped at day {index}: {e}");
            e.at_index(index)
        })?;
        state = today.state;
        results.push(today);
    }

    debug!(
        "Station series complete: final ffmc={:.2} dmc={:.2} dc={:.2}",
        state.ffmc, state.dmc, state.dc
    );
    Ok(results)
}

/// One station's season: starting codes plus chronologically ordered observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSeries {
    /// Codes for the day before the first observation.
    pub start: FireCodeState,
    /// Daily observations, oldest first.
    pub observations: Vec<WeatherObservation>,
}

impl StationSeries {
    /// A series starting from the conventional start-up codes.
    #[must_use]
    pub fn from_startup(observations: Vec<WeatherObservation>) -> Self {
        StationSeries {
            start: FireCodeState::STARTUP,
            observations,
        }
    }
}

/// Compute many stations in parallel.
///
/// Every station gets its own result; bad data at one station never affects another.
pub fn run_stations<K>(
    stations: &FxHashMap<K, StationSeries>,
    options: &PipelineOptions,
) -> FxHashMap<K, Result<Vec<DailyResult>>>
where
    K: Eq + Hash + Clone + Send + Sync,
{
    debug!("Running {} stations", stations.len());

    let results: FxHashMap<K, Result<Vec<DailyResult>>> = stations
        .par_iter()
        .map(|(id, series)| {
            (
                id.clone(),
                run_station_series(&series.start, &series.observations, options),
            )
        })
        .collect();

    let failed = results.values().filter(|result| result.is_err()).count();
    if failed > 0 {
        warn!("{failed} of {} stations rejected", results.len());
    }
    results
}

/// One hourly step's output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyResult {
    /// Hourly FFMC after this step.
    pub ffmc: f64,
    /// ISI from the hourly FFMC and this hour's wind.
    pub isi: f64,
    /// Hourly FWI, only when a daily BUI was supplied.
    pub fwi: Option<f64>,
    /// Hourly DSR, only when a daily BUI was supplied.
    pub dsr: Option<f64>,
}

/// Thread the hourly FFMC through one-hour steps, oldest first.
///
/// The DMC, DC and BUI do not change within a day; pass the day's BUI to also get hourly FWI
/// and DSR.
///
/// # Errors
/// A domain error for a bad `start_ffmc` or `daily_bui`, or
/// [`crate::FwiError::SeriesObservation`] for the first rejected hour.
pub fn run_hourly_series(
    start_ffmc: f64,
    observations: &[HourlyObservation],
    daily_bui: Option<f64>,
    options: &PipelineOptions,
) -> Result<Vec<HourlyResult>> {
    let start_ffmc = check_ffmc(start_ffmc)?;
    let daily_bui = daily_bui
        .map(|bui| check_non_negative("bui", bui))
        .transpose()?;
    debug!("Running hourly series over {} hours", observations.len());

    let mut ffmc = start_ffmc;
    let mut results = Vec::with_capacity(observations.len());
    for (index, obs) in observations.iter().enumerate() {
        let hour = hourly_step(ffmc, obs, daily_bui, options).map_err(|e| {
            warn!("Hourly series stopped at hour {index}: {e}");
            e.at_index(index)
        })?;
        ffmc = hour.ffmc;
        results.push(hour);
    }
    Ok(results)
}

fn hourly_step(
    previous_ffmc: f64,
    obs: &HourlyObservation,
    daily_bui: Option<f64>,
    options: &PipelineOptions,
) -> Result<HourlyResult> {
    let ffmc = compute_hourly_ffmc(previous_ffmc, obs, 1.0)?;
    let isi = compute_isi(ffmc, obs.wind_speed, options.fbp_modification)?;
    let (fwi, dsr) = match daily_bui {
        Some(bui) => {
            let fwi = compute_fwi(isi, bui)?;
            (Some(fwi), Some(compute_dsr(fwi)?))
        }
        None => (None, None),
    };
    Ok(HourlyResult { ffmc, isi, fwi, dsr })
}
