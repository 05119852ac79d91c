use crate::error::{DefaultFfiError, FwiErrorCode};
use crate::helpers::{clear_last_error, required, track_error, write_result};
use crate::types::{FwiCodes, FwiDailyResult, FwiOptions, FwiWeatherObservation};
use fwi_core::{
    run_daily_pipeline, run_station_series, FireCodeState, FwiError, PipelineOptions,
    WeatherObservation,
};

/// Resolve an optional options pointer: null means defaults.
unsafe fn options_or_default(options: *const FwiOptions) -> PipelineOptions {
    unsafe { options.as_ref() }.map_or_else(PipelineOptions::default, PipelineOptions::from)
}

/// Default pipeline options: latitude adjustment on, FBP modification off.
#[no_mangle]
pub extern "C" fn fwi_default_options() -> FwiOptions {
    PipelineOptions::default().into()
}

#[no_mangle]
/// Advance one station by one day.
///
/// - `previous` holds yesterday's codes (use 85, 6, 15 at the start of a season).
/// - `options` may be null for defaults.
/// - `out_result` receives today's codes and indices on success and is untouched on failure.
///
/// Returns
/// - `FwiErrorCode::Ok` (0) on success
/// - `FwiErrorCode::NullPointer` if `previous`, `obs` or `out_result` is null
/// - `FwiErrorCode::OutOfDomain` / `InvalidMonth` for rejected input
///
/// # Safety
///
/// - `previous` and `obs` must be valid pointers to initialised structs.
/// - `options` must be null or a valid pointer.
/// - `out_result` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_run_daily(
    previous: *const FwiCodes,
    obs: *const FwiWeatherObservation,
    options: *const FwiOptions,
    out_result: *mut FwiDailyResult,
) -> FwiErrorCode {
    if out_result.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_result"));
    }
    let previous = match unsafe { required(previous, "previous") } {
        Ok(previous) => FireCodeState::from(previous),
        Err(code) => return code,
    };
    let obs = match unsafe { required(obs, "obs") } {
        Ok(obs) => WeatherObservation::from(obs),
        Err(code) => return code,
    };
    let options = unsafe { options_or_default(options) };

    let result = run_daily_pipeline(&previous, &obs, &options).map(FwiDailyResult::from);
    unsafe { write_result(result, out_result) }
}

#[no_mangle]
/// Thread the daily pipeline through `count` chronologically ordered observations.
///
/// - `out_results` must have room for `count` results; it is only written on success.
/// - `out_failed_index` (optional) receives the zero-based index of the rejected observation
///   on failure. If null, ignored.
///
/// Returns
/// - `FwiErrorCode::Ok` (0) on success
/// - `FwiErrorCode::NullPointer` if a required pointer is null
/// - The code of the first rejected observation otherwise
///
/// # Safety
///
/// - `start` must be a valid pointer.
/// - `observations` must point to `count` initialised observations (may be null if `count` is 0).
/// - `out_results` must point to writable space for `count` results (may be null if `count` is 0).
/// - `options` and `out_failed_index` must be null or valid pointers.
pub unsafe extern "C" fn fwi_run_series(
    start: *const FwiCodes,
    observations: *const FwiWeatherObservation,
    count: usize,
    options: *const FwiOptions,
    out_results: *mut FwiDailyResult,
    out_failed_index: *mut usize,
) -> FwiErrorCode {
    let start = match unsafe { required(start, "start") } {
        Ok(start) => FireCodeState::from(start),
        Err(code) => return code,
    };
    if count > 0 && observations.is_null() {
        return track_error(&DefaultFfiError::null_pointer("observations"));
    }
    if count > 0 && out_results.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_results"));
    }
    let options = unsafe { options_or_default(options) };

    let observations: Vec<WeatherObservation> = if count == 0 {
        Vec::new()
    } else {
        unsafe { std::slice::from_raw_parts(observations, count) }
            .iter()
            .map(WeatherObservation::from)
            .collect()
    };

    match run_station_series(&start, &observations, &options) {
        Ok(results) => {
            for (offset, result) in results.into_iter().enumerate() {
                unsafe {
                    *out_results.add(offset) = result.into();
                }
            }
            clear_last_error();
            FwiErrorCode::Ok
        }
        Err(e) => {
            if let FwiError::SeriesObservation { index, .. } = &e {
                if let Some(out) = unsafe { out_failed_index.as_mut() } {
                    *out = *index;
                }
            }
            track_error(&DefaultFfiError::from(e))
        }
    }
}
