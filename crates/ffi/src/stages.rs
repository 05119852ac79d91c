//! Individual FWI stages for callers that manage their own chain.

use crate::error::{DefaultFfiError, FwiErrorCode};
use crate::helpers::{required, track_error, write_result};
use crate::types::{FwiDangerClass, FwiWeatherObservation};
use fwi_core::{
    compute_bui, compute_dc, compute_dmc, compute_dsr, compute_ffmc, compute_fwi,
    compute_hourly_ffmc, compute_isi, DangerClass, FwiError, HourlyObservation,
    KilometersPerHour, WeatherObservation,
};

/// Shared body of the stages that read a whole observation.
unsafe fn observation_stage(
    obs: *const FwiWeatherObservation,
    out_value: *mut f64,
    stage: impl FnOnce(&WeatherObservation) -> Result<f64, FwiError>,
) -> FwiErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_value"));
    }
    match unsafe { required(obs, "obs") } {
        Ok(obs) => unsafe { write_result(stage(&WeatherObservation::from(obs)), out_value) },
        Err(code) => code,
    }
}

/// Shared body of the stages that take plain numbers.
unsafe fn value_stage(out_value: *mut f64, result: Result<f64, FwiError>) -> FwiErrorCode {
    if out_value.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_value"));
    }
    unsafe { write_result(result, out_value) }
}

#[no_mangle]
/// Today's FFMC from yesterday's FFMC and today's observation.
///
/// # Safety
/// `obs` must be a valid pointer; `out_value` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_compute_ffmc(
    previous: f64,
    obs: *const FwiWeatherObservation,
    out_value: *mut f64,
) -> FwiErrorCode {
    unsafe { observation_stage(obs, out_value, |obs| compute_ffmc(previous, obs)) }
}

#[no_mangle]
/// Today's DMC from yesterday's DMC and today's observation.
///
/// # Safety
/// `obs` must be a valid pointer; `out_value` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_compute_dmc(
    previous: f64,
    obs: *const FwiWeatherObservation,
    latitude_adjust: bool,
    out_value: *mut f64,
) -> FwiErrorCode {
    unsafe {
        observation_stage(obs, out_value, |obs| {
            compute_dmc(previous, obs, latitude_adjust)
        })
    }
}

#[no_mangle]
/// Today's DC from yesterday's DC and today's observation.
///
/// # Safety
/// `obs` must be a valid pointer; `out_value` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_compute_dc(
    previous: f64,
    obs: *const FwiWeatherObservation,
    latitude_adjust: bool,
    out_value: *mut f64,
) -> FwiErrorCode {
    unsafe {
        observation_stage(obs, out_value, |obs| {
            compute_dc(previous, obs, latitude_adjust)
        })
    }
}

#[no_mangle]
/// Initial Spread Index from FFMC and wind speed (km/h).
///
/// # Safety
/// `out_value` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_compute_isi(
    ffmc: f64,
    wind_speed: f64,
    fbp_modification: bool,
    out_value: *mut f64,
) -> FwiErrorCode {
    let result = compute_isi(ffmc, KilometersPerHour::new(wind_speed), fbp_modification);
    unsafe { value_stage(out_value, result) }
}

#[no_mangle]
/// Buildup Index from DMC and DC.
///
/// # Safety
/// `out_value` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_compute_bui(dmc: f64, dc: f64, out_value: *mut f64) -> FwiErrorCode {
    unsafe { value_stage(out_value, compute_bui(dmc, dc)) }
}

#[no_mangle]
/// Fire Weather Index from ISI and BUI.
///
/// # Safety
/// `out_value` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_compute_fwi(isi: f64, bui: f64, out_value: *mut f64) -> FwiErrorCode {
    unsafe { value_stage(out_value, compute_fwi(isi, bui)) }
}

#[no_mangle]
/// Daily Severity Rating from the FWI.
///
/// # Safety
/// `out_value` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_compute_dsr(fwi: f64, out_value: *mut f64) -> FwiErrorCode {
    unsafe { value_stage(out_value, compute_dsr(fwi)) }
}

#[no_mangle]
/// Hourly FFMC after one step of `time_step_hours`.
///
/// `precipitation` is the rain since the previous step, not a 24-hour total.
///
/// # Safety
/// `out_value` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_compute_hourly_ffmc(
    previous: f64,
    temperature: f64,
    relative_humidity: f64,
    wind_speed: f64,
    precipitation: f64,
    time_step_hours: f64,
    out_value: *mut f64,
) -> FwiErrorCode {
    let obs = HourlyObservation::new(temperature, relative_humidity, wind_speed, precipitation);
    let result = compute_hourly_ffmc(previous, &obs, time_step_hours);
    unsafe { value_stage(out_value, result) }
}

#[no_mangle]
/// Standard danger class for an FWI value.
///
/// Returns `FwiErrorCode::OutOfDomain` for a negative or non-finite FWI.
///
/// # Safety
/// `out_class` must be a valid, writable pointer.
pub unsafe extern "C" fn fwi_standard_danger_class(
    fwi: f64,
    out_class: *mut FwiDangerClass,
) -> FwiErrorCode {
    if out_class.is_null() {
        return track_error(&DefaultFfiError::null_pointer("out_class"));
    }
    let result = DangerClass::standard_thresholds()
        .classify(fwi)
        .map(|class| class.copied().map_or(FwiDangerClass::Low, FwiDangerClass::from));
    unsafe { write_result(result, out_class) }
}
