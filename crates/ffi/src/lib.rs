//! C ABI for the FWI System engine
//!
//! Every function returns an [`FwiErrorCode`] and writes its result through an out-pointer.
//! On failure the out-pointer is left untouched and a message is available from
//! [`fwi_get_last_error`] on the same thread. Nothing panics across the boundary.
//!
//! The C header `FwiFFI.h` is generated at build time.

mod error;
mod helpers;
mod pipeline;
mod stages;
mod types;

pub use error::{fwi_get_last_error, fwi_get_last_error_code, FwiErrorCode};
pub use pipeline::{fwi_default_options, fwi_run_daily, fwi_run_series};
pub use stages::{
    fwi_compute_bui, fwi_compute_dc, fwi_compute_dmc, fwi_compute_dsr, fwi_compute_ffmc,
    fwi_compute_fwi, fwi_compute_hourly_ffmc, fwi_compute_isi, fwi_standard_danger_class,
};
pub use types::{
    FwiCodes, FwiDailyResult, FwiDangerClass, FwiIndices, FwiOptions, FwiWeatherObservation,
};
