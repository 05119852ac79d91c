//! Canadian Forest Fire Weather Index (FWI) System engine
//!
//! Turns daily (and hourly) weather observations into the standard fire-danger codes and
//! indices of the Canadian Forest Fire Danger Rating System. Every stage is a pure function;
//! the caller owns yesterday's codes and threads them through one station-day at a time.
//!
//! ## Structure
//!
//! - Moisture codes carried across days: FFMC, DMC, DC ([`fwi`] module)
//! - Derived daily indices: ISI, BUI, FWI, DSR
//! - Orchestration of the daily chain and multi-station batches ([`pipeline`])
//! - Caller-configured danger classification ([`danger`])
//!
//! ## Example
//!
//! ```
//! use fwi_core::{run_daily_pipeline, FireCodeState, PipelineOptions, WeatherObservation};
//!
//! let obs = WeatherObservation::new(17.0, 42.0, 25.0, 0.0, 49.75, 7);
//! let today = run_daily_pipeline(&FireCodeState::STARTUP, &obs, &PipelineOptions::default())
//!     .unwrap();
//!
//! assert!((today.state.ffmc - 87.69).abs() < 0.01);
//! assert!((today.indices.fwi - 10.14).abs() < 0.01);
//! ```
//!
//! ## References
//! - Van Wagner, C.E. (1987). "Development and structure of the Canadian Forest Fire Weather
//!   Index System". Canadian Forestry Service, Forestry Technical Report 35.
//! - Van Wagner, C.E. & Pickett, T.L. (1985). "Equations and FORTRAN program for the Canadian
//!   Forest Fire Weather Index System". Forestry Technical Report 33.
//! - Van Wagner, C.E. (1977). "A method of computing fine fuel moisture content throughout the
//!   diurnal cycle". Information Report PS-X-69.

// Core types and utilities
pub mod core_types;

pub mod danger;
pub mod error;
pub mod fwi;
pub mod pipeline;

// Re-export core types
pub use core_types::{Celsius, Degrees, KilometersPerHour, Millimeters, Percent};
pub use core_types::{DailyResult, DerivedIndices, FireCodeState};
pub use core_types::{HourlyObservation, WeatherObservation};

pub use danger::{DangerBand, DangerClass, DangerClassifier, DangerThresholds};
pub use error::{FwiError, Result};
pub use fwi::{
    compute_bui, compute_dc, compute_dmc, compute_dsr, compute_ffmc, compute_fwi,
    compute_hourly_ffmc, compute_isi,
};
pub use pipeline::{
    run_daily_pipeline, run_hourly_series, run_station_series, run_stations, HourlyResult,
    PipelineOptions, StationSeries,
};
