//! The Canadian Forest Fire Weather Index System stages
//!
//! Three moisture codes track fuel layers of increasing depth and carry state from day to
//! day. Three indices are derived fresh from them each day:
//!
//! ```text
//!   FFMC ──┐
//!          ├─ ISI ──┐
//!   wind ──┘        ├─ FWI ── DSR
//!   DMC ──┐         │
//!         ├─ BUI ───┘
//!   DC  ──┘
//! ```
//!
//! Every stage is a pure function of its inputs and validates only the fields it reads.

pub mod buildup;
pub mod day_length;
pub mod drought;
pub mod duff;
pub mod fine_fuel;
pub mod fire_weather;
pub mod spread;

pub use buildup::compute_bui;
pub use day_length::{dc_day_length_factor, dmc_day_length};
pub use drought::compute_dc;
pub use duff::compute_dmc;
pub use fine_fuel::{compute_ffmc, compute_hourly_ffmc};
pub use fire_weather::{compute_dsr, compute_fwi};
pub use spread::{compute_isi, FBP_HIGH_WIND_THRESHOLD};
