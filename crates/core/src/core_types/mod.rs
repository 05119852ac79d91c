//! Core types and utilities

pub mod codes;
pub mod units;
pub mod weather;

pub use codes::*;
pub use units::*;
pub use weather::*;
