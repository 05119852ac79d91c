use fwi_core::{
    DailyResult, DangerClass, DerivedIndices, FireCodeState, PipelineOptions, WeatherObservation,
};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
/// One station-day of noon weather.
/// Keep this layout stable for C/C++/C# consumers.
pub struct FwiWeatherObservation {
    /// Noon air temperature (°C).
    pub temperature: f64,

    /// Noon relative humidity (%), 0-100.
    pub relative_humidity: f64,

    /// Noon 10-m open wind speed (km/h).
    pub wind_speed: f64,

    /// 24-hour rainfall ending at noon (mm).
    pub precipitation: f64,

    /// Station latitude (decimal degrees, positive north).
    pub latitude: f64,

    /// Calendar month, 1-12.
    pub month: u8,
}

impl From<&FwiWeatherObservation> for WeatherObservation {
    fn from(obs: &FwiWeatherObservation) -> Self {
        WeatherObservation::new(
            obs.temperature,
            obs.relative_humidity,
            obs.wind_speed,
            obs.precipitation,
            obs.latitude,
            obs.month,
        )
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
/// The three moisture codes carried from one day to the next.
pub struct FwiCodes {
    /// Fine Fuel Moisture Code, 0-101.
    pub ffmc: f64,
    /// Duff Moisture Code.
    pub dmc: f64,
    /// Drought Code.
    pub dc: f64,
}

impl From<&FwiCodes> for FireCodeState {
    fn from(codes: &FwiCodes) -> Self {
        FireCodeState::new(codes.ffmc, codes.dmc, codes.dc)
    }
}

impl From<FireCodeState> for FwiCodes {
    fn from(state: FireCodeState) -> Self {
        Self {
            ffmc: state.ffmc,
            dmc: state.dmc,
            dc: state.dc,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
/// Indices derived fresh each day.
pub struct FwiIndices {
    /// Initial Spread Index.
    pub isi: f64,
    /// Buildup Index.
    pub bui: f64,
    /// Fire Weather Index.
    pub fwi: f64,
    /// Daily Severity Rating.
    pub dsr: f64,
}

impl From<DerivedIndices> for FwiIndices {
    fn from(indices: DerivedIndices) -> Self {
        Self {
            isi: indices.isi,
            bui: indices.bui,
            fwi: indices.fwi,
            dsr: indices.dsr,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
/// Output of one daily pipeline call.
pub struct FwiDailyResult {
    /// Today's codes; pass them back as yesterday's on the next call.
    pub codes: FwiCodes,
    /// Today's indices.
    pub indices: FwiIndices,
}

impl From<DailyResult> for FwiDailyResult {
    fn from(result: DailyResult) -> Self {
        Self {
            codes: result.state.into(),
            indices: result.indices.into(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pipeline switches. Obtain defaults from `fwi_default_options`.
pub struct FwiOptions {
    /// Use latitude-banded day-length tables for DMC and DC.
    pub latitude_adjust: bool,
    /// Use the FBP high-wind function in the ISI.
    pub fbp_modification: bool,
}

impl From<&FwiOptions> for PipelineOptions {
    fn from(options: &FwiOptions) -> Self {
        PipelineOptions {
            latitude_adjust: options.latitude_adjust,
            fbp_modification: options.fbp_modification,
        }
    }
}

impl From<PipelineOptions> for FwiOptions {
    fn from(options: PipelineOptions) -> Self {
        Self {
            latitude_adjust: options.latitude_adjust,
            fbp_modification: options.fbp_modification,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Standard five-class FWI danger rating.
pub enum FwiDangerClass {
    /// FWI 0-5
    Low = 0,
    /// FWI 5-10
    Moderate = 1,
    /// FWI 10-20
    High = 2,
    /// FWI 20-30
    VeryHigh = 3,
    /// FWI 30 and above
    Extreme = 4,
}

impl From<DangerClass> for FwiDangerClass {
    fn from(class: DangerClass) -> Self {
        match class {
            DangerClass::Low => FwiDangerClass::Low,
            DangerClass::Moderate => FwiDangerClass::Moderate,
            DangerClass::High => FwiDangerClass::High,
            DangerClass::VeryHigh => FwiDangerClass::VeryHigh,
            DangerClass::Extreme => FwiDangerClass::Extreme,
        }
    }
}
