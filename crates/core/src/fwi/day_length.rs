//! Latitude and season adjustment for the DMC and DC drying terms
//!
//! Drying of the duff and deep organic layers scales with the length of the day. The original
//! system used a single table calibrated for about 46°N; the latitude-adjusted tables extend it
//! to the tropics and the southern hemisphere.
//!
//! Each table is indexed by month (January = 0). Latitude bands are stored as data, ordered from
//! north to south; a latitude belongs to the first band whose lower edge it exceeds, so every
//! latitude in `[-90, 90]` falls in exactly one band and band edges belong to the band below.
//!
//! # References
//! - Van Wagner (1987), Table 2 and Table 3
//! - Lawson & Armitage (2008). "Weather guide for the Canadian Forest Fire Danger Rating System"

use crate::core_types::weather::{check_latitude, check_month};
use crate::core_types::Degrees;
use crate::error::Result;

/// DMC effective day length (hours), 30°N and north.
const DMC_DAY_LENGTH_NORTH: [f64; 12] = [
    6.5, 7.5, 9.0, 12.8, 13.9, 13.9, 12.4, 10.9, 9.4, 8.0, 7.0, 6.0,
];

/// DMC effective day length (hours), 10°N to 30°N.
const DMC_DAY_LENGTH_NORTH_TROPIC: [f64; 12] = [
    7.9, 8.4, 8.9, 9.5, 9.9, 10.2, 10.1, 9.7, 9.1, 8.6, 8.1, 7.8,
];

/// DMC effective day length (hours), 10°S to 10°N.
const DMC_DAY_LENGTH_EQUATOR: [f64; 12] = [9.0; 12];

/// DMC effective day length (hours), 30°S to 10°S.
const DMC_DAY_LENGTH_SOUTH_TROPIC: [f64; 12] = [
    10.1, 9.6, 9.1, 8.5, 8.1, 7.8, 7.9, 8.3, 8.9, 9.4, 9.9, 10.2,
];

/// DMC effective day length (hours), 30°S and south.
const DMC_DAY_LENGTH_SOUTH: [f64; 12] = [
    11.5, 10.5, 9.2, 7.9, 6.8, 6.2, 6.5, 7.4, 8.7, 10.0, 11.2, 11.8,
];

/// DC day-length factor, 20°N and north.
const DC_DAY_LENGTH_NORTH: [f64; 12] = [
    -1.6, -1.6, -1.6, 0.9, 3.8, 5.8, 6.4, 5.0, 2.4, 0.4, -1.6, -1.6,
];

/// DC day-length factor, 20°S to 20°N.
const DC_DAY_LENGTH_EQUATOR: [f64; 12] = [1.4; 12];

/// DC day-length factor, 20°S and south. The northern table shifted by six months.
const DC_DAY_LENGTH_SOUTH: [f64; 12] = [
    6.4, 5.0, 2.4, 0.4, -1.6, -1.6, -1.6, -1.6, -1.6, 0.9, 3.8, 5.8,
];

/// A band of latitudes sharing one monthly table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LatitudeBand {
    /// Exclusive lower edge of the band in degrees.
    pub(crate) above: f64,
    pub(crate) table: &'static [f64; 12],
}

/// DMC bands, north to south.
pub(crate) const DMC_BANDS: [LatitudeBand; 5] = [
    LatitudeBand {
        above: 30.0,
        table: &DMC_DAY_LENGTH_NORTH,
    },
    LatitudeBand {
        above: 10.0,
        table: &DMC_DAY_LENGTH_NORTH_TROPIC,
    },
    LatitudeBand {
        above: -10.0,
        table: &DMC_DAY_LENGTH_EQUATOR,
    },
    LatitudeBand {
        above: -30.0,
        table: &DMC_DAY_LENGTH_SOUTH_TROPIC,
    },
    LatitudeBand {
        above: f64::NEG_INFINITY,
        table: &DMC_DAY_LENGTH_SOUTH,
    },
];

/// DC bands, north to south.
pub(crate) const DC_BANDS: [LatitudeBand; 3] = [
    LatitudeBand {
        above: 20.0,
        table: &DC_DAY_LENGTH_NORTH,
    },
    LatitudeBand {
        above: -20.0,
        table: &DC_DAY_LENGTH_EQUATOR,
    },
    LatitudeBand {
        above: f64::NEG_INFINITY,
        table: &DC_DAY_LENGTH_SOUTH,
    },
];

/// Pick the table for a latitude. The last band is open-ended so a match always exists.
pub(crate) fn band_table(bands: &[LatitudeBand], latitude: f64) -> &'static [f64; 12] {
    bands
        .iter()
        .find(|band| latitude > band.above)
        .unwrap_or(&bands[bands.len() - 1])
        .table
}

/// DMC effective day length for a validated latitude and zero-based month index.
///
/// Without latitude adjustment the northern (46°N calibration) table is used everywhere.
pub(crate) fn dmc_day_length_at(latitude: f64, month_index: usize, latitude_adjust: bool) -> f64 {
    let table = if latitude_adjust {
        band_table(&DMC_BANDS, latitude)
    } else {
        &DMC_DAY_LENGTH_NORTH
    };
    table[month_index]
}

/// DC day-length factor for a validated latitude and zero-based month index.
pub(crate) fn dc_day_length_at(latitude: f64, month_index: usize, latitude_adjust: bool) -> f64 {
    let table = if latitude_adjust {
        band_table(&DC_BANDS, latitude)
    } else {
        &DC_DAY_LENGTH_NORTH
    };
    table[month_index]
}

/// Effective day length (hours) used by the DMC drying term.
///
/// # Errors
/// [`crate::FwiError::OutOfDomain`] for a latitude outside `[-90, 90]`,
/// [`crate::FwiError::InvalidMonth`] for a month outside `1..=12`.
pub fn dmc_day_length(latitude: Degrees, month: u8, latitude_adjust: bool) -> Result<f64> {
    let (latitude, month_index) = checked_latitude_month(latitude, month)?;
    Ok(dmc_day_length_at(latitude, month_index, latitude_adjust))
}

/// Day-length factor (Lf) used by the DC potential evapotranspiration term.
///
/// # Errors
/// [`crate::FwiError::OutOfDomain`] for a latitude outside `[-90, 90]`,
/// [`crate::FwiError::InvalidMonth`] for a month outside `1..=12`.
pub fn dc_day_length_factor(latitude: Degrees, month: u8, latitude_adjust: bool) -> Result<f64> {
    let (latitude, month_index) = checked_latitude_month(latitude, month)?;
    Ok(dc_day_length_at(latitude, month_index, latitude_adjust))
}

fn checked_latitude_month(latitude: Degrees, month: u8) -> Result<(f64, usize)> {
    Ok((check_latitude(latitude)?, check_month(month)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FwiError;

    #[test]
    fn test_northern_july_day_length() {
        assert_eq!(dmc_day_length(Degrees::new(49.75), 7, true), Ok(12.4));
        assert_eq!(dc_day_length_factor(Degrees::new(49.75), 7, true), Ok(6.4));
    }

    #[test]
    fn test_band_edges_belong_to_band_below() {
        // 30°N is in the 10-30°N band, 10°N in the equatorial band
        assert_eq!(dmc_day_length_at(30.0, 0, true), 7.9);
        assert_eq!(dmc_day_length_at(30.000001, 0, true), 6.5);
        assert_eq!(dmc_day_length_at(10.0, 0, true), 9.0);
        assert_eq!(dmc_day_length_at(-10.0, 0, true), 10.1);
        assert_eq!(dmc_day_length_at(-30.0, 0, true), 11.5);
        assert_eq!(dc_day_length_at(20.0, 0, true), 1.4);
        assert_eq!(dc_day_length_at(-20.0, 0, true), 6.4);
    }

    #[test]
    fn test_every_latitude_resolves_to_one_band() {
        let mut latitude = -90.0;
        while latitude <= 90.0 {
            let dmc_hits = DMC_BANDS
                .iter()
                .position(|band| latitude > band.above)
                .expect("open-ended southern band");
            let dc_hits = DC_BANDS
                .iter()
                .position(|band| latitude > band.above)
                .expect("open-ended southern band");
            assert!(dmc_hits < DMC_BANDS.len());
            assert!(dc_hits < DC_BANDS.len());
            latitude += 0.25;
        }
    }

    #[test]
    fn test_band_edges_strictly_descend() {
        for pair in DMC_BANDS.windows(2) {
            assert!(pair[0].above > pair[1].above);
        }
        for pair in DC_BANDS.windows(2) {
            assert!(pair[0].above > pair[1].above);
        }
    }

    #[test]
    fn test_southern_dc_table_is_northern_shifted_six_months() {
        for (month, factor) in DC_DAY_LENGTH_SOUTH.iter().enumerate() {
            assert_eq!(*factor, DC_DAY_LENGTH_NORTH[(month + 6) % 12]);
        }
    }

    #[test]
    fn test_without_adjustment_uses_northern_table() {
        assert_eq!(dmc_day_length_at(-45.0, 6, false), 12.4);
        assert_eq!(dc_day_length_at(0.0, 6, false), 6.4);
    }

    #[test]
    fn test_december_and_january_are_table_ends() {
        assert_eq!(dmc_day_length(Degrees::new(55.0), 12, true), Ok(6.0));
        assert_eq!(dmc_day_length(Degrees::new(55.0), 1, true), Ok(6.5));
    }

    #[test]
    fn test_invalid_month_rejected() {
        assert_eq!(
            dmc_day_length(Degrees::new(55.0), 13, true),
            Err(FwiError::InvalidMonth { month: 13 })
        );
    }
}
