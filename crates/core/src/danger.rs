//! Danger classification of computed indices
//!
//! The engine only produces numbers. Which FWI values count as "High" is an agency decision, so
//! thresholds are caller configuration: an ascending list of `(minimum_fwi, category)` bands,
//! the last band open-ended. [`DangerClass::standard_thresholds`] is a ready-made preset.
//!
//! Callers with a policy over other indices (BUI-weighted classes, ISI for spread warnings)
//! implement [`DangerClassifier`] themselves.

use crate::core_types::DerivedIndices;
use crate::error::{check_non_negative, FwiError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Standard FWI danger class ranges
///
/// Commonly used breakpoints for the FWI. Ranges use `[start, end)` notation (start inclusive,
/// end exclusive).
pub mod fwi_ranges {
    use std::ops::{Range, RangeFrom};

    /// "Low" range `[0.0, 5.0)`
    pub const LOW: Range<f64> = 0.0..5.0;

    /// "Moderate" range `[5.0, 10.0)`
    pub const MODERATE: Range<f64> = 5.0..10.0;

    /// "High" range `[10.0, 20.0)`
    pub const HIGH: Range<f64> = 10.0..20.0;

    /// "Very High" range `[20.0, 30.0)`
    pub const VERY_HIGH: Range<f64> = 20.0..30.0;

    /// "Extreme" `[30.0, ∞)`
    pub const EXTREME: RangeFrom<f64> = 30.0..;
}

/// Extension point mapping a day's indices to a danger category.
pub trait DangerClassifier {
    /// Category type produced by this classifier.
    type Class;

    /// Classify one day's indices. `None` means the indices fall below every category.
    fn classify_indices(&self, indices: &DerivedIndices) -> Option<Self::Class>;
}

/// One danger band: every FWI at or above `minimum_fwi` (and below the next band) maps to
/// `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DangerBand<C> {
    /// Inclusive lower FWI bound of the band.
    pub minimum_fwi: f64,
    /// Category reported for the band.
    pub category: C,
}

/// Caller-supplied FWI thresholds, strictly ascending by minimum.
///
/// Serializes as a plain list of bands; deserializing re-validates the list.
///
/// # Example
/// ```
/// use fwi_core::DangerThresholds;
///
/// let thresholds = DangerThresholds::new(vec![(0.0, "nil"), (8.0, "watch"), (25.0, "act")])
///     .unwrap();
/// assert_eq!(thresholds.classify(12.0).unwrap(), Some(&"watch"));
/// assert_eq!(thresholds.classify(90.0).unwrap(), Some(&"act"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DangerThresholds<C> {
    bands: Vec<DangerBand<C>>,
}

impl<C> DangerThresholds<C> {
    /// Build thresholds from `(minimum_fwi, category)` pairs.
    ///
    /// # Errors
    /// [`FwiError::EmptyThresholds`] for an empty list, [`FwiError::InvalidThreshold`] for a
    /// negative or non-finite minimum and [`FwiError::UnorderedThresholds`] when minimums are
    /// not strictly ascending.
    pub fn new(bands: Vec<(f64, C)>) -> Result<Self> {
        Self::from_bands(
            bands
                .into_iter()
                .map(|(minimum_fwi, category)| DangerBand {
                    minimum_fwi,
                    category,
                })
                .collect(),
        )
    }

    /// Build thresholds from already-formed bands.
    ///
    /// # Errors
    /// Same as [`DangerThresholds::new`].
    pub fn from_bands(bands: Vec<DangerBand<C>>) -> Result<Self> {
        if bands.is_empty() {
            return Err(FwiError::EmptyThresholds);
        }
        for band in &bands {
            if !(band.minimum_fwi.is_finite() && band.minimum_fwi >= 0.0) {
                return Err(FwiError::InvalidThreshold {
                    minimum: band.minimum_fwi,
                });
            }
        }
        for pair in bands.windows(2) {
            if pair[1].minimum_fwi <= pair[0].minimum_fwi {
                return Err(FwiError::UnorderedThresholds {
                    previous: pair[0].minimum_fwi,
                    next: pair[1].minimum_fwi,
                });
            }
        }
        Ok(DangerThresholds { bands })
    }

    /// Bands in ascending order.
    pub fn bands(&self) -> &[DangerBand<C>] {
        &self.bands
    }

    /// Category of the highest band whose minimum is at or below `fwi`.
    ///
    /// # Returns
    /// `None` when `fwi` is below the first band's minimum
    ///
    /// # Errors
    /// [`FwiError::OutOfDomain`] or [`FwiError::NonFinite`] for a negative or non-finite FWI.
    pub fn classify(&self, fwi: f64) -> Result<Option<&C>> {
        let fwi = check_non_negative("fwi", fwi)?;
        Ok(self
            .bands
            .iter()
            .rev()
            .find(|band| fwi >= band.minimum_fwi)
            .map(|band| &band.category))
    }
}

impl<C: Clone> DangerClassifier for DangerThresholds<C> {
    type Class = C;

    fn classify_indices(&self, indices: &DerivedIndices) -> Option<C> {
        self.classify(indices.fwi).ok().flatten().cloned()
    }
}

impl<C: Serialize> Serialize for DangerThresholds<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.bands.serialize(serializer)
    }
}

impl<'de, C: Deserialize<'de>> Deserialize<'de> for DangerThresholds<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let bands = Vec::<DangerBand<C>>::deserialize(deserializer)?;
        Self::from_bands(bands).map_err(serde::de::Error::custom)
    }
}

/// Conventional five-class FWI danger rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DangerClass {
    /// FWI 0-5
    Low,
    /// FWI 5-10
    Moderate,
    /// FWI 10-20
    High,
    /// FWI 20-30
    VeryHigh,
    /// FWI 30 and above
    Extreme,
}

impl DangerClass {
    /// Class for an FWI using the [`fwi_ranges`] breakpoints.
    ///
    /// Returns `None` for a negative or NaN FWI.
    pub fn from_fwi(fwi: f64) -> Option<Self> {
        match fwi {
            _ if fwi_ranges::LOW.contains(&fwi) => Some(DangerClass::Low),
            _ if fwi_ranges::MODERATE.contains(&fwi) => Some(DangerClass::Moderate),
            _ if fwi_ranges::HIGH.contains(&fwi) => Some(DangerClass::High),
            _ if fwi_ranges::VERY_HIGH.contains(&fwi) => Some(DangerClass::VeryHigh),
            _ if fwi_ranges::EXTREME.contains(&fwi) => Some(DangerClass::Extreme),
            _ => None,
        }
    }

    /// The [`fwi_ranges`] breakpoints as configurable thresholds.
    pub fn standard_thresholds() -> DangerThresholds<DangerClass> {
        let band = |minimum_fwi, category| DangerBand {
            minimum_fwi,
            category,
        };
        DangerThresholds {
            bands: vec![
                band(fwi_ranges::LOW.start, DangerClass::Low),
                band(fwi_ranges::MODERATE.start, DangerClass::Moderate),
                band(fwi_ranges::HIGH.start, DangerClass::High),
                band(fwi_ranges::VERY_HIGH.start, DangerClass::VeryHigh),
                band(fwi_ranges::EXTREME.start, DangerClass::Extreme),
            ],
        }
    }
}

impl fmt::Display for DangerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DangerClass::Low => "Low",
            DangerClass::Moderate => "Moderate",
            DangerClass::High => "High",
            DangerClass::VeryHigh => "Very High",
            DangerClass::Extreme => "Extreme",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_thresholds_are_valid() {
        let standard = DangerClass::standard_thresholds();
        let rebuilt = DangerThresholds::from_bands(standard.bands().to_vec()).unwrap();
        assert_eq!(rebuilt, standard);
    }

    #[test]
    fn test_band_minimum_is_inclusive() {
        let standard = DangerClass::standard_thresholds();
        assert_eq!(standard.classify(4.999).unwrap(), Some(&DangerClass::Low));
        assert_eq!(standard.classify(5.0).unwrap(), Some(&DangerClass::Moderate));
        assert_eq!(standard.classify(30.0).unwrap(), Some(&DangerClass::Extreme));
        assert_eq!(standard.classify(250.0).unwrap(), Some(&DangerClass::Extreme));
    }

    #[test]
    fn test_thresholds_agree_with_ranges() {
        let standard = DangerClass::standard_thresholds();
        for fwi in [0.0, 2.5, 5.0, 9.99, 10.0, 19.5, 20.0, 29.9, 30.0, 75.0] {
            assert_eq!(
                standard.classify(fwi).unwrap().copied(),
                DangerClass::from_fwi(fwi),
                "fwi {fwi}"
            );
        }
    }

    #[test]
    fn test_below_first_band_is_unclassified() {
        let thresholds = DangerThresholds::new(vec![(3.0, "watch"), (12.0, "alert")]).unwrap();
        assert_eq!(thresholds.classify(2.9).unwrap(), None);
        assert_eq!(thresholds.classify(3.0).unwrap(), Some(&"watch"));
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert_eq!(
            DangerThresholds::<u8>::new(vec![]),
            Err(FwiError::EmptyThresholds)
        );
        assert_eq!(
            DangerThresholds::new(vec![(-1.0, 0u8)]),
            Err(FwiError::InvalidThreshold { minimum: -1.0 })
        );
        assert_eq!(
            DangerThresholds::new(vec![(0.0, 0u8), (10.0, 1), (10.0, 2)]),
            Err(FwiError::UnorderedThresholds {
                previous: 10.0,
                next: 10.0
            })
        );
        assert!(matches!(
            DangerThresholds::new(vec![(f64::NAN, 0u8)]),
            Err(FwiError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn test_classify_rejects_negative_fwi() {
        let standard = DangerClass::standard_thresholds();
        assert!(standard.classify(-0.1).is_err());
        assert_eq!(DangerClass::from_fwi(-0.1), None);
    }

    #[test]
    fn test_classifier_trait_uses_fwi() {
        let indices = DerivedIndices {
            isi: 10.85,
            bui: 8.58,
            fwi: 10.14,
            dsr: 1.64,
        };
        let standard = DangerClass::standard_thresholds();
        assert_eq!(standard.classify_indices(&indices), Some(DangerClass::High));
    }

    #[test]
    fn test_custom_classifier_over_other_indices() {
        struct SpreadWarning;
        impl DangerClassifier for SpreadWarning {
            type Class = bool;
            fn classify_indices(&self, indices: &DerivedIndices) -> Option<bool> {
                Some(indices.isi >= 15.0)
            }
        }
        let calm = DerivedIndices::default();
        assert_eq!(SpreadWarning.classify_indices(&calm), Some(false));
    }

    #[test]
    fn test_thresholds_load_from_json() {
        let json = r#"[{"minimum_fwi":0.0,"category":"Low"},{"minimum_fwi":19.0,"category":"Extreme"}]"#;
        let thresholds: DangerThresholds<DangerClass> = serde_json::from_str(json).unwrap();
        assert_eq!(thresholds.classify(20.0).unwrap(), Some(&DangerClass::Extreme));

        let unordered = r#"[{"minimum_fwi":5.0,"category":"Low"},{"minimum_fwi":1.0,"category":"High"}]"#;
        assert!(serde_json::from_str::<DangerThresholds<DangerClass>>(unordered).is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(DangerClass::VeryHigh.to_string(), "Very High");
        assert!(DangerClass::Extreme > DangerClass::Low);
    }
}
