//! Run pace math and pace zone classification.

use serde::Serialize;

use crate::error::{DomainError, Result};

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pace in minutes per kilometer, rounded to two decimals.
///
/// Rejects non-positive distances instead of letting the division
/// produce infinity.
pub fn compute_pace(distance_km: f64, duration_min: f64) -> Result<f64> {
    if distance_km <= 0.0 {
        return Err(DomainError::ZeroDistance);
    }
    Ok(round2(duration_min / distance_km))
}

/// Pace zone, classified by fixed min/km thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaceZone {
    Easy,
    Moderate,
    Tempo,
    Fast,
}

impl PaceZone {
    /// Thresholds: > 6.5 easy, > 5.5 moderate, > 4.5 tempo, else fast.
    pub fn classify(pace: f64) -> Self {
        if pace > 6.5 {
            Self::Easy
        } else if pace > 5.5 {
            Self::Moderate
        } else if pace > 4.5 {
            Self::Tempo
        } else {
            Self::Fast
        }
    }
}

/// Run counts per pace zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PaceZoneDistribution {
    pub easy: u32,
    pub moderate: u32,
    pub tempo: u32,
    pub fast: u32,
}

impl PaceZoneDistribution {
    pub fn from_paces<I>(paces: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut zones = Self::default();
        for pace in paces {
            match PaceZone::classify(pace) {
                PaceZone::Easy => zones.easy += 1,
                PaceZone::Moderate => zones.moderate += 1,
                PaceZone::Tempo => zones.tempo += 1,
                PaceZone::Fast => zones.fast += 1,
            }
        }
        zones
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pace_is_duration_over_distance_rounded() {
        assert_eq!(compute_pace(5.0, 30.0).unwrap(), 6.0);
        assert_eq!(compute_pace(3.0, 17.0).unwrap(), 5.67);
    }

    #[test]
    fn zero_distance_is_rejected() {
        assert_eq!(compute_pace(0.0, 30.0), Err(DomainError::ZeroDistance));
        assert_eq!(compute_pace(-1.0, 30.0), Err(DomainError::ZeroDistance));
    }

    #[test]
    fn zone_thresholds_are_exclusive() {
        assert_eq!(PaceZone::classify(7.0), PaceZone::Easy);
        assert_eq!(PaceZone::classify(6.5), PaceZone::Moderate);
        assert_eq!(PaceZone::classify(5.5), PaceZone::Tempo);
        assert_eq!(PaceZone::classify(4.5), PaceZone::Fast);
        assert_eq!(PaceZone::classify(4.0), PaceZone::Fast);
    }

    #[test]
    fn distribution_counts_each_zone() {
        let zones = PaceZoneDistribution::from_paces([7.2, 6.0, 5.0, 4.2, 4.4]);
        assert_eq!(
            zones,
            PaceZoneDistribution {
                easy: 1,
                moderate: 1,
                tempo: 1,
                fast: 2,
            }
        );
    }

    #[test]
    fn empty_distribution_is_all_zeros() {
        assert_eq!(
            PaceZoneDistribution::from_paces([]),
            PaceZoneDistribution::default()
        );
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(5.678), 5.68);
        assert_eq!(round2(5.674), 5.67);
    }
}
