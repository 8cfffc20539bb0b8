//! Subject weight derivation.
//!
//! Converts a track's base importance weights and the learner's general
//! proficiency level into a normalized per-subject importance distribution.
//! Lower proficiency widens the gap to the top level, scaling every weight
//! up before normalization, so weaker learners get relatively more hours on
//! every subject the track cares about.

use std::collections::BTreeMap;

use crate::catalog::TrackWeights;
use crate::models::{Profile, Subject};

use super::ConfigError;

/// Scale factor applied per point of proficiency gap.
const GAP_SCALE: f64 = 0.12;

/// Derives the normalized subject weight distribution for a profile.
///
/// The general level is the first entry of the profile's subject levels;
/// `gap = 6 - level` (1..=5 for valid levels). Each base weight is scaled by
/// `1 + gap * GAP_SCALE`, negatives are clamped to zero, and the result is
/// normalized to sum to 1.
///
/// # Errors
/// [`ConfigError::MissingTrackWeights`] if the table has no entry for the
/// profile's track. This should not occur with the built-in tables.
pub(crate) fn derive_subject_weights(
    profile: &Profile,
    table: &TrackWeights,
) -> Result<BTreeMap<Subject, f64>, ConfigError> {
    let base = table
        .for_track(profile.track)
        .ok_or(ConfigError::MissingTrackWeights(profile.track))?;

    let gap = f64::from(6 - i32::from(profile.general_level()));
    let scaled = base
        .iter()
        .map(|(&subject, &weight)| (subject, weight * (1.0 + gap * GAP_SCALE)))
        .collect();

    Ok(normalize(scaled))
}

/// Normalizes weights to sum to 1, clamping negatives to zero first.
///
/// When every weight is non-positive the divisor falls back to 1.0, yielding
/// an all-zero distribution instead of dividing by zero.
fn normalize(values: BTreeMap<Subject, f64>) -> BTreeMap<Subject, f64> {
    let total: f64 = values.values().map(|v| v.max(0.0)).sum();
    let total = if total > 0.0 { total } else { 1.0 };
    values
        .into_iter()
        .map(|(subject, v)| (subject, v.max(0.0) / total))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Track;

    fn profile_with_level(level: u8) -> Profile {
        Profile::builder(Track::Quantitative)
            .with_weeks_left(4)
            .with_hours_per_week(20)
            .with_subject_level(Subject::Mathematics, level)
            .build()
            .unwrap()
    }

    #[test]
    fn test_weights_sum_to_one() {
        let table = TrackWeights::default();
        for level in 1..=5 {
            let weights = derive_subject_weights(&profile_with_level(level), &table).unwrap();
            let sum: f64 = weights.values().sum();
            assert!((sum - 1.0).abs() < 1e-9, "level {level}: sum {sum}");
        }
    }

    #[test]
    fn test_uniform_scaling_preserves_relative_order() {
        // All base weights are scaled by the same factor, so the ordering
        // between subjects must match the base table.
        let table = TrackWeights::default();
        let weights = derive_subject_weights(&profile_with_level(2), &table).unwrap();
        assert!(weights[&Subject::Mathematics] > weights[&Subject::SocialStudies]);
        assert!(weights[&Subject::Physics] > weights[&Subject::ForeignLanguage]);
    }

    #[test]
    fn test_covers_every_base_subject() {
        let table = TrackWeights::default();
        let weights = derive_subject_weights(&profile_with_level(3), &table).unwrap();
        assert_eq!(weights.len(), Subject::ALL.len());
        assert!(weights.values().all(|&w| (0.0..=1.0).contains(&w)));
    }

    #[test]
    fn test_missing_track_is_config_error() {
        let empty = TrackWeights::new();
        let err = derive_subject_weights(&profile_with_level(3), &empty).unwrap_err();
        assert_eq!(err, ConfigError::MissingTrackWeights(Track::Quantitative));
    }

    #[test]
    fn test_normalize_clamps_negatives() {
        let mut values = BTreeMap::new();
        values.insert(Subject::Mathematics, 2.0);
        values.insert(Subject::Physics, -1.0);
        let normalized = normalize(values);
        assert_eq!(normalized[&Subject::Physics], 0.0);
        assert_eq!(normalized[&Subject::Mathematics], 1.0);
    }

    #[test]
    fn test_normalize_all_non_positive_yields_zeros() {
        let mut values = BTreeMap::new();
        values.insert(Subject::Mathematics, -2.0);
        values.insert(Subject::Physics, 0.0);
        let normalized = normalize(values);
        assert!(normalized.values().all(|&v| v == 0.0));
    }
}
