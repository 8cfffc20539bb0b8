//! Profile validation.
//!
//! Checks a learner profile against the declared bounds before it reaches the
//! engine. Detects:
//! - Planning horizon outside 1..=60 weeks
//! - Weekly hour budget outside 1..=80 hours
//! - Proficiency levels outside 1..=5
//! - Missing or duplicated subject levels
//!
//! The engine itself never produces validation errors; it consumes only
//! profiles that passed these checks.

use std::collections::HashSet;

use crate::models::Profile;

/// Bounds for the planning horizon (weeks).
pub const WEEKS_RANGE: std::ops::RangeInclusive<u32> = 1..=60;
/// Bounds for the weekly hour budget.
pub const HOURS_RANGE: std::ops::RangeInclusive<u32> = 1..=80;
/// Bounds for proficiency levels.
pub const LEVEL_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `weeks_left` outside [`WEEKS_RANGE`].
    WeeksOutOfRange,
    /// `hours_per_week` outside [`HOURS_RANGE`].
    HoursOutOfRange,
    /// A proficiency level outside [`LEVEL_RANGE`].
    LevelOutOfRange,
    /// No subject levels supplied.
    NoSubjectLevels,
    /// The same subject appears twice in the level map.
    DuplicateSubjectLevel,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a profile against the declared bounds.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_profile(profile: &Profile) -> ValidationResult {
    let mut errors = Vec::new();

    if !WEEKS_RANGE.contains(&profile.weeks_left) {
        errors.push(ValidationError::new(
            ValidationErrorKind::WeeksOutOfRange,
            format!(
                "weeks_left must be within {}..={}, got {}",
                WEEKS_RANGE.start(),
                WEEKS_RANGE.end(),
                profile.weeks_left
            ),
        ));
    }

    if !HOURS_RANGE.contains(&profile.hours_per_week) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HoursOutOfRange,
            format!(
                "hours_per_week must be within {}..={}, got {}",
                HOURS_RANGE.start(),
                HOURS_RANGE.end(),
                profile.hours_per_week
            ),
        ));
    }

    if profile.subject_levels.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoSubjectLevels,
            "at least one subject level is required",
        ));
    }

    let mut seen = HashSet::new();
    for &(subject, level) in &profile.subject_levels {
        if !LEVEL_RANGE.contains(&level) {
            errors.push(ValidationError::new(
                ValidationErrorKind::LevelOutOfRange,
                format!("level for '{subject}' must be within 1..=5, got {level}"),
            ));
        }
        if !seen.insert(subject) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSubjectLevel,
                format!("duplicate level entry for '{subject}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Subject, Track};

    fn base_profile() -> Profile {
        Profile {
            name: None,
            track: Track::Quantitative,
            weeks_left: 4,
            hours_per_week: 20,
            subject_levels: vec![(Subject::Mathematics, 3)],
            include_secondary_exam: true,
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(validate_profile(&base_profile()).is_ok());
    }

    #[test]
    fn test_weeks_out_of_range() {
        let mut profile = base_profile();
        profile.weeks_left = 61;
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::WeeksOutOfRange));
    }

    #[test]
    fn test_hours_out_of_range() {
        let mut profile = base_profile();
        profile.hours_per_week = 0;
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HoursOutOfRange));
    }

    #[test]
    fn test_level_out_of_range() {
        let mut profile = base_profile();
        profile.subject_levels.push((Subject::Physics, 0));
        profile.subject_levels.push((Subject::Chemistry, 6));
        let errors = validate_profile(&profile).unwrap_err();
        let level_errors = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::LevelOutOfRange)
            .count();
        assert_eq!(level_errors, 2);
    }

    #[test]
    fn test_empty_subject_levels() {
        let mut profile = base_profile();
        profile.subject_levels.clear();
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoSubjectLevels));
    }

    #[test]
    fn test_duplicate_subject_level() {
        let mut profile = base_profile();
        profile.subject_levels.push((Subject::Mathematics, 5));
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSubjectLevel));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let profile = Profile {
            name: None,
            track: Track::Verbal,
            weeks_left: 0,
            hours_per_week: 999,
            subject_levels: vec![],
            include_secondary_exam: false,
        };
        let errors = validate_profile(&profile).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
