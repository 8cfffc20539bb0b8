//! Learner profile model.
//!
//! A profile captures everything the engine needs to know about one learner:
//! exam track, planning horizon, weekly time budget, and self-reported
//! proficiency levels. Profiles are immutable once built; out-of-range values
//! are rejected at construction.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Subject;
use crate::validation::{validate_profile, ValidationError};

/// Exam track: determines which subjects matter most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    /// Mathematics and science weighted.
    Quantitative,
    /// Mixed mathematics and verbal weighting.
    QuantVerbal,
    /// Language and social studies weighted.
    Verbal,
    /// Foreign-language weighted.
    Language,
}

impl Track {
    /// All tracks.
    pub const ALL: [Track; 4] = [
        Track::Quantitative,
        Track::QuantVerbal,
        Track::Verbal,
        Track::Language,
    ];

    /// Serialized identifier (kebab-case).
    pub fn id(self) -> &'static str {
        match self {
            Track::Quantitative => "quantitative",
            Track::QuantVerbal => "quant-verbal",
            Track::Verbal => "verbal",
            Track::Language => "language",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A validated learner profile.
///
/// Construct through [`Profile::builder`]; the builder rejects values outside
/// the declared bounds (`weeks_left` 1..=60, `hours_per_week` 1..=80,
/// proficiency levels 1..=5, at least one subject level).
///
/// Subject levels preserve insertion order. The current weight derivation
/// reads only the first entry as the learner's general level, so the first
/// level supplied drives the whole adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Exam track.
    pub track: Track,
    /// Weeks remaining until the exam (1..=60).
    pub weeks_left: u32,
    /// Hours available for study per week (1..=80).
    pub hours_per_week: u32,
    /// Per-subject proficiency levels (1 = weakest, 5 = strongest),
    /// in insertion order.
    pub subject_levels: Vec<(Subject, u8)>,
    /// Whether the secondary (advanced) exam is included. Carried as profile
    /// data; the engine does not consult it yet.
    pub include_secondary_exam: bool,
}

impl Profile {
    /// Starts building a profile for the given track.
    pub fn builder(track: Track) -> ProfileBuilder {
        ProfileBuilder {
            name: None,
            track,
            weeks_left: 1,
            hours_per_week: 1,
            subject_levels: Vec::new(),
            include_secondary_exam: true,
        }
    }

    /// The learner's general proficiency level: the first subject level
    /// supplied. Falls back to the midpoint (3) for an empty map, which
    /// validation rejects in practice.
    pub fn general_level(&self) -> u8 {
        self.subject_levels.first().map_or(3, |&(_, level)| level)
    }

    /// Looks up the level for a specific subject, if one was supplied.
    pub fn level_for(&self, subject: Subject) -> Option<u8> {
        self.subject_levels
            .iter()
            .find(|&&(s, _)| s == subject)
            .map(|&(_, level)| level)
    }
}

/// Builder for [`Profile`].
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    name: Option<String>,
    track: Track,
    weeks_left: u32,
    hours_per_week: u32,
    subject_levels: Vec<(Subject, u8)>,
    include_secondary_exam: bool,
}

impl ProfileBuilder {
    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the planning horizon in weeks.
    pub fn with_weeks_left(mut self, weeks: u32) -> Self {
        self.weeks_left = weeks;
        self
    }

    /// Sets the weekly hour budget.
    pub fn with_hours_per_week(mut self, hours: u32) -> Self {
        self.hours_per_week = hours;
        self
    }

    /// Adds a proficiency level for a subject. The first level added acts as
    /// the general level during weight derivation.
    pub fn with_subject_level(mut self, subject: Subject, level: u8) -> Self {
        self.subject_levels.push((subject, level));
        self
    }

    /// Sets whether the secondary exam is included.
    pub fn with_secondary_exam(mut self, include: bool) -> Self {
        self.include_secondary_exam = include;
        self
    }

    /// Validates the collected fields and builds the profile.
    ///
    /// Returns all detected violations, not just the first.
    pub fn build(self) -> Result<Profile, Vec<ValidationError>> {
        let profile = Profile {
            name: self.name,
            track: self.track,
            weeks_left: self.weeks_left,
            hours_per_week: self.hours_per_week,
            subject_levels: self.subject_levels,
            include_secondary_exam: self.include_secondary_exam,
        };
        validate_profile(&profile)?;
        Ok(profile)
    }
}
