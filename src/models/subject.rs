//! Subject catalog keys.
//!
//! Subjects form a closed set so that catalog lookups are checked at compile
//! time instead of silently yielding empty lists at runtime. The declaration
//! order is the canonical output order for every ordered map keyed on
//! `Subject`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A study subject.
///
/// Used as the key for topic catalogs, resource catalogs, and track weight
/// tables. Serialized as its display name (e.g. `"Native Language"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Geometry,
    Physics,
    Chemistry,
    Biology,
    #[serde(rename = "Native Language")]
    NativeLanguage,
    #[serde(rename = "Social Studies")]
    SocialStudies,
    #[serde(rename = "Foreign Language")]
    ForeignLanguage,
}

impl Subject {
    /// All subjects in canonical order.
    pub const ALL: [Subject; 8] = [
        Subject::Mathematics,
        Subject::Geometry,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::NativeLanguage,
        Subject::SocialStudies,
        Subject::ForeignLanguage,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Geometry => "Geometry",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::NativeLanguage => "Native Language",
            Subject::SocialStudies => "Social Studies",
            Subject::ForeignLanguage => "Foreign Language",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
