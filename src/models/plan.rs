//! Plan (solution) models.
//!
//! Three output shapes, all built from the same allocation pass:
//!
//! - [`GeneratedPlan`]: full week-by-week plan with hours, daily
//!   distribution, topics, and resource suggestions
//! - [`SimplePlan`]: week-by-week subjects and topics without hour detail
//! - [`RotationPlan`]: a single week of per-day subject blocks rotating over
//!   the focus set

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Profile, Resource, Subject, Weekday};

/// One subject's schedule for a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectWeeklyPlan {
    /// The subject.
    pub subject: Subject,
    /// Hours allotted to the subject this week.
    pub weekly_hours: f64,
    /// Hours per day, Monday through Sunday. Sums exactly to `weekly_hours`;
    /// Sunday absorbs the rounding remainder.
    pub daily_distribution: BTreeMap<Weekday, f64>,
    /// Topics to cover, a prefix of the subject's topic catalog.
    pub topics: Vec<String>,
}

impl SubjectWeeklyPlan {
    /// Sum of the per-day hours.
    pub fn daily_total(&self) -> f64 {
        self.daily_distribution.values().sum()
    }
}

/// One week of the full plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPlan {
    /// 1-based week number.
    pub week_index: u32,
    /// Subject schedules, in canonical subject order. Subjects with a
    /// near-zero allocation are omitted.
    pub subjects: Vec<SubjectWeeklyPlan>,
}

impl WeeklyPlan {
    /// Looks up the schedule for a subject, if present this week.
    pub fn subject_plan(&self, subject: Subject) -> Option<&SubjectWeeklyPlan> {
        self.subjects.iter().find(|sp| sp.subject == subject)
    }

    /// Total hours allocated this week across subjects.
    pub fn total_hours(&self) -> f64 {
        self.subjects.iter().map(|sp| sp.weekly_hours).sum()
    }
}

/// A complete multi-week study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlan {
    /// The profile the plan was generated for.
    pub profile: Profile,
    /// Weeks 1 through `profile.weeks_left`.
    pub weeks: Vec<WeeklyPlan>,
    /// Ranked resource suggestions per subject (at most 5 each).
    pub resource_suggestions: BTreeMap<Subject, Vec<Resource>>,
}

impl GeneratedPlan {
    /// Looks up a week by its 1-based index.
    pub fn week(&self, week_index: u32) -> Option<&WeeklyPlan> {
        self.weeks.iter().find(|w| w.week_index == week_index)
    }
}

/// One subject's entry in the simplified plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleSubjectPlan {
    /// The subject.
    pub subject: Subject,
    /// Topics to cover.
    pub topics: Vec<String>,
}

/// One week of the simplified plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleWeek {
    /// 1-based week number.
    pub week_index: u32,
    /// Subjects with their topic subsets.
    pub subjects: Vec<SimpleSubjectPlan>,
}

/// A multi-week plan without hour detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePlan {
    /// Weeks 1 through `weeks_left`.
    pub weeks: Vec<SimpleWeek>,
    /// Ranked resource suggestions per subject.
    pub resources: BTreeMap<Subject, Vec<Resource>>,
}

/// One day of the rotation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationDay {
    /// The day.
    pub day: Weekday,
    /// Study blocks in order; each block names one focus subject.
    pub blocks: Vec<Subject>,
}

/// The single week of a rotation plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationWeek {
    /// The seven days in week order.
    pub days: Vec<RotationDay>,
}

/// A single-week block plan rotating through the focus subjects.
///
/// Ignores hour allocation entirely; each day's block sequence is the
/// previous day's rotated left by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationPlan {
    /// The rotation week.
    pub week: RotationWeek,
    /// Ranked resource suggestions per subject.
    pub resources: BTreeMap<Subject, Vec<Resource>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_subject_plan() -> SubjectWeeklyPlan {
        let mut daily = BTreeMap::new();
        for (i, day) in Weekday::WEEK.into_iter().enumerate() {
            daily.insert(day, if i == 6 { 1.0 } else { 0.5 });
        }
        SubjectWeeklyPlan {
            subject: Subject::Mathematics,
            weekly_hours: 4.0,
            daily_distribution: daily,
            topics: vec!["Basic Concepts".into(), "Number Systems".into()],
        }
    }

    #[test]
    fn test_daily_total() {
        assert_eq!(sample_subject_plan().daily_total(), 4.0);
    }

    #[test]
    fn test_week_lookup() {
        let week = WeeklyPlan {
            week_index: 1,
            subjects: vec![sample_subject_plan()],
        };
        assert!(week.subject_plan(Subject::Mathematics).is_some());
        assert!(week.subject_plan(Subject::Physics).is_none());
        assert_eq!(week.total_hours(), 4.0);
    }

    #[test]
    fn test_daily_distribution_serializes_in_week_order() {
        let json = serde_json::to_string(&sample_subject_plan()).unwrap();
        let monday = json.find("Monday").unwrap();
        let sunday = json.find("Sunday").unwrap();
        assert!(monday < sunday);
    }
}
