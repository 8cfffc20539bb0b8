//! Plan assembly.
//!
//! [`Planner`] composes weight derivation, hour allocation, daily
//! distribution, topic selection, and resource ranking into the three output
//! shapes. One allocation pass is computed per plan and reused for every
//! week; all weeks of a plan are structurally identical (no week-over-week
//! topic progression — a documented property of the current design that
//! downstream consumers rely on).

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::KnowledgeBase;
use crate::models::{
    GeneratedPlan, Profile, Resource, RotationDay, RotationPlan, RotationWeek, SimplePlan,
    SimpleSubjectPlan, SimpleWeek, Subject, SubjectWeeklyPlan, Weekday, WeeklyPlan,
};

use super::allocation::{allocate_weekly_hours, distribute_daily};
use super::resources::rank_resources;
use super::topics::pick_topics;
use super::weights::derive_subject_weights;
use super::ConfigError;

/// Default number of study blocks per day in the rotation plan.
pub const DEFAULT_BLOCKS_PER_DAY: usize = 6;

/// Subjects allocated fewer hours than this are omitted from weekly plans.
const MIN_WEEKLY_HOURS: f64 = 0.01;

/// Maximum size of the rotation focus set.
const MAX_FOCUS_SUBJECTS: usize = 4;

/// The study-plan engine.
///
/// Owns an immutable [`KnowledgeBase`] and exposes the three plan
/// operations. Generation is deterministic: the same profile against the
/// same tables always produces identical output.
///
/// # Example
///
/// ```
/// use study_schedule::models::{Profile, Subject, Track};
/// use study_schedule::scheduler::Planner;
///
/// let profile = Profile::builder(Track::Verbal)
///     .with_weeks_left(2)
///     .with_hours_per_week(10)
///     .with_subject_level(Subject::NativeLanguage, 3)
///     .build()
///     .unwrap();
///
/// let plan = Planner::with_defaults().generate(&profile).unwrap();
/// assert_eq!(plan.weeks.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Planner {
    knowledge: KnowledgeBase,
}

impl Planner {
    /// Creates a planner over the given knowledge tables.
    pub fn new(knowledge: KnowledgeBase) -> Self {
        Self { knowledge }
    }

    /// Creates a planner over the built-in tables.
    pub fn with_defaults() -> Self {
        Self::new(KnowledgeBase::default())
    }

    /// The knowledge tables in effect.
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Generates the full week-by-week plan with hours, daily distribution,
    /// topics, and resource suggestions.
    pub fn generate(&self, profile: &Profile) -> Result<GeneratedPlan, ConfigError> {
        let weights = derive_subject_weights(profile, &self.knowledge.track_weights)?;
        let hours = allocate_weekly_hours(profile.hours_per_week, &weights);

        let weeks = (1..=profile.weeks_left)
            .map(|week_index| self.build_week(profile, week_index, &hours))
            .collect();

        debug!(
            track = %profile.track,
            weeks = profile.weeks_left,
            hours_per_week = profile.hours_per_week,
            "generated full plan"
        );

        Ok(GeneratedPlan {
            profile: profile.clone(),
            weeks,
            resource_suggestions: self.suggest_resources(profile)?,
        })
    }

    /// Generates the simplified plan: subjects and topics per week, without
    /// hour or daily-distribution detail.
    pub fn generate_simple(&self, profile: &Profile) -> Result<SimplePlan, ConfigError> {
        let weights = derive_subject_weights(profile, &self.knowledge.track_weights)?;
        let hours = allocate_weekly_hours(profile.hours_per_week, &weights);

        let weeks = (1..=profile.weeks_left)
            .map(|week_index| SimpleWeek {
                week_index,
                subjects: hours
                    .iter()
                    .filter(|&(_, &h)| h >= MIN_WEEKLY_HOURS)
                    .map(|(&subject, &h)| SimpleSubjectPlan {
                        subject,
                        topics: pick_topics(
                            &self.knowledge.topics,
                            subject,
                            h,
                            profile.weeks_left,
                        ),
                    })
                    .collect(),
            })
            .collect();

        Ok(SimplePlan {
            weeks,
            resources: self.suggest_resources(profile)?,
        })
    }

    /// Generates the single-week rotation plan with the default
    /// [`DEFAULT_BLOCKS_PER_DAY`] blocks per day.
    pub fn generate_rotation(&self, profile: &Profile) -> Result<RotationPlan, ConfigError> {
        self.generate_rotation_with_blocks(profile, DEFAULT_BLOCKS_PER_DAY)
    }

    /// Generates the single-week rotation plan.
    ///
    /// The focus set is the top `min(4, n)` subjects by derived weight.
    /// Block `i` on day `d` is `focus[(i + d) % focus_len]`, so each day's
    /// block sequence is the previous day's rotated left by one. Hour
    /// allocation is ignored entirely.
    pub fn generate_rotation_with_blocks(
        &self,
        profile: &Profile,
        blocks_per_day: usize,
    ) -> Result<RotationPlan, ConfigError> {
        let weights = derive_subject_weights(profile, &self.knowledge.track_weights)?;

        let mut ranked: Vec<(Subject, f64)> = weights.into_iter().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        let focus: Vec<Subject> = ranked
            .into_iter()
            .map(|(subject, _)| subject)
            .take(MAX_FOCUS_SUBJECTS)
            .collect();

        let days = Weekday::WEEK
            .into_iter()
            .enumerate()
            .map(|(day_index, day)| RotationDay {
                day,
                blocks: if focus.is_empty() {
                    Vec::new()
                } else {
                    (0..blocks_per_day)
                        .map(|block| focus[(block + day_index) % focus.len()])
                        .collect()
                },
            })
            .collect();

        Ok(RotationPlan {
            week: RotationWeek { days },
            resources: self.suggest_resources(profile)?,
        })
    }

    fn build_week(
        &self,
        profile: &Profile,
        week_index: u32,
        hours: &BTreeMap<Subject, f64>,
    ) -> WeeklyPlan {
        let subjects = hours
            .iter()
            .filter(|&(_, &h)| h >= MIN_WEEKLY_HOURS)
            .map(|(&subject, &h)| SubjectWeeklyPlan {
                subject,
                weekly_hours: h,
                daily_distribution: distribute_daily(h),
                topics: pick_topics(&self.knowledge.topics, subject, h, profile.weeks_left),
            })
            .collect();

        WeeklyPlan {
            week_index,
            subjects,
        }
    }

    /// Ranked resource suggestions for every subject the track cares about.
    fn suggest_resources(
        &self,
        profile: &Profile,
    ) -> Result<BTreeMap<Subject, Vec<Resource>>, ConfigError> {
        let base = self
            .knowledge
            .track_weights
            .for_track(profile.track)
            .ok_or(ConfigError::MissingTrackWeights(profile.track))?;

        Ok(base
            .keys()
            .map(|&subject| {
                (
                    subject,
                    rank_resources(&self.knowledge.resources, subject, profile.track),
                )
            })
            .collect())
    }
}
