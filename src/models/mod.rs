//! Study-planning domain models.
//!
//! Provides the core data types for describing a learner and the plans the
//! engine produces. Catalog keys (`Subject`, `Track`, `Weekday`) are closed
//! enums so that table lookups cannot silently miss on a typo.

mod plan;
mod profile;
mod resource;
mod subject;
mod week;

pub use plan::{
    GeneratedPlan, RotationDay, RotationPlan, RotationWeek, SimplePlan, SimpleSubjectPlan,
    SimpleWeek, SubjectWeeklyPlan, WeeklyPlan,
};
pub use profile::{Profile, ProfileBuilder, Track};
pub use resource::{Resource, ResourceKind};
pub use subject::Subject;
pub use week::Weekday;
