//! Study-plan scheduling engine.
//!
//! Turns a learner profile (exam track, available weekly hours, proficiency
//! level, weeks until the exam) into a multi-week study schedule: per-subject
//! weekly hour budgets, per-day hour distribution, a topic subset per subject,
//! and ranked learning-resource suggestions.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Profile`, `Track`, `Subject`, `Weekday`,
//!   `Resource`, and the plan shapes (`GeneratedPlan`, `SimplePlan`,
//!   `RotationPlan`)
//! - **`catalog`**: Static knowledge tables — topics per subject, learning
//!   resources, track importance weights — bundled into a `KnowledgeBase`
//! - **`scheduler`**: The allocation/ranking engine and the `Planner`
//!   entry points
//! - **`validation`**: Profile bounds checks (range and shape)
//!
//! # Architecture
//!
//! The engine is a pure, stateless function from (profile, knowledge tables)
//! to (plan). Knowledge tables are immutable injected configuration; nothing
//! here performs I/O after startup, holds shared mutable state, or blocks.
//! Concurrent plan generation over one `Planner` is safe by construction.
//!
//! # Usage
//!
//! ```
//! use study_schedule::models::{Profile, Subject, Track};
//! use study_schedule::scheduler::Planner;
//!
//! let profile = Profile::builder(Track::Quantitative)
//!     .with_weeks_left(4)
//!     .with_hours_per_week(20)
//!     .with_subject_level(Subject::Mathematics, 2)
//!     .build()
//!     .unwrap();
//!
//! let planner = Planner::with_defaults();
//! let plan = planner.generate(&profile).unwrap();
//! assert_eq!(plan.weeks.len(), 4);
//! ```

pub mod catalog;
pub mod models;
pub mod scheduler;
pub mod validation;
