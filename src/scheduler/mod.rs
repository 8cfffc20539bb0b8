//! The allocation/ranking engine.
//!
//! Data flow:
//!
//! ```text
//! profile ─→ weights ─→ allocation ─┬→ daily distribution ─┐
//!                                   └→ topic selection ────┼→ weekly plans
//! profile + tables ─→ resource ranking ────────────────────┘
//! ```
//!
//! Every stage is a synchronous, side-effect-free computation over the
//! profile and the injected [`crate::catalog::KnowledgeBase`]. The engine
//! either produces a complete plan or fails before producing any output;
//! there are no partial results.

mod allocation;
mod planner;
mod resources;
mod topics;
mod weights;

pub use planner::{Planner, DEFAULT_BLOCKS_PER_DAY};

use thiserror::Error;

use crate::models::Track;

/// Unrecoverable configuration problems.
///
/// These indicate a broken deployment (a table missing a required entry),
/// not bad user input; validation rejects bad input before the engine runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The track weight table has no entry for the learner's track.
    #[error("no weight table entry for track '{0}'")]
    MissingTrackWeights(Track),
}
