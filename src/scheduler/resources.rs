//! Resource ranking.
//!
//! Orders a subject's candidate resources by relevance to the learner's
//! track: track-tagged entries first, catalog order preserved within each
//! group (the sort is stable, which is what makes the output deterministic),
//! truncated to at most five. A subject with no catalog resources gets a
//! single generic fallback instead of failing the whole plan.

use crate::catalog::ResourceCatalog;
use crate::models::{Resource, Subject, Track};

/// Maximum suggestions returned per subject.
const MAX_SUGGESTIONS: usize = 5;

/// Ranks the resources for one subject.
pub(crate) fn rank_resources(
    catalog: &ResourceCatalog,
    subject: Subject,
    track: Track,
) -> Vec<Resource> {
    let mut candidates = catalog.resources_for(subject).to_vec();
    if candidates.is_empty() {
        candidates.push(Resource::fallback());
    }

    // Stable: ties keep catalog order.
    candidates.sort_by_key(|r| if r.applies_to(track) { 0 } else { 1 });
    candidates.truncate(MAX_SUGGESTIONS);
    candidates
}
