//! Topic selection.
//!
//! Picks a bounded topic subset for a subject from the catalog. Topics are
//! ordered foundational-first, and selection always takes a prefix — there is
//! no randomization and no repetition tracking, so every week of a plan
//! yields the same prefix for a given subject. That is a deliberate
//! simplification of the current design, not an accident.

use crate::catalog::TopicCatalog;
use crate::models::Subject;

/// Selects topics for one subject given its weekly hour budget.
///
/// `topics_per_week = max(1, floor(weekly_hours / 2))`, capped at the
/// catalog length. `weeks_left` is accepted for future pacing but does not
/// affect selection yet.
pub(crate) fn pick_topics(
    catalog: &TopicCatalog,
    subject: Subject,
    weekly_hours: f64,
    _weeks_left: u32,
) -> Vec<String> {
    let topics_per_week = ((weekly_hours / 2.0).floor() as usize).max(1);
    catalog
        .topics_for(subject)
        .iter()
        .take(topics_per_week)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TopicCatalog {
        TopicCatalog::new().with_topics(Subject::Physics, ["A", "B", "C", "D"])
    }

    #[test]
    fn test_two_hours_per_topic() {
        let picked = pick_topics(&catalog(), Subject::Physics, 6.0, 4);
        assert_eq!(picked, ["A", "B", "C"]);
    }

    #[test]
    fn test_minimum_one_topic() {
        let picked = pick_topics(&catalog(), Subject::Physics, 0.5, 4);
        assert_eq!(picked, ["A"]);
    }

    #[test]
    fn test_capped_at_catalog_length() {
        let picked = pick_topics(&catalog(), Subject::Physics, 50.0, 4);
        assert_eq!(picked.len(), 4);
    }

    #[test]
    fn test_selection_is_a_catalog_prefix() {
        let full = catalog();
        for hours in [1.0, 3.9, 4.0, 7.5, 9.0] {
            let picked = pick_topics(&full, Subject::Physics, hours, 1);
            let expected: Vec<_> = full.topics_for(Subject::Physics)[..picked.len()].to_vec();
            assert_eq!(picked, expected, "hours {hours}");
        }
    }

    #[test]
    fn test_unknown_subject_yields_empty() {
        let picked = pick_topics(&catalog(), Subject::Biology, 10.0, 4);
        assert!(picked.is_empty());
    }

    #[test]
    fn test_weeks_left_does_not_change_selection() {
        let a = pick_topics(&catalog(), Subject::Physics, 6.0, 1);
        let b = pick_topics(&catalog(), Subject::Physics, 6.0, 60);
        assert_eq!(a, b);
    }
}
