//! Weekly hour allocation and daily distribution.
//!
//! The allocator turns the normalized weight distribution into per-subject
//! weekly hour budgets. The distributor then spreads one subject's budget
//! over a fixed seven-day pattern in which weekend days carry about 20% more
//! load than weekdays.

use std::collections::BTreeMap;

use crate::models::{Subject, Weekday};

/// Day-load pattern Monday..Sunday. Weekend days are weighted up.
const DAY_PATTERN: [f64; 7] = [1.0, 1.0, 1.0, 1.0, 1.0, 1.2, 1.2];

/// Rounds to 2 decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Allocates weekly hours per subject: `round2(weight * hours_per_week)`.
///
/// Each subject rounds independently, so the total may deviate slightly from
/// `hours_per_week`. That slack is accepted, not redistributed.
pub(crate) fn allocate_weekly_hours(
    hours_per_week: u32,
    weights: &BTreeMap<Subject, f64>,
) -> BTreeMap<Subject, f64> {
    weights
        .iter()
        .map(|(&subject, &weight)| (subject, round2(f64::from(hours_per_week) * weight)))
        .collect()
}

/// Spreads one subject's weekly hours over the seven days.
///
/// The first six days get `round2(weekly_hours * pattern_share)`; Sunday is
/// set to whatever remains, so the per-day values sum exactly to
/// `weekly_hours` rather than merely approximately.
pub(crate) fn distribute_daily(weekly_hours: f64) -> BTreeMap<Weekday, f64> {
    let pattern_total: f64 = DAY_PATTERN.iter().sum();

    let mut distribution = BTreeMap::new();
    let mut allocated = 0.0;
    for (i, day) in Weekday::WEEK.into_iter().enumerate() {
        let hours = if i == DAY_PATTERN.len() - 1 {
            weekly_hours - allocated
        } else {
            round2(weekly_hours * DAY_PATTERN[i] / pattern_total)
        };
        allocated += hours;
        distribution.insert(day, hours);
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(2.6749), 2.67);
        assert_eq!(round2(3.0), 3.0);
    }

    #[test]
    fn test_allocation_respects_weights() {
        let mut weights = BTreeMap::new();
        weights.insert(Subject::Mathematics, 0.75);
        weights.insert(Subject::Physics, 0.25);

        let hours = allocate_weekly_hours(20, &weights);
        assert_eq!(hours[&Subject::Mathematics], 15.0);
        assert_eq!(hours[&Subject::Physics], 5.0);
    }

    #[test]
    fn test_allocation_rounds_to_two_decimals() {
        let mut weights = BTreeMap::new();
        weights.insert(Subject::Mathematics, 1.0 / 3.0);
        let hours = allocate_weekly_hours(10, &weights);
        assert_eq!(hours[&Subject::Mathematics], 3.33);
    }

    #[test]
    fn test_daily_distribution_sums_exactly() {
        for &weekly in &[0.0, 1.0, 3.33, 5.71, 7.5, 20.0] {
            let distribution = distribute_daily(weekly);
            let sum: f64 = distribution.values().sum();
            assert_eq!(sum, weekly, "weekly_hours {weekly}");
        }
    }

    #[test]
    fn test_weekend_days_carry_more_load() {
        let distribution = distribute_daily(14.8);
        assert!(distribution[&Weekday::Saturday] > distribution[&Weekday::Monday]);
        // Monday..Friday share one weight
        assert_eq!(distribution[&Weekday::Monday], distribution[&Weekday::Friday]);
    }

    #[test]
    fn test_distribution_has_all_seven_days() {
        let distribution = distribute_daily(10.0);
        assert_eq!(distribution.len(), 7);
        for day in Weekday::WEEK {
            assert!(distribution.contains_key(&day));
        }
    }

    #[test]
    fn test_sunday_absorbs_rounding_remainder() {
        let weekly = 10.0;
        let distribution = distribute_daily(weekly);
        let first_six: f64 = Weekday::WEEK[..6]
            .iter()
            .map(|day| distribution[day])
            .sum();
        assert_eq!(distribution[&Weekday::Sunday], weekly - first_six);
    }
}
