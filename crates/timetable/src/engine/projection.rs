//! Departure-specific stop-sequence projection.
//!
//! A route stores its full physical stop list once. Which stops a
//! particular departure serves depends on per-stop flags and on the
//! optional stops that departure activates. Projection narrows the full
//! list down to the effective sequence, in four steps whose order
//! matters: each step filters the candidate set the next step searches.

use std::collections::HashSet;

use crate::models::RouteStop;

/// Project a route's full stop list onto one departure.
///
/// `stops` is expected sorted ascending by `stop_number`; the function
/// re-sorts anyway so it is safe on unordered input and idempotent.
/// `activated` holds the optional stop numbers this departure serves.
///
/// Steps, in order:
/// 1. sort by `stop_number`;
/// 2. drop optional stops that are not activated;
/// 3. trim everything before the `first`-flagged stop (smallest
///    `stop_number` wins if several survive step 2; no marker means no
///    front trim);
/// 4. trim everything after the `last`-flagged stop (same tie-break; no
///    marker means no tail trim).
///
/// Total over well-formed input: activation numbers that match nothing
/// simply have no effect, and an empty result is a valid result.
pub fn project(stops: &[RouteStop], activated: &HashSet<u32>) -> Vec<RouteStop> {
    let mut sequence: Vec<RouteStop> = stops.to_vec();
    sequence.sort_by_key(|s| s.stop_number);

    sequence.retain(|s| !s.optional || activated.contains(&s.stop_number));

    // Trim boundaries are searched among the survivors, not the full
    // list: a first-marker on a skipped optional stop does not trim.
    let first_number = sequence
        .iter()
        .filter(|s| s.first)
        .map(|s| s.stop_number)
        .min()
        .unwrap_or(0);
    sequence.retain(|s| s.stop_number >= first_number);

    let last_number = sequence
        .iter()
        .filter(|s| s.last)
        .map(|s| s.stop_number)
        .min();
    if let Some(last_number) = last_number {
        sequence.retain(|s| s.stop_number <= last_number);
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::StopId;

    fn stop(number: u32, travel_time: u32) -> RouteStop {
        RouteStop::new(StopId::new(number as i64), number, format!("Stop {number}"), travel_time)
    }

    fn numbers(sequence: &[RouteStop]) -> Vec<u32> {
        sequence.iter().map(|s| s.stop_number).collect()
    }

    #[test]
    fn test_plain_route_passes_through() {
        let stops = vec![stop(1, 0), stop(2, 4), stop(3, 2)];
        let projected = project(&stops, &HashSet::new());
        assert_eq!(numbers(&projected), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorts_unordered_input() {
        let stops = vec![stop(3, 2), stop(1, 0), stop(2, 4)];
        let projected = project(&stops, &HashSet::new());
        assert_eq!(numbers(&projected), vec![1, 2, 3]);
    }

    #[test]
    fn test_optional_excluded_unless_activated() {
        let stops = vec![stop(1, 0), stop(12, 3).optional(), stop(20, 2)];

        let without = project(&stops, &HashSet::new());
        assert_eq!(numbers(&without), vec![1, 20]);

        let with = project(&stops, &HashSet::from([12]));
        assert_eq!(numbers(&with), vec![1, 12, 20]);
    }

    #[test]
    fn test_unknown_activation_number_has_no_effect() {
        let stops = vec![stop(1, 0), stop(2, 3)];
        let projected = project(&stops, &HashSet::from([99]));
        assert_eq!(numbers(&projected), vec![1, 2]);
    }

    #[test]
    fn test_first_last_trim() {
        let stops = vec![
            stop(1, 0),
            stop(5, 2).first(),
            stop(10, 3),
            stop(20, 4).last(),
            stop(25, 1),
        ];
        let projected = project(&stops, &HashSet::new());
        assert_eq!(numbers(&projected), vec![5, 10, 20]);
    }

    #[test]
    fn test_trim_with_optional_in_range() {
        let stops = vec![
            stop(1, 0),
            stop(5, 2).first(),
            stop(10, 3).optional(),
            stop(20, 4).last(),
        ];
        let projected = project(&stops, &HashSet::new());
        assert_eq!(numbers(&projected), vec![5, 20]);
    }

    #[test]
    fn test_no_markers_means_no_trim() {
        let stops = vec![stop(7, 0), stop(8, 1)];
        let projected = project(&stops, &HashSet::new());
        assert_eq!(numbers(&projected), vec![7, 8]);
    }

    #[test]
    fn test_duplicate_markers_pick_smallest_number() {
        let stops = vec![
            stop(1, 0),
            stop(3, 1).first(),
            stop(5, 1).first(),
            stop(8, 1).last(),
            stop(9, 1).last(),
        ];
        let projected = project(&stops, &HashSet::new());
        assert_eq!(numbers(&projected), vec![3, 5, 8]);
    }

    #[test]
    fn test_first_marker_on_skipped_optional_does_not_trim() {
        // The boundary search runs after the optional filter, so a
        // deactivated optional first-stop leaves the route untrimmed.
        let stops = vec![stop(2, 0), stop(4, 1).optional().first(), stop(6, 2)];
        let projected = project(&stops, &HashSet::new());
        assert_eq!(numbers(&projected), vec![2, 6]);
    }

    #[test]
    fn test_order_preserved_as_subsequence() {
        let stops = vec![
            stop(1, 0),
            stop(2, 1).optional(),
            stop(3, 1),
            stop(4, 1).optional(),
            stop(5, 1),
        ];
        let projected = project(&stops, &HashSet::from([4]));
        assert_eq!(numbers(&projected), vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_idempotent() {
        let stops = vec![
            stop(1, 0),
            stop(5, 2).first(),
            stop(10, 3).optional(),
            stop(20, 4).last(),
        ];
        let activated = HashSet::from([10]);

        let once = project(&stops, &activated);
        let twice = project(&once, &activated);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_can_project_to_empty() {
        let stops = vec![stop(3, 1).optional(), stop(4, 1).optional()];
        let projected = project(&stops, &HashSet::new());
        assert!(projected.is_empty());
    }
}
