//! Stop-board computations on engine output.
//!
//! Everything a stop board or a printed timetable column needs: the
//! departure times at one stop across a route's departures, the same
//! times grouped by hour, and "next departure after now".

use std::collections::BTreeMap;
use std::sync::Arc;

use itertools::Itertools;

use transit_timetable::{timetable_for, Departure, Route, TimeOfDay};

/// Departure times at one stop of a route, across the given departures.
///
/// Each departure is projected and propagated individually, since
/// optional-stop activation differs per departure. Departures whose
/// projection does not contain `stop_number` contribute nothing — the
/// stop simply is not served by that run, which is different from it
/// being served at `00:00`. Result is sorted and deduplicated.
pub fn stop_departure_times(
    route: &Route,
    departures: &[Arc<Departure>],
    stop_number: u32,
) -> Vec<TimeOfDay> {
    departures
        .iter()
        .filter_map(|departure| {
            timetable_for(&route.stops, departure)
                .into_iter()
                .find(|timed| timed.stop.stop_number == stop_number)
                .map(|timed| timed.time)
        })
        .sorted()
        .dedup()
        .collect()
}

/// Group times into timetable columns, keyed by hour of day.
pub fn group_by_hour(times: &[TimeOfDay]) -> BTreeMap<u32, Vec<TimeOfDay>> {
    let mut by_hour: BTreeMap<u32, Vec<TimeOfDay>> = BTreeMap::new();
    for &time in times {
        by_hour.entry(time.hour()).or_default().push(time);
    }
    for column in by_hour.values_mut() {
        column.sort();
    }
    by_hour
}

/// First departure at or after `now`, wrapping to the next day's
/// earliest when the day's schedule is over. `None` only when `times`
/// is empty — the caller renders that as "no timetable found".
pub fn next_departure(times: &[TimeOfDay], now: TimeOfDay) -> Option<TimeOfDay> {
    times
        .iter()
        .copied()
        .filter(|t| *t >= now)
        .min()
        .or_else(|| times.iter().copied().min())
}

#[cfg(test)]
mod tests {
    use super::*;
    use transit_timetable::{DepartureId, LineId, RouteId, RouteStop, StopId};

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn fixture_route() -> Route {
        Route::new(RouteId::new(1), LineId::new(14), "Central Station").with_stops(vec![
            RouteStop::new(StopId::new(1), 1, "Depot", 0).first(),
            RouteStop::new(StopId::new(2), 2, "Old Town", 3).optional(),
            RouteStop::new(StopId::new(3), 3, "Market Square", 2),
            RouteStop::new(StopId::new(4), 4, "Central Station", 5).last(),
        ])
    }

    fn departure(id: i64, start: &str) -> Arc<Departure> {
        Arc::new(Departure::new(DepartureId::new(id), RouteId::new(1), t(start)))
    }

    #[test]
    fn test_stop_departure_times_at_mid_route_stop() {
        let route = fixture_route();
        let departures = vec![departure(1, "07:00"), departure(2, "07:30")];

        // Stop 3 is reached 5 minutes after start (3 skipped, 2 summed
        // over survivors: 0 + 5).
        let times = stop_departure_times(&route, &departures, 3);
        assert_eq!(times, vec![t("07:05"), t("07:35")]);
    }

    #[test]
    fn test_optional_stop_only_listed_for_activating_departures() {
        let route = fixture_route();
        let departures = vec![
            departure(1, "07:00"),
            Arc::new(
                Departure::new(DepartureId::new(2), RouteId::new(1), t("08:00"))
                    .with_activated_stops([2]),
            ),
        ];

        let times = stop_departure_times(&route, &departures, 2);
        assert_eq!(times, vec![t("08:03")]);
    }

    #[test]
    fn test_times_sorted_and_deduplicated() {
        let route = fixture_route();
        let departures = vec![
            departure(1, "09:00"),
            departure(2, "07:00"),
            departure(3, "07:00"),
        ];

        let times = stop_departure_times(&route, &departures, 1);
        assert_eq!(times, vec![t("07:00"), t("09:00")]);
    }

    #[test]
    fn test_group_by_hour() {
        let times = vec![t("07:05"), t("07:45"), t("08:10"), t("23:59")];
        let grouped = group_by_hour(&times);

        assert_eq!(grouped[&7], vec![t("07:05"), t("07:45")]);
        assert_eq!(grouped[&8], vec![t("08:10")]);
        assert_eq!(grouped[&23], vec![t("23:59")]);
        assert!(!grouped.contains_key(&6));
    }

    #[test]
    fn test_next_departure() {
        let times = vec![t("06:00"), t("12:30"), t("22:15")];

        assert_eq!(next_departure(&times, t("12:30")), Some(t("12:30")));
        assert_eq!(next_departure(&times, t("12:31")), Some(t("22:15")));

        // Past the last run of the day: wrap to tomorrow's first.
        assert_eq!(next_departure(&times, t("23:00")), Some(t("06:00")));

        assert_eq!(next_departure(&[], t("12:00")), None);
    }
}
