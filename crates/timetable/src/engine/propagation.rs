//! Departure-time propagation along a projected stop sequence.

use crate::models::RouteStop;
use crate::time::TimeOfDay;

/// A stop paired with the clock time the vehicle reaches it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedStop {
    pub stop: RouteStop,
    pub time: TimeOfDay,
}

/// Assign an absolute time to every stop of a projected sequence.
///
/// The first stop gets `start` verbatim; its own `travel_time` covers
/// the ride from a predecessor that is no longer part of the sequence,
/// so it is ignored. Every later stop adds its own `travel_time` to the
/// running total, wrapping silently at midnight.
///
/// The sum runs over the surviving stops only. When an optional stop
/// was skipped by projection, its edge cost is not re-attributed to the
/// next survivor; the schema stores consecutive travel times only, so
/// there is nothing to re-attribute from.
pub fn propagate(sequence: Vec<RouteStop>, start: TimeOfDay) -> Vec<TimedStop> {
    let mut time = start;
    sequence
        .into_iter()
        .enumerate()
        .map(|(i, stop)| {
            if i > 0 {
                time = time.plus_minutes(stop.travel_time);
            }
            TimedStop { stop, time }
        })
        .collect()
}
