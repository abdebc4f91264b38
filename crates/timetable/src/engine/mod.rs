//! The timetable engine: projection and time propagation.
//!
//! Both halves are pure and total. The data-access layer hands in a
//! route's ordered stop list and one departure; the engine derives the
//! stop sequence that departure actually serves and the clock time at
//! each stop. Nothing here touches a database, a clock, or any shared
//! state.

pub mod projection;
pub mod propagation;

pub use projection::project;
pub use propagation::{propagate, TimedStop};

use crate::models::{Departure, RouteStop};

/// Full timetable for one departure: projection followed by propagation.
pub fn timetable_for(stops: &[RouteStop], departure: &Departure) -> Vec<TimedStop> {
    let sequence = project(stops, &departure.activated_stops);
    propagate(sequence, departure.start_time)
}
