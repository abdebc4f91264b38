//! # transit-timetable
//!
//! The timetable engine of the schedule service: given a route's full
//! ordered stop list and one departure, derive the stop sequence that
//! departure actually serves and the clock time at every stop.
//!
//! The engine is a pure function of its inputs — no I/O, no clocks, no
//! shared state — so it is safe to call concurrently from any number of
//! request handlers.
//!
//! ## Example
//!
//! ```
//! use transit_timetable::prelude::*;
//!
//! let stops = vec![
//!     RouteStop::new(StopId::new(1), 1, "Depot", 0).first(),
//!     RouteStop::new(StopId::new(2), 2, "Old Town", 3).optional(),
//!     RouteStop::new(StopId::new(3), 3, "Market Square", 2),
//!     RouteStop::new(StopId::new(4), 4, "Central Station", 5).last(),
//! ];
//!
//! // A departure that does not serve the optional stop.
//! let departure = Departure::new(
//!     DepartureId::new(1),
//!     RouteId::new(1),
//!     "07:00".parse().unwrap(),
//! );
//!
//! let timetable = timetable_for(&stops, &departure);
//! let times: Vec<String> = timetable.iter().map(|t| t.time.to_string()).collect();
//! assert_eq!(times, vec!["07:00", "07:05", "07:10"]);
//! ```

pub mod engine;
pub mod identifiers;
pub mod models;
pub mod time;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{project, propagate, timetable_for, TimedStop};
    pub use crate::identifiers::*;
    pub use crate::models::{Departure, Line, LineKind, Result, Route, RouteStop, ScheduleError};
    pub use crate::time::TimeOfDay;
}

pub use prelude::*;
