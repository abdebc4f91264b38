//! # transit-serving
//!
//! Serving-side support around the timetable engine: the data-access
//! abstraction the route handlers talk to, a TTL cache with explicit
//! invalidation, and the stop-board computations on engine output.
//!
//! ## Example
//!
//! ```
//! use transit_serving::prelude::*;
//! use transit_timetable::prelude::*;
//!
//! let line = Line::new(LineId::new(14), "14", LineKind::Tram);
//! let route = Route::new(RouteId::new(1), LineId::new(14), "Central Station")
//!     .with_stops(vec![
//!         RouteStop::new(StopId::new(1), 1, "Depot", 0),
//!         RouteStop::new(StopId::new(2), 2, "Central Station", 6),
//!     ]);
//! let departure = Departure::new(
//!     DepartureId::new(100),
//!     RouteId::new(1),
//!     "06:30".parse().unwrap(),
//! );
//!
//! let provider = StaticScheduleProvider::from_data(
//!     vec![line],
//!     vec![route],
//!     vec![departure],
//! );
//!
//! let route = provider.route(&RouteId::new(1)).unwrap();
//! let departures = provider.departures(&RouteId::new(1));
//! let times = stop_departure_times(&route, &departures, 2);
//! assert_eq!(times[0].to_string(), "06:36");
//! ```

pub mod board;
pub mod cache;
pub mod provider;

// Re-exports for convenience
pub mod prelude {
    pub use crate::board::{group_by_hour, next_departure, stop_departure_times};
    pub use crate::cache::TtlCache;
    pub use crate::provider::{
        CachedScheduleProvider, ScheduleProvider, StaticScheduleProvider,
    };
}

pub use prelude::*;
