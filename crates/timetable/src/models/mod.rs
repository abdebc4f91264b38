//! Schedule data model.

pub mod types;

pub use types::{Departure, Line, LineKind, Result, Route, RouteStop, ScheduleError};
