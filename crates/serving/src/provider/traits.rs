//! The data-access seam between storage and the serving layer.
//!
//! Route handlers talk to a `ScheduleProvider` and never to the store
//! directly, so the same handlers work against the in-memory provider,
//! the TTL-cached decorator, or a database-backed implementation.

use std::sync::Arc;

use transit_timetable::{Departure, Line, LineId, Route, RouteId};

/// Provider of schedule data: lines, routes, and departures.
///
/// Lookups return `None` for unknown ids; the serving layer turns that
/// into a "no timetable found" response rather than an error. All data
/// is handed out as `Arc`s so providers can share one loaded copy
/// across concurrent requests.
pub trait ScheduleProvider: Send + Sync {
    // ---- Lookups ----
    fn line(&self, id: &LineId) -> Option<Arc<Line>>;
    fn route(&self, id: &RouteId) -> Option<Arc<Route>>;

    // ---- Collections ----
    fn all_lines(&self) -> Vec<Arc<Line>>;

    /// Both directions of a line, in stored order.
    fn routes_of_line(&self, line_id: &LineId) -> Vec<Arc<Route>>;

    /// Every departure scheduled on a route, in stored order.
    fn departures(&self, route_id: &RouteId) -> Vec<Arc<Departure>>;
}
