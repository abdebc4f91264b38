//! In-memory schedule provider.
//!
//! Holds a full snapshot of the schedule with lookup maps built up
//! front. Cheap to clone since all data sits behind `Arc`s; the web
//! layer clones one instance into every handler.

use std::collections::HashMap;
use std::sync::Arc;

use transit_timetable::{Departure, DepartureId, Line, LineId, Route, RouteId};

use super::traits::ScheduleProvider;

#[derive(Clone, Default)]
pub struct StaticScheduleProvider {
    lines: Vec<Arc<Line>>,
    routes: Vec<Arc<Route>>,

    line_map: HashMap<LineId, Arc<Line>>,
    route_map: HashMap<RouteId, Arc<Route>>,
    routes_by_line: HashMap<LineId, Vec<Arc<Route>>>,
    departures_by_route: HashMap<RouteId, Vec<Arc<Departure>>>,
    departure_map: HashMap<DepartureId, Arc<Departure>>,
}

impl StaticScheduleProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from a loaded snapshot.
    ///
    /// `routes` must carry their stops ascending by `stop_number`;
    /// departures are grouped under their `route_id`.
    pub fn from_data(lines: Vec<Line>, routes: Vec<Route>, departures: Vec<Departure>) -> Self {
        let lines: Vec<Arc<Line>> = lines.into_iter().map(Arc::new).collect();
        let routes: Vec<Arc<Route>> = routes.into_iter().map(Arc::new).collect();
        let departures: Vec<Arc<Departure>> = departures.into_iter().map(Arc::new).collect();

        let line_map: HashMap<_, _> = lines.iter().map(|l| (l.id, l.clone())).collect();
        let route_map: HashMap<_, _> = routes.iter().map(|r| (r.id, r.clone())).collect();

        let mut routes_by_line: HashMap<LineId, Vec<Arc<Route>>> = HashMap::new();
        for route in &routes {
            routes_by_line.entry(route.line_id).or_default().push(route.clone());
        }

        let mut departures_by_route: HashMap<RouteId, Vec<Arc<Departure>>> = HashMap::new();
        let mut departure_map = HashMap::new();
        for departure in &departures {
            departures_by_route
                .entry(departure.route_id)
                .or_default()
                .push(departure.clone());
            departure_map.insert(departure.id, departure.clone());
        }

        Self {
            lines,
            routes,
            line_map,
            route_map,
            routes_by_line,
            departures_by_route,
            departure_map,
        }
    }

    pub fn departure(&self, id: &DepartureId) -> Option<Arc<Departure>> {
        self.departure_map.get(id).cloned()
    }

    pub fn all_routes(&self) -> Vec<Arc<Route>> {
        self.routes.clone()
    }
}

impl ScheduleProvider for StaticScheduleProvider {
    fn line(&self, id: &LineId) -> Option<Arc<Line>> {
        self.line_map.get(id).cloned()
    }

    fn route(&self, id: &RouteId) -> Option<Arc<Route>> {
        self.route_map.get(id).cloned()
    }

    fn all_lines(&self) -> Vec<Arc<Line>> {
        self.lines.clone()
    }

    fn routes_of_line(&self, line_id: &LineId) -> Vec<Arc<Route>> {
        self.routes_by_line.get(line_id).cloned().unwrap_or_default()
    }

    fn departures(&self, route_id: &RouteId) -> Vec<Arc<Departure>> {
        self.departures_by_route.get(route_id).cloned().unwrap_or_default()
    }
}
