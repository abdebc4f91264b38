//! TTL-caching provider decorator.
//!
//! Wraps any `ScheduleProvider` and answers repeated lookups from
//! per-key caches for a bounded staleness window. The window is
//! injected; 300 seconds matches the staleness the serving layer has
//! always tolerated. Admin writes call the `invalidate_*` methods
//! instead of waiting out the TTL.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use transit_timetable::{Departure, Line, LineId, Route, RouteId};

use super::traits::ScheduleProvider;
use crate::cache::TtlCache;

/// The staleness window the serving layer has historically used.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

pub struct CachedScheduleProvider<P> {
    inner: P,
    lines: Mutex<TtlCache<LineId, Arc<Line>>>,
    all_lines: Mutex<TtlCache<(), Vec<Arc<Line>>>>,
    routes: Mutex<TtlCache<RouteId, Arc<Route>>>,
    routes_by_line: Mutex<TtlCache<LineId, Vec<Arc<Route>>>>,
    departures: Mutex<TtlCache<RouteId, Vec<Arc<Departure>>>>,
}

// The caches hold no cross-entry invariants, so a panic mid-update
// cannot leave them inconsistent; recover the guard on poisoning.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<P: ScheduleProvider> CachedScheduleProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            lines: Mutex::new(TtlCache::new(ttl)),
            all_lines: Mutex::new(TtlCache::new(ttl)),
            routes: Mutex::new(TtlCache::new(ttl)),
            routes_by_line: Mutex::new(TtlCache::new(ttl)),
            departures: Mutex::new(TtlCache::new(ttl)),
        }
    }

    pub fn with_default_ttl(inner: P) -> Self {
        Self::new(inner, DEFAULT_TTL)
    }

    /// Drop the cached route, its departures, and its line's route list.
    pub fn invalidate_route(&self, route_id: &RouteId) {
        tracing::debug!(route = %route_id, "invalidating cached route");
        let line_id = lock(&self.routes)
            .invalidate(route_id)
            .map(|route| route.line_id);
        lock(&self.departures).invalidate(route_id);
        if let Some(line_id) = line_id {
            lock(&self.routes_by_line).invalidate(&line_id);
        }
    }

    /// Drop everything; the next lookups refetch from the inner provider.
    pub fn invalidate_all(&self) {
        tracing::debug!("invalidating all cached schedule data");
        lock(&self.lines).clear();
        lock(&self.all_lines).clear();
        lock(&self.routes).clear();
        lock(&self.routes_by_line).clear();
        lock(&self.departures).clear();
    }
}

impl<P: ScheduleProvider> ScheduleProvider for CachedScheduleProvider<P> {
    fn line(&self, id: &LineId) -> Option<Arc<Line>> {
        let mut cache = lock(&self.lines);
        if let Some(line) = cache.get(id) {
            return Some(line.clone());
        }
        // Negative results are not cached; unknown ids stay cheap to
        // probe and become visible as soon as they are created.
        let line = self.inner.line(id)?;
        tracing::debug!(line = %id, "refreshed line from inner provider");
        cache.insert(*id, line.clone());
        Some(line)
    }

    fn route(&self, id: &RouteId) -> Option<Arc<Route>> {
        let mut cache = lock(&self.routes);
        if let Some(route) = cache.get(id) {
            return Some(route.clone());
        }
        let route = self.inner.route(id)?;
        tracing::debug!(route = %id, "refreshed route from inner provider");
        cache.insert(*id, route.clone());
        Some(route)
    }

    fn all_lines(&self) -> Vec<Arc<Line>> {
        let mut cache = lock(&self.all_lines);
        if let Some(lines) = cache.get(&()) {
            return lines.clone();
        }
        let lines = self.inner.all_lines();
        tracing::debug!(count = lines.len(), "refreshed line list from inner provider");
        cache.insert((), lines.clone());
        lines
    }

    fn routes_of_line(&self, line_id: &LineId) -> Vec<Arc<Route>> {
        let mut cache = lock(&self.routes_by_line);
        if let Some(routes) = cache.get(line_id) {
            return routes.clone();
        }
        let routes = self.inner.routes_of_line(line_id);
        cache.insert(*line_id, routes.clone());
        routes
    }

    fn departures(&self, route_id: &RouteId) -> Vec<Arc<Departure>> {
        let mut cache = lock(&self.departures);
        if let Some(departures) = cache.get(route_id) {
            return departures.clone();
        }
        let departures = self.inner.departures(route_id);
        cache.insert(*route_id, departures.clone());
        departures
    }
}
