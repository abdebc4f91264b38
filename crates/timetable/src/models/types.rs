//! Core data types and enums for schedule data.

use std::collections::HashSet;
use std::sync::Arc;

use crate::identifiers::*;
use crate::time::TimeOfDay;

// ============================================================================
// Enums
// ============================================================================

/// Kind of transit line, as stored in the `line_type` table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum LineKind {
    Bus = 0,
    Tram = 1,
    Trolleybus = 2,
    Night = 3,
    Express = 4,
}

impl LineKind {
    pub fn from_code(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Bus),
            1 => Some(Self::Tram),
            2 => Some(Self::Trolleybus),
            3 => Some(Self::Night),
            4 => Some(Self::Express),
            _ => None,
        }
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// One stop's position on one route, with the metadata the engine
/// filters and sums over.
///
/// `travel_time` is the cost in minutes of the edge *ending* at this
/// stop, i.e. the ride from the previous `stop_number` on the route.
/// The first stop of any projected sequence contributes no travel time
/// to itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteStop {
    pub stop_id: StopId,
    /// Ordering key along the route. Strictly increasing, not
    /// necessarily contiguous.
    pub stop_number: u32,
    pub name: Arc<str>,
    pub street: Option<Arc<str>>,
    /// Vehicle stops only when hailed.
    pub on_request: bool,
    /// Minutes from the previous stop on this route.
    pub travel_time: u32,
    /// Served only by departures that activate this stop number.
    pub optional: bool,
    /// Marks the effective start of the run for departures on this route.
    pub first: bool,
    /// Marks the effective end of the run.
    pub last: bool,
}

impl RouteStop {
    pub fn new(
        stop_id: StopId,
        stop_number: u32,
        name: impl AsRef<str>,
        travel_time: u32,
    ) -> Self {
        Self {
            stop_id,
            stop_number,
            name: name.as_ref().into(),
            street: None,
            on_request: false,
            travel_time,
            optional: false,
            first: false,
            last: false,
        }
    }

    pub fn on_street(mut self, street: impl AsRef<str>) -> Self {
        self.street = Some(street.as_ref().into());
        self
    }

    pub fn on_request(mut self) -> Self {
        self.on_request = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn first(mut self) -> Self {
        self.first = true;
        self
    }

    pub fn last(mut self) -> Self {
        self.last = true;
        self
    }
}

/// One scheduled run of a vehicle along a route.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Departure {
    pub id: DepartureId,
    pub route_id: RouteId,
    /// Time the vehicle leaves the effective first stop.
    pub start_time: TimeOfDay,
    /// Stop numbers of the optional stops this departure serves,
    /// derived from the `additional_stop` join.
    pub activated_stops: HashSet<u32>,
}

impl Departure {
    pub fn new(id: DepartureId, route_id: RouteId, start_time: TimeOfDay) -> Self {
        Self {
            id,
            route_id,
            start_time,
            activated_stops: HashSet::new(),
        }
    }

    pub fn with_activated_stops(mut self, stop_numbers: impl IntoIterator<Item = u32>) -> Self {
        self.activated_stops = stop_numbers.into_iter().collect();
        self
    }
}

/// One direction of a line: an ordered stop list.
///
/// `stops` must be ascending by `stop_number`; the data-access layer
/// orders them when loading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub id: RouteId,
    pub line_id: LineId,
    /// Destination shown on the vehicle, e.g. "Central Station".
    pub headsign: Arc<str>,
    pub stops: Vec<RouteStop>,
}

impl Route {
    pub fn new(id: RouteId, line_id: LineId, headsign: impl AsRef<str>) -> Self {
        Self {
            id,
            line_id,
            headsign: headsign.as_ref().into(),
            stops: Vec::new(),
        }
    }

    pub fn with_stops(mut self, stops: Vec<RouteStop>) -> Self {
        self.stops = stops;
        self
    }
}

/// A transit line, e.g. bus line "14".
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub id: LineId,
    pub name: Arc<str>,
    pub kind: LineKind,
}

impl Line {
    pub fn new(id: LineId, name: impl AsRef<str>, kind: LineKind) -> Self {
        Self {
            id,
            name: name.as_ref().into(),
            kind,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("Line not found: {0}")]
    LineNotFound(LineId),

    #[error("Route not found: {0}")]
    RouteNotFound(RouteId),

    #[error("Departure not found: {0}")]
    DepartureNotFound(DepartureId),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
