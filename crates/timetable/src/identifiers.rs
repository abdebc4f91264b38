//! Type-safe identifiers for schedule entities.
//!
//! The relational schema keys everything by integer id, so the newtypes
//! wrap an `i64` rather than a string.

use std::fmt;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

impl_identifier!(LineId);
impl_identifier!(RouteId);
impl_identifier!(StopId);
impl_identifier!(DepartureId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality() {
        let id1 = RouteId::new(7);
        let id2 = RouteId::new(7);
        let id3 = RouteId::new(8);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_identifier_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(StopId::new(42), "Main St");

        assert_eq!(map.get(&StopId::new(42)), Some(&"Main St"));
    }

    #[test]
    fn test_identifier_display() {
        assert_eq!(format!("{}", LineId::new(12)), "12");
    }

    #[test]
    fn test_identifier_conversions() {
        let id: DepartureId = 5i64.into();
        assert_eq!(id.value(), 5);
    }
}
