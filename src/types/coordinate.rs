//! Struct definitions and implementations for [`Coordinate`].

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Coordinate`] is a geographic point produced by resolving a
/// selected [`Suggestion`](crate::suggestion::Suggestion) through the
/// geocoding service. It is immutable once created.
///
/// Float values are wrapped in [`OrderedFloat`] so that coordinates can
/// be compared and hashed exactly, which keeps the submitted snapshot
/// verifiable against what the resolution produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Creates a coordinate from plain float values.
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }
}
