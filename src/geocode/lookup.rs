//! The autocomplete/geocoding service wrapper.
//!
//! [`GeocodeLookup`] sits between the form's state machines and the
//! external places service. The service itself is only reachable
//! through the [`GeocodeService`] trait, so callers inject the real
//! SDK client and tests inject a fake.

use crate::coordinate::Coordinate;
use crate::error::GeocodeError;
use crate::suggestion::Suggestion;

/// Client interface of the external places/geocoding service.
///
/// Implementations own the credential and the transport; the library
/// only sees typed candidates. Both calls suspend on the network in a
/// real client, which is why their completions are delivered back to
/// the fields through tickets (see [`crate::field`]).
pub trait GeocodeService {
    /// Whether the client has finished loading and accepts requests.
    fn is_ready(&self) -> bool;

    /// Ranked place candidates for a partial free-text query.
    fn autocomplete(&self, query: &str) -> Result<Vec<Suggestion>, GeocodeError>;

    /// Coordinate candidates for a full address string, best match
    /// first.
    fn geocode(&self, address: &str) -> Result<Vec<Coordinate>, GeocodeError>;
}

/// Wraps a loaded [`GeocodeService`] client and implements the lookup
/// rules the form relies on: blank input short-circuits, resolution
/// takes the best-ranked candidate.
pub struct GeocodeLookup {
    service: Box<dyn GeocodeService>,
}

impl GeocodeLookup {
    /// Wraps a service client, rejecting one whose bootstrap never
    /// completed.
    pub fn new(service: Box<dyn GeocodeService>) -> Result<GeocodeLookup, GeocodeError> {
        if !service.is_ready() {
            error!("geocoding service failed to load");
            return Err(GeocodeError::Unavailable(
                "service client not ready".to_string(),
            ));
        }
        Ok(GeocodeLookup { service })
    }

    /// Fetches ranked suggestions for `text`.
    ///
    /// Empty or whitespace-only text yields an empty list without a
    /// service call.
    pub fn suggest(&self, text: &str) -> Result<Vec<Suggestion>, GeocodeError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        self.service.autocomplete(text)
    }

    /// Resolves a selected suggestion to a coordinate by geocoding its
    /// label and extracting the first candidate.
    ///
    /// Zero candidates is a [`GeocodeError::NoMatch`]; the field stays
    /// unresolved and the error is logged, never shown to the user.
    pub fn resolve(&self, suggestion: &Suggestion) -> Result<Coordinate, GeocodeError> {
        let candidates = self.service.geocode(&suggestion.label)?;
        match candidates.first() {
            Some(coordinate) => {
                debug!("resolved \"{}\" to {:?}", suggestion.label, coordinate);
                Ok(*coordinate)
            }
            None => Err(GeocodeError::NoMatch(suggestion.label.clone())),
        }
    }
}
