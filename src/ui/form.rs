//! The route request form: two location fields and a rack toggle.
//!
//! [`RouteRequestForm`] wires the fields to the injected
//! [`GeocodeLookup`] and validates a submission before handing the
//! finished [`RouteRequest`] to the consumer's `on_send` callback.

use crate::error::SubmitError;
use crate::field::LocationField;
use crate::lookup::GeocodeLookup;
use crate::request::RouteRequest;

/// Collects a start point, an optional destination and the rack
/// preference, then forwards the snapshot to the consumer.
pub struct RouteRequestForm {
    lookup: GeocodeLookup,
    start: LocationField,
    dest: LocationField,
    use_nearest_rack: bool,
    on_send: Box<dyn FnMut(RouteRequest)>,
}

impl RouteRequestForm {
    /// Creates a form over the given service wrapper. `on_send` is the
    /// external consumer's callback, invoked at most once per submit.
    pub fn new(lookup: GeocodeLookup, on_send: Box<dyn FnMut(RouteRequest)>) -> RouteRequestForm {
        RouteRequestForm {
            lookup,
            start: LocationField::new("Starting Location"),
            dest: LocationField::new("Ending Location"),
            use_nearest_rack: false,
            on_send,
        }
    }

    /// The user edited the start field's text.
    pub fn edit_start(&mut self, text: &str) {
        Self::run_query(&self.lookup, &mut self.start, text);
    }

    /// The user edited the destination field's text.
    pub fn edit_dest(&mut self, text: &str) {
        Self::run_query(&self.lookup, &mut self.dest, text);
    }

    /// The user picked a rendered suggestion in the start field.
    pub fn select_start(&mut self, id: &str) {
        Self::run_resolve(&self.lookup, &mut self.start, id);
    }

    /// The user picked a rendered suggestion in the destination field.
    pub fn select_dest(&mut self, id: &str) {
        Self::run_resolve(&self.lookup, &mut self.dest, id);
    }

    /// Flips the "use nearest rack as destination" preference. No
    /// validation side effects.
    pub fn toggle_rack(&mut self) {
        self.use_nearest_rack = !self.use_nearest_rack;
    }

    /// Validates the form and hands the snapshot to the consumer.
    ///
    /// An unresolved start field rejects the submission locally with
    /// [`SubmitError::EmptyStart`]; `on_send` is not invoked and no
    /// field state changes. Otherwise `on_send` is invoked exactly
    /// once with the current `{start, dest, rack}` snapshot.
    ///
    /// The destination is not required to be resolved even when the
    /// rack preference is off; the consumer owns the interpretation of
    /// a missing destination.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        let Some(start) = self.start.resolved() else {
            info!("submit rejected: no starting location");
            return Err(SubmitError::EmptyStart);
        };
        let request = RouteRequest {
            start,
            dest: self.dest.resolved(),
            use_nearest_rack: self.use_nearest_rack,
        };
        info!("sending route request {:?}", request);
        (self.on_send)(request);
        Ok(())
    }

    pub fn use_nearest_rack(&self) -> bool {
        self.use_nearest_rack
    }

    pub fn start_field(&self) -> &LocationField {
        &self.start
    }

    pub fn dest_field(&self) -> &LocationField {
        &self.dest
    }

    /// Issues the field's query ticket and delivers the autocomplete
    /// response for it. An autocomplete failure is logged; the field
    /// keeps whatever state the edit left it in.
    fn run_query(lookup: &GeocodeLookup, field: &mut LocationField, text: &str) {
        let Some(ticket) = field.edit(text) else {
            return;
        };
        match lookup.suggest(text) {
            Ok(suggestions) => {
                field.apply_suggestions(ticket, suggestions);
            }
            Err(err) => error!("{}: autocomplete failed: {}", field.placeholder(), err),
        }
    }

    /// Issues the field's resolve ticket and delivers the geocoding
    /// outcome for it.
    fn run_resolve(lookup: &GeocodeLookup, field: &mut LocationField, id: &str) {
        let Some((ticket, suggestion)) = field.select(id) else {
            return;
        };
        let result = lookup.resolve(&suggestion);
        if let Some(coordinate) = field.apply_resolution(ticket, result) {
            debug!("{}: reported {:?}", field.placeholder(), coordinate);
        }
    }
}
