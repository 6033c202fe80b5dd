//! The per-field location search state machine.
//!
//! A [`LocationField`] owns one text input bound to the autocomplete
//! service: the query text, the current suggestion list and the
//! resolved coordinate, if any. Both service calls suspend, so the
//! field never performs them itself. Instead, starting an edit or a
//! selection issues a ticket, the driver performs the lookup, and the
//! completion is delivered back together with that ticket. A ticket
//! from a superseded interaction is discarded on delivery, which makes
//! the last-issued query the only one whose results ever render. The
//! in-flight call itself is not aborted.

use crate::coordinate::Coordinate;
use crate::error::GeocodeError;
use crate::suggestion::Suggestion;

/// States of a [`LocationField`].
///
/// Transitions: `Empty → Typing → SuggestionsShown → Resolving →
/// Resolved`, and `Resolved → Typing` on any further edit. A resolution
/// is invalidated by editing, never preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// No query text.
    Empty,
    /// Query text present, no suggestions rendered.
    Typing,
    /// The latest query's suggestions are rendered.
    SuggestionsShown,
    /// A suggestion was selected; its resolution is in flight.
    Resolving,
    /// The selection resolved to a coordinate.
    Resolved,
}

/// Ticket identifying one in-flight autocomplete query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTicket(u64);

/// Ticket identifying one in-flight resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveTicket(u64);

/// A labeled location input bound to the autocomplete service.
#[derive(Debug)]
pub struct LocationField {
    placeholder: String,
    text: String,
    suggestions: Vec<Suggestion>,
    resolved: Option<Coordinate>,
    state: FieldState,
    // Generation counter. Bumped by every edit and every selection;
    // completions carrying an older generation are discarded.
    seq: u64,
}

impl LocationField {
    /// Creates an empty field. The placeholder doubles as the field's
    /// name in log output.
    pub fn new(placeholder: &str) -> LocationField {
        LocationField {
            placeholder: placeholder.to_string(),
            text: String::new(),
            suggestions: Vec::new(),
            resolved: None,
            state: FieldState::Empty,
            seq: 0,
        }
    }

    /// Replaces the query text.
    ///
    /// Any previous resolution is cleared immediately so that a stale
    /// coordinate can never be submitted. Returns a ticket for the
    /// query the driver should now run, or [`None`] for blank text,
    /// which needs no service call.
    pub fn edit(&mut self, text: &str) -> Option<QueryTicket> {
        self.seq += 1;
        self.text = text.to_string();
        self.resolved = None;
        self.suggestions.clear();
        if text.trim().is_empty() {
            self.state = FieldState::Empty;
            return None;
        }
        self.state = FieldState::Typing;
        Some(QueryTicket(self.seq))
    }

    /// Delivers the suggestions fetched for `ticket`.
    ///
    /// Returns whether the result set was accepted. A stale ticket is
    /// discarded: the field was edited again or a suggestion was
    /// selected while this query was in flight.
    pub fn apply_suggestions(&mut self, ticket: QueryTicket, suggestions: Vec<Suggestion>) -> bool {
        if ticket.0 != self.seq {
            debug!(
                "{}: discarding suggestions for superseded query",
                self.placeholder
            );
            return false;
        }
        if suggestions.is_empty() {
            self.state = FieldState::Typing;
        } else {
            self.suggestions = suggestions;
            self.state = FieldState::SuggestionsShown;
        }
        true
    }

    /// Selects the rendered suggestion with the given id.
    ///
    /// Freezes the visible text to the selected label, clears the
    /// suggestion list and enters [`FieldState::Resolving`]. Returns
    /// the suggestion to resolve together with its ticket, or [`None`]
    /// if no rendered suggestion carries the id.
    pub fn select(&mut self, id: &str) -> Option<(ResolveTicket, Suggestion)> {
        let suggestion = self.suggestions.iter().find(|s| s.id == id)?.clone();
        self.seq += 1;
        self.text = suggestion.label.clone();
        self.suggestions.clear();
        self.state = FieldState::Resolving;
        Some((ResolveTicket(self.seq), suggestion))
    }

    /// Delivers the outcome of the resolution issued for `ticket`.
    ///
    /// On success the field enters [`FieldState::Resolved`] and the
    /// coordinate is returned exactly once, for the parent to record.
    /// On failure the field falls back to [`FieldState::Typing`] and
    /// stays unresolved; the error is logged only. A stale ticket is
    /// discarded: the user re-edited the field since the selection.
    pub fn apply_resolution(
        &mut self,
        ticket: ResolveTicket,
        result: Result<Coordinate, GeocodeError>,
    ) -> Option<Coordinate> {
        if ticket.0 != self.seq {
            debug!(
                "{}: discarding resolution for superseded selection",
                self.placeholder
            );
            return None;
        }
        match result {
            Ok(coordinate) => {
                self.resolved = Some(coordinate);
                self.state = FieldState::Resolved;
                info!("{}: resolved to {:?}", self.placeholder, coordinate);
                Some(coordinate)
            }
            Err(err) => {
                error!("{}: resolution failed: {}", self.placeholder, err);
                self.state = FieldState::Typing;
                None
            }
        }
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    /// The currently visible text: the user's query, or the selected
    /// label once a suggestion was picked.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The suggestions currently rendered for this field.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// The resolved coordinate, unset unless the field is in
    /// [`FieldState::Resolved`].
    pub fn resolved(&self) -> Option<Coordinate> {
        self.resolved
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

#[cfg(test)]
mod field_tests {
    use super::*;

    fn shown_field(suggestions: Vec<Suggestion>) -> LocationField {
        let mut field = LocationField::new("Starting Location");
        let ticket = field.edit("chang").unwrap();
        assert!(field.apply_suggestions(ticket, suggestions));
        field
    }

    #[test]
    fn test_initial_state_is_empty() {
        let field = LocationField::new("Starting Location");
        assert_eq!(field.state(), FieldState::Empty);
        assert_eq!(field.resolved(), None);
        assert!(field.suggestions().is_empty());
    }

    #[test]
    fn test_blank_edit_issues_no_ticket() {
        let mut field = LocationField::new("Starting Location");
        assert!(field.edit("").is_none());
        assert_eq!(field.state(), FieldState::Empty);
        assert!(field.edit("   ").is_none());
        assert_eq!(field.state(), FieldState::Empty);
    }

    #[test]
    fn test_suggestions_render_for_current_query() {
        let mut field = LocationField::new("Starting Location");
        let ticket = field.edit("chang").unwrap();
        assert_eq!(field.state(), FieldState::Typing);

        assert!(field.apply_suggestions(ticket, vec![Suggestion::new("1", "Changi Airport")]));
        assert_eq!(field.state(), FieldState::SuggestionsShown);
        assert_eq!(field.suggestions().len(), 1);
    }

    #[test]
    fn test_empty_result_set_stays_typing() {
        let mut field = LocationField::new("Starting Location");
        let ticket = field.edit("zzzzz").unwrap();
        assert!(field.apply_suggestions(ticket, Vec::new()));
        assert_eq!(field.state(), FieldState::Typing);
        assert!(field.suggestions().is_empty());
    }

    /// Two queries in quick succession: only the latest query's results
    /// render, the earlier response is discarded when it arrives late.
    #[test]
    fn test_superseded_query_results_discarded() {
        let mut field = LocationField::new("Starting Location");
        let cha = field.edit("Cha").unwrap();
        let chang = field.edit("Chang").unwrap();

        assert!(field.apply_suggestions(chang, vec![Suggestion::new("1", "Changi Airport")]));
        assert!(!field.apply_suggestions(cha, vec![Suggestion::new("9", "Chatswood")]));

        assert_eq!(field.suggestions(), &[Suggestion::new("1", "Changi Airport")]);
        assert_eq!(field.state(), FieldState::SuggestionsShown);
    }

    /// Same race, other arrival order: the stale response lands first.
    #[test]
    fn test_stale_results_cannot_preempt_pending_query() {
        let mut field = LocationField::new("Starting Location");
        let cha = field.edit("Cha").unwrap();
        let chang = field.edit("Chang").unwrap();

        assert!(!field.apply_suggestions(cha, vec![Suggestion::new("9", "Chatswood")]));
        assert_eq!(field.state(), FieldState::Typing);

        assert!(field.apply_suggestions(chang, vec![Suggestion::new("1", "Changi Airport")]));
        assert_eq!(field.suggestions(), &[Suggestion::new("1", "Changi Airport")]);
    }

    #[test]
    fn test_select_freezes_label_and_clears_suggestions() {
        let mut field = shown_field(vec![
            Suggestion::new("1", "Changi Airport"),
            Suggestion::new("2", "Changi Village"),
        ]);

        let (_, suggestion) = field.select("1").unwrap();
        assert_eq!(suggestion.label, "Changi Airport");
        assert_eq!(field.text(), "Changi Airport");
        assert!(field.suggestions().is_empty());
        assert_eq!(field.state(), FieldState::Resolving);
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut field = shown_field(vec![Suggestion::new("1", "Changi Airport")]);
        assert!(field.select("42").is_none());
        assert_eq!(field.state(), FieldState::SuggestionsShown);
    }

    #[test]
    fn test_successful_resolution_reports_once() {
        let mut field = shown_field(vec![Suggestion::new("1", "Changi Airport")]);
        let (ticket, _) = field.select("1").unwrap();

        let reported = field.apply_resolution(ticket, Ok(Coordinate::new(1.3592, 103.9895)));
        assert_eq!(reported, Some(Coordinate::new(1.3592, 103.9895)));
        assert_eq!(field.state(), FieldState::Resolved);
        assert_eq!(field.resolved(), Some(Coordinate::new(1.3592, 103.9895)));
    }

    #[test]
    fn test_failed_resolution_leaves_field_unresolved() {
        let mut field = shown_field(vec![Suggestion::new("1", "Changi Airport")]);
        let (ticket, _) = field.select("1").unwrap();

        let reported = field.apply_resolution(
            ticket,
            Err(GeocodeError::Service("connection reset".to_string())),
        );
        assert_eq!(reported, None);
        assert_eq!(field.state(), FieldState::Typing);
        assert_eq!(field.resolved(), None);
        // the frozen label stays; the user re-selects from here
        assert_eq!(field.text(), "Changi Airport");
    }

    #[test]
    fn test_edit_clears_resolution_immediately() {
        let mut field = shown_field(vec![Suggestion::new("1", "Changi Airport")]);
        let (ticket, _) = field.select("1").unwrap();
        field.apply_resolution(ticket, Ok(Coordinate::new(1.3592, 103.9895)));

        field.edit("Changi B");
        assert_eq!(field.resolved(), None);
        assert_eq!(field.state(), FieldState::Typing);
    }

    /// A resolution that completes after the user re-edited the field
    /// must not overwrite the newer input.
    #[test]
    fn test_resolution_after_reedit_discarded() {
        let mut field = shown_field(vec![Suggestion::new("1", "Changi Airport")]);
        let (ticket, _) = field.select("1").unwrap();
        field.edit("Orchard");

        let reported = field.apply_resolution(ticket, Ok(Coordinate::new(1.3592, 103.9895)));
        assert_eq!(reported, None);
        assert_eq!(field.resolved(), None);
        assert_eq!(field.text(), "Orchard");
        assert_eq!(field.state(), FieldState::Typing);
    }
}
