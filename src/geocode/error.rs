//! Error types for the geocoding pipeline.

use thiserror::Error;

/// Errors reported by the autocomplete/geocoding service or its
/// wrapper. None of these are fatal; every one is recoverable by
/// further user interaction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeocodeError {
    /// The service client never finished loading. Callers render a
    /// static textual fallback in place of the form.
    #[error("geocoding service unavailable: {0}")]
    Unavailable(String),

    /// The service answered but returned zero candidates for the
    /// address.
    #[error("no geocoding result for \"{0}\"")]
    NoMatch(String),

    /// Transport-level failure reported by the service client.
    #[error("geocoding service error: {0}")]
    Service(String),
}

/// Errors returned by
/// [`RouteRequestForm::submit`](crate::form::RouteRequestForm::submit).
/// The display text is shown to the user as a blocking notice.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The start field has no resolved coordinate.
    #[error("Please enter starting location")]
    EmptyStart,
}
