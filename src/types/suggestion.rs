//! Definition of the [`Suggestion`] type.

use serde::{Deserialize, Serialize};

/// A ranked place candidate returned by the autocomplete service for a
/// partial text query.
///
/// Suggestions are ephemeral: they exist only for the duration of one
/// query's result set and are superseded wholesale by the next query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Suggestion {
    /// Identifier unique within one query response, typically the
    /// service's place id.
    pub id: String,

    /// Human-readable place description shown in the suggestion list.
    pub label: String,
}

impl Suggestion {
    pub fn new(id: &str, label: &str) -> Suggestion {
        Suggestion {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}
