//! Definition of the [`RouteRequest`] type.

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// The payload handed to the external consumer when the form is
/// submitted. Constructed once at submit time; the form does not retain
/// it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// The resolved starting point. Submission is rejected before a
    /// request is built if the start field is unresolved.
    pub start: Coordinate,

    /// The resolved destination, if the user picked one. A missing
    /// destination is interpreted by the consumer, typically as
    /// "route to the nearest rack".
    pub dest: Option<Coordinate>,

    /// Whether the nearest bike rack should be used as the destination.
    pub use_nearest_rack: bool,
}
