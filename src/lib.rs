//! Route Request Form Library.
//! Handles the location-search and route-request pipeline of a map UI.
//!
//! The crate is headless: it owns the state of an autocomplete-backed
//! location form and hands a finished [`request::RouteRequest`] to an
//! external consumer. Map rendering, route computation and the
//! places/geocoding network calls themselves all live outside, behind
//! the [`lookup::GeocodeService`] trait.

#[macro_use]
extern crate log;

mod types {
    pub mod coordinate;
    pub mod request;
    pub mod suggestion;
}

mod geocode {
    pub mod error;
    pub mod lookup;
}

mod ui {
    pub mod field;
    pub mod form;
    pub mod shell;
}

pub use geocode::error;
pub use geocode::lookup;
pub use types::coordinate;
pub use types::request;
pub use types::suggestion;
pub use ui::field;
pub use ui::form;
pub use ui::shell;
