//! The navigation drawer hosting the route request form.

use crate::form::RouteRequestForm;

/// Side panel visibility state. Purely presentational: tracks whether
/// the drawer is open and owns the form shown inside it. Nothing here
/// persists across reloads.
pub struct NavigationShell {
    open: bool,
    form: RouteRequestForm,
}

impl NavigationShell {
    /// Creates a closed drawer around the form.
    pub fn new(form: RouteRequestForm) -> NavigationShell {
        NavigationShell { open: false, form }
    }

    /// Flips the drawer between open and closed.
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &RouteRequestForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RouteRequestForm {
        &mut self.form
    }
}

#[cfg(test)]
mod shell_tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::error::GeocodeError;
    use crate::lookup::{GeocodeLookup, GeocodeService};
    use crate::suggestion::Suggestion;

    struct IdleService;

    impl GeocodeService for IdleService {
        fn is_ready(&self) -> bool {
            true
        }

        fn autocomplete(&self, _query: &str) -> Result<Vec<Suggestion>, GeocodeError> {
            Ok(Vec::new())
        }

        fn geocode(&self, _address: &str) -> Result<Vec<Coordinate>, GeocodeError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_drawer_starts_closed_and_toggles() {
        let lookup = GeocodeLookup::new(Box::new(IdleService)).unwrap();
        let form = RouteRequestForm::new(lookup, Box::new(|_| {}));
        let mut shell = NavigationShell::new(form);

        assert!(!shell.is_open());
        shell.toggle_open();
        assert!(shell.is_open());
        shell.toggle_open();
        assert!(!shell.is_open());
    }

    #[test]
    fn test_form_reachable_while_closed() {
        let lookup = GeocodeLookup::new(Box::new(IdleService)).unwrap();
        let form = RouteRequestForm::new(lookup, Box::new(|_| {}));
        let mut shell = NavigationShell::new(form);

        shell.form_mut().toggle_rack();
        assert!(shell.form().use_nearest_rack());
    }
}
