//! Router state

use serde::Serialize;

use crate::actions::Location;

/// Location tracked by the router, empty until history reports one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoutingState {
    pub location_before_transitions: Option<Location>,
}

impl RoutingState {
    pub fn pathname(&self) -> Option<&str> {
        self.location_before_transitions
            .as_ref()
            .map(|location| location.pathname.as_str())
    }
}
