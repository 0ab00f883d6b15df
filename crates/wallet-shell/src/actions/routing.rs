//! Routing actions
//!
//! Location changes reported by the history collaborator. The route table
//! itself lives outside the kernel; only the current location is tracked.

use serde::Serialize;

use super::{Action, ActionKind};

/// How the history arrived at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NavigationKind {
    Push,
    Replace,
    Pop,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub pathname: String,
    pub action: NavigationKind,
}

impl Location {
    pub fn new(pathname: impl Into<String>, action: NavigationKind) -> Self {
        Self {
            pathname: pathname.into(),
            action,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingAction {
    LocationChange(Location),
}

impl RoutingAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            RoutingAction::LocationChange(_) => ActionKind::RoutingLocationChange,
        }
    }
}

/// Location change action creators
pub mod location {
    use super::{Action, Location, NavigationKind, RoutingAction};

    pub fn push(pathname: impl Into<String>) -> Action {
        change(Location::new(pathname, NavigationKind::Push))
    }

    pub fn replace(pathname: impl Into<String>) -> Action {
        change(Location::new(pathname, NavigationKind::Replace))
    }

    pub fn change(location: Location) -> Action {
        Action::Routing(RoutingAction::LocationChange(location))
    }
}
