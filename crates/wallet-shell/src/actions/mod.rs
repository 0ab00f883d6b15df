//! Actions module
//!
//! Actions are immutable values describing an intent or event. They are
//! organized by the slice they target:
//! - `App`: application chrome (loading indicator)
//! - `Net`: network connection lifecycle
//! - `Routing`: location changes reported by the history collaborator
//!
//! Every action exposes its [`ActionKind`], the enumerated tag shared
//! between producers and reducers.

pub mod app;
pub mod net;
pub mod routing;

pub use app::{loading, AppAction};
pub use net::{connect, NetAction, NetError};
pub use routing::{location, Location, NavigationKind, RoutingAction};

use strum::{Display, EnumIter, IntoStaticStr};

/// Catalog of every action kind known to the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum ActionKind {
    #[strum(serialize = "APP_LOADING_START")]
    AppLoadingStart,
    #[strum(serialize = "APP_LOADING_END")]
    AppLoadingEnd,
    #[strum(serialize = "APP_LOADING_TOGGLE")]
    AppLoadingToggle,
    #[strum(serialize = "NET_CONNECT_INIT")]
    NetConnectInit,
    #[strum(serialize = "NET_CONNECT_START")]
    NetConnectStart,
    #[strum(serialize = "NET_CONNECT_END")]
    NetConnectEnd,
    #[strum(serialize = "NET_CONNECT_ERROR")]
    NetConnectError,
    #[strum(serialize = "@@router/LOCATION_CHANGE")]
    RoutingLocationChange,
    #[strum(serialize = "NONE")]
    None,
}

/// Root action enum - tagged by the slice it targets
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Application chrome actions
    App(AppAction),
    /// Network connection actions
    Net(NetAction),
    /// Router location actions
    Routing(RoutingAction),
    /// No-op action, used to initialize the store
    None,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::App(action) => action.kind(),
            Action::Net(action) => action.kind(),
            Action::Routing(action) => action.kind(),
            Action::None => ActionKind::None,
        }
    }
}
