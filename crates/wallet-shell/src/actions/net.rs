//! Network connection actions
//!
//! The connection lifecycle as reported by whoever establishes connections:
//! which network was chosen, when connecting starts and ends, and the last
//! failure.

use serde::Serialize;
use std::fmt;
use wallet_config::NetworkId;

use super::{Action, ActionKind};

/// Opaque connection failure, recorded as state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NetError(String);

impl NetError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NetError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for NetError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<wallet_config::RegistryError> for NetError {
    fn from(err: wallet_config::RegistryError) -> Self {
        Self(err.to_string())
    }
}

impl fmt::Display for NetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetAction {
    /// Network selected for connecting
    ConnectInit { network: NetworkId },
    ConnectStart,
    ConnectEnd,
    ConnectError { error: NetError },
}

impl NetAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            NetAction::ConnectInit { .. } => ActionKind::NetConnectInit,
            NetAction::ConnectStart => ActionKind::NetConnectStart,
            NetAction::ConnectEnd => ActionKind::NetConnectEnd,
            NetAction::ConnectError { .. } => ActionKind::NetConnectError,
        }
    }
}

/// Connection action creators
pub mod connect {
    use super::{Action, NetAction, NetError};
    use wallet_config::NetworkId;

    pub fn init(network: impl Into<NetworkId>) -> Action {
        Action::Net(NetAction::ConnectInit {
            network: network.into(),
        })
    }

    pub fn start() -> Action {
        Action::Net(NetAction::ConnectStart)
    }

    pub fn end() -> Action {
        Action::Net(NetAction::ConnectEnd)
    }

    pub fn error(error: impl Into<NetError>) -> Action {
        Action::Net(NetAction::ConnectError {
            error: error.into(),
        })
    }
}
