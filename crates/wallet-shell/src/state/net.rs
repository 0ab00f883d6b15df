//! Network connection state

use serde::Serialize;
use wallet_config::NetworkId;

use crate::actions::NetError;
use crate::reducer_factory::Slice;

/// Network connection state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetState {
    /// Network selected by the last connect-init, if any
    pub network: Option<NetworkId>,
    pub connecting: bool,
    /// Last reported connection failure
    pub error: Option<NetError>,
}

impl NetState {
    pub fn network_id(&self) -> Option<&str> {
        self.network.as_ref().map(NetworkId::as_str)
    }
}

/// Partial update of [`NetState`]
///
/// The outer `Option` says whether a field is touched at all, so a patch can
/// also reset `network` or `error` back to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetPatch {
    pub network: Option<Option<NetworkId>>,
    pub connecting: Option<bool>,
    pub error: Option<Option<NetError>>,
}

impl Slice for NetState {
    type Patch = NetPatch;

    fn merge(&self, patch: NetPatch) -> Self {
        Self {
            network: patch.network.unwrap_or_else(|| self.network.clone()),
            connecting: patch.connecting.unwrap_or(self.connecting),
            error: patch.error.unwrap_or_else(|| self.error.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default() {
        assert_eq!(
            NetState::default(),
            NetState {
                network: None,
                connecting: false,
                error: None,
            }
        );
    }

    #[test]
    fn test_merge_can_clear_fields() {
        let state = NetState {
            network: Some(NetworkId::from("mainnet")),
            connecting: true,
            error: Some(NetError::from("boom")),
        };
        let next = state.merge(NetPatch {
            error: Some(None),
            ..NetPatch::default()
        });
        assert_eq!(next.error, None);
        assert_eq!(next.network_id(), Some("mainnet"));
        assert!(next.connecting);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let state = NetState {
            network: Some(NetworkId::from("ropsten")),
            connecting: false,
            error: None,
        };
        assert_eq!(state.merge(NetPatch::default()), state);
    }
}
