//! Network registry
//!
//! Read-only reference data mapping network identifiers to a network family,
//! a subnetwork and the RPC endpoint used to reach it. Nothing here opens a
//! connection; callers resolve an id and hand the endpoint to a client.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub const NETWORK_ETHEREUM: &str = "ethereum";
pub const NETWORK_ETHEREUM_ROPSTEN: &str = "ropsten";
pub const NETWORK_ETHEREUM_MAINNET: &str = "mainnet";

/// Opaque network identifier, e.g. `mainnet`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NetworkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client library a network family is spoken with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientLibrary {
    Web3,
}

/// Connection details of one subnetwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnetwork {
    pub endpoint: String,
}

/// A network family (e.g. Ethereum) and its subnetworks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFamily {
    pub name: String,
    pub subnetworks: BTreeMap<String, Subnetwork>,
    pub client_library: ClientLibrary,
}

/// Where a network id points to: a family and one of its subnetworks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRoute {
    pub network: String,
    pub subnetwork: String,
}

/// Everything needed to reach a network, resolved from its id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNetwork {
    pub id: NetworkId,
    pub family: String,
    pub family_name: String,
    pub subnetwork: String,
    pub endpoint: String,
    pub client_library: ClientLibrary,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown network `{0}`")]
    UnknownNetwork(NetworkId),

    #[error("network `{id}` refers to unknown family `{family}`")]
    UnknownFamily { id: NetworkId, family: String },

    #[error("network family `{family}` has no subnetwork `{subnetwork}`")]
    UnknownSubnetwork { family: String, subnetwork: String },
}

/// Registry of supported networks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRegistry {
    families: BTreeMap<String, NetworkFamily>,
    routes: BTreeMap<NetworkId, NetworkRoute>,
}

impl NetworkRegistry {
    /// The pre-registered networks: Ethereum mainnet and ropsten over Infura
    pub fn builtin(infura_token: Option<&str>) -> Self {
        let token = infura_token.unwrap_or_default();
        let subnetworks = [NETWORK_ETHEREUM_MAINNET, NETWORK_ETHEREUM_ROPSTEN]
            .into_iter()
            .map(|sub| {
                let endpoint = format!("https://{}.infura.io/{}", sub, token);
                (sub.to_string(), Subnetwork { endpoint })
            })
            .collect();

        let families = BTreeMap::from([(
            NETWORK_ETHEREUM.to_string(),
            NetworkFamily {
                name: "Ethereum".to_string(),
                subnetworks,
                client_library: ClientLibrary::Web3,
            },
        )]);

        let routes = [NETWORK_ETHEREUM_MAINNET, NETWORK_ETHEREUM_ROPSTEN]
            .into_iter()
            .map(|sub| {
                let route = NetworkRoute {
                    network: NETWORK_ETHEREUM.to_string(),
                    subnetwork: sub.to_string(),
                };
                (NetworkId::from(sub), route)
            })
            .collect();

        Self { families, routes }
    }

    /// All registered network ids, sorted
    pub fn ids(&self) -> impl Iterator<Item = &NetworkId> {
        self.routes.keys()
    }

    pub fn contains(&self, id: &NetworkId) -> bool {
        self.routes.contains_key(id)
    }

    pub fn family(&self, name: &str) -> Option<&NetworkFamily> {
        self.families.get(name)
    }

    /// Resolve a network id to its family, subnetwork and endpoint
    pub fn resolve(&self, id: &NetworkId) -> Result<ResolvedNetwork, RegistryError> {
        let route = self
            .routes
            .get(id)
            .ok_or_else(|| RegistryError::UnknownNetwork(id.clone()))?;

        let family = self
            .families
            .get(&route.network)
            .ok_or_else(|| RegistryError::UnknownFamily {
                id: id.clone(),
                family: route.network.clone(),
            })?;

        let subnetwork = family.subnetworks.get(&route.subnetwork).ok_or_else(|| {
            RegistryError::UnknownSubnetwork {
                family: route.network.clone(),
                subnetwork: route.subnetwork.clone(),
            }
        })?;

        Ok(ResolvedNetwork {
            id: id.clone(),
            family: route.network.clone(),
            family_name: family.name.clone(),
            subnetwork: route.subnetwork.clone(),
            endpoint: subnetwork.endpoint.clone(),
            client_library: family.client_library,
        })
    }
}
