//! Configuration for the wallet shell
//!
//! This crate provides:
//! - The static network registry (network ids, families, endpoints)
//! - Application configuration (AppConfig) loaded from TOML
//! - Config and cache directory paths

pub mod app_config;
pub mod config_file;
pub mod network;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use network::{
    ClientLibrary, NetworkFamily, NetworkId, NetworkRegistry, NetworkRoute, RegistryError,
    ResolvedNetwork, Subnetwork, NETWORK_ETHEREUM, NETWORK_ETHEREUM_MAINNET,
    NETWORK_ETHEREUM_ROPSTEN,
};
pub use paths::{app_config_path, cache_dir, config_dir};
