//! Deployment configuration.
use crate::{
    constants::{
        BASE_GAS_FALLBACK, BASE_GAS_MULTIPLE_ASSET, BASE_GAS_NO_ASSET, BASE_GAS_SINGLE_ASSET,
    },
    types::{AssetArity, DefaultGas},
};
use alloy::primitives::{Address, Bytes, ChainId};
use eyre::Context;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use strum::Display;

/// Addresses and tables of a Ulysses deployment.
///
/// Loaded once and handed to [`Deployments`](crate::chains::Deployments), which every encoder
/// that needs a table borrows from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Root chain deployments, keyed by root chain id.
    #[serde(default)]
    pub roots: BTreeMap<ChainId, RootDeployment>,
    /// Every chain of the deployment, root chains included.
    #[serde(default)]
    pub chains: BTreeMap<ChainId, ChainConfig>,
    /// Advisory base gas per hop kind.
    #[serde(default)]
    pub base_gas: BaseGasConfig,
}

impl DeploymentConfig {
    /// Adds a root chain deployment.
    pub fn with_root(mut self, root_chain_id: ChainId, root: RootDeployment) -> Self {
        self.roots.insert(root_chain_id, root);
        self
    }

    /// Adds a chain.
    pub fn with_chain(mut self, chain_id: ChainId, chain: ChainConfig) -> Self {
        self.chains.insert(chain_id, chain);
        self
    }

    /// Sets the base gas table.
    pub fn with_base_gas(mut self, base_gas: BaseGasConfig) -> Self {
        self.base_gas = base_gas;
        self
    }

    /// Load from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .wrap_err_with(|| format!("failed to read config file: {}", path.display()))?;
        let config = serde_yaml::from_reader(&file)
            .wrap_err_with(|| format!("failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save to a YAML file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> eyre::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Network class of a root deployment. Mainnet and testnet ship different Virtual Account
/// bytecode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Network {
    /// Production.
    #[default]
    Mainnet,
    /// Test networks.
    Testnet,
}

/// Contracts deployed on a root chain.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootDeployment {
    /// Network class of the deployment.
    #[serde(default)]
    pub network: Network,
    /// The root port, deployer of every Virtual Account.
    pub root_port: Address,
    /// Creation bytecode of the Virtual Account, without constructor arguments.
    pub virtual_account_code: Bytes,
    /// The multicall root bridge agent.
    pub root_bridge_agent: Address,
    /// The multicall root router.
    pub multicall_root_router: Address,
}

/// A chain participating in a deployment.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// The root chain this chain settles on. A root chain maps to itself.
    pub root_chain_id: ChainId,
    /// Messaging layer id embedded in payloads as `uint16`.
    pub lz_chain_id: u16,
    /// The compressed multicall branch bridge agent.
    pub branch_bridge_agent: Address,
    /// The branch router in front of the bridge agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_router: Option<Address>,
    /// Gas settings used when a hop to this chain does not specify any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_gas: Option<DefaultGas>,
}

/// Advisory base gas of a hop, keyed by the asset arity of its payload and by whether
/// fallback is toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseGasConfig {
    /// Hop without asset.
    pub no_asset: u64,
    /// Hop with a single asset.
    pub single_asset: u64,
    /// Hop with several assets.
    pub multiple_asset: u64,
    /// Hop without asset, fallback toggled.
    pub no_asset_fallback: u64,
    /// Hop with a single asset, fallback toggled.
    pub single_asset_fallback: u64,
    /// Hop with several assets, fallback toggled.
    pub multiple_asset_fallback: u64,
}

impl Default for BaseGasConfig {
    fn default() -> Self {
        Self {
            no_asset: BASE_GAS_NO_ASSET,
            single_asset: BASE_GAS_SINGLE_ASSET,
            multiple_asset: BASE_GAS_MULTIPLE_ASSET,
            no_asset_fallback: BASE_GAS_NO_ASSET + BASE_GAS_FALLBACK,
            single_asset_fallback: BASE_GAS_SINGLE_ASSET + BASE_GAS_FALLBACK,
            multiple_asset_fallback: BASE_GAS_MULTIPLE_ASSET + BASE_GAS_FALLBACK,
        }
    }
}

impl BaseGasConfig {
    /// Base gas of a hop.
    pub fn get(&self, arity: AssetArity, fallback: bool) -> u64 {
        match (arity, fallback) {
            (AssetArity::None, false) => self.no_asset,
            (AssetArity::Single, false) => self.single_asset,
            (AssetArity::Multiple, false) => self.multiple_asset,
            (AssetArity::None, true) => self.no_asset_fallback,
            (AssetArity::Single, true) => self.single_asset_fallback,
            (AssetArity::Multiple, true) => self.multiple_asset_fallback,
        }
    }
}
