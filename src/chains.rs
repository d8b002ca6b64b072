//! Lookup tables of a deployment.

use crate::{
    config::{ChainConfig, DeploymentConfig, RootDeployment},
    error::UlyssesError,
    types::{AssetArity, GasParams},
};
use alloy::primitives::{Address, ChainId};
use std::sync::Arc;

/// Immutable view over a [`DeploymentConfig`].
///
/// Cheap to clone and safe to share between threads; nothing in it is ever mutated.
#[derive(Debug, Clone)]
pub struct Deployments(Arc<DeploymentConfig>);

impl Deployments {
    /// Creates a new instance of [`Deployments`], checking that every chain points at a
    /// configured root chain and that every root chain maps to itself.
    pub fn new(config: DeploymentConfig) -> Result<Self, UlyssesError> {
        for chain in config.chains.values() {
            if !config.roots.contains_key(&chain.root_chain_id) {
                return Err(UlyssesError::InvalidChainId(chain.root_chain_id));
            }
        }
        for root_chain_id in config.roots.keys() {
            match config.chains.get(root_chain_id) {
                Some(chain) if chain.root_chain_id == *root_chain_id => {}
                _ => return Err(UlyssesError::InvalidChainId(*root_chain_id)),
            }
        }
        Ok(Self(Arc::new(config)))
    }

    /// The underlying config.
    pub fn config(&self) -> &DeploymentConfig {
        &self.0
    }

    /// Config of a chain.
    pub fn chain(&self, chain_id: ChainId) -> Result<&ChainConfig, UlyssesError> {
        self.0.chains.get(&chain_id).ok_or(UlyssesError::InvalidChainId(chain_id))
    }

    /// The root chain `chain_id` settles on.
    pub fn root_chain_id(&self, chain_id: ChainId) -> Result<ChainId, UlyssesError> {
        self.chain(chain_id).map(|chain| chain.root_chain_id)
    }

    /// Returns `true` if `chain_id` is a root chain.
    pub fn is_root_chain(&self, chain_id: ChainId) -> Result<bool, UlyssesError> {
        Ok(self.root_chain_id(chain_id)? == chain_id)
    }

    /// Contracts of a root chain. Fails for chains that are not root chains.
    pub fn root(&self, root_chain_id: ChainId) -> Result<&RootDeployment, UlyssesError> {
        self.0.roots.get(&root_chain_id).ok_or(UlyssesError::InvalidChainId(root_chain_id))
    }

    /// Contracts of the root chain `chain_id` settles on.
    pub fn root_of(&self, chain_id: ChainId) -> Result<&RootDeployment, UlyssesError> {
        self.root(self.root_chain_id(chain_id)?)
    }

    /// Messaging layer id of a chain, as embedded in payloads.
    pub fn lz_chain_id(&self, chain_id: ChainId) -> Result<u16, UlyssesError> {
        self.chain(chain_id).map(|chain| chain.lz_chain_id)
    }

    /// The compressed multicall branch bridge agent of a chain.
    pub fn branch_bridge_agent(&self, chain_id: ChainId) -> Result<Address, UlyssesError> {
        self.chain(chain_id).map(|chain| chain.branch_bridge_agent)
    }

    /// Default gas settings of a chain, zero if none are configured.
    pub fn default_gas_params(&self, chain_id: ChainId) -> Result<GasParams, UlyssesError> {
        Ok(self.chain(chain_id)?.default_gas.map(GasParams::from).unwrap_or(GasParams::ZERO))
    }

    /// Advisory base gas of a hop.
    pub fn base_gas(&self, arity: AssetArity, fallback: bool) -> u64 {
        self.0.base_gas.get(arity, fallback)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Network;

    /// Deployments of `tests/assets/deployments.yaml`.
    pub(crate) fn fixture() -> Deployments {
        let config =
            serde_yaml::from_str(include_str!("../tests/assets/deployments.yaml")).unwrap();
        Deployments::new(config).unwrap()
    }

    #[test]
    fn root_chain_mapping() {
        let deployments = fixture();
        assert_eq!(deployments.root_chain_id(8453).unwrap(), 42161);
        assert_eq!(deployments.root_chain_id(11155111).unwrap(), 421614);
        assert!(deployments.is_root_chain(42161).unwrap());
        assert!(!deployments.is_root_chain(1).unwrap());
        assert_eq!(deployments.root_of(10).unwrap().network, Network::Mainnet);
        assert_eq!(deployments.lz_chain_id(421614).unwrap(), 10231);
        assert_eq!(
            deployments.branch_bridge_agent(8453).unwrap(),
            alloy::primitives::address!("0xA000000000000000000000000000000000008453")
        );
    }

    #[test]
    fn unknown_chains() {
        let deployments = fixture();
        assert!(matches!(deployments.root_chain_id(56), Err(UlyssesError::InvalidChainId(56))));
        assert!(matches!(deployments.root(8453), Err(UlyssesError::InvalidChainId(8453))));
    }

    #[test]
    fn default_gas() {
        let deployments = fixture();
        assert_eq!(deployments.default_gas_params(8453).unwrap(), GasParams::new(300_000, 0));
        assert_eq!(deployments.default_gas_params(1).unwrap(), GasParams::ZERO);
    }

    #[test]
    fn inconsistent_config() {
        let mut config = fixture().config().clone();
        config.chains.get_mut(&1).unwrap().root_chain_id = 56;
        assert!(matches!(Deployments::new(config), Err(UlyssesError::InvalidChainId(56))));

        let mut config = fixture().config().clone();
        config.chains.remove(&421614);
        config.chains.remove(&11155111);
        assert!(matches!(Deployments::new(config), Err(UlyssesError::InvalidChainId(421614))));
    }
}
