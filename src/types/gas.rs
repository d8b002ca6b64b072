//! Gas parameters attached to every cross-chain call.

use super::GasParams;
use crate::error::ArgumentError;
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

impl GasParams {
    /// Gas parameters used when a context does not provide any.
    pub const ZERO: Self = Self { gasLimit: U256::ZERO, remoteBranchExecutionGas: U256::ZERO };

    /// Creates a new instance of [`GasParams`].
    pub fn new(gas_limit: u64, remote_branch_execution_gas: u64) -> Self {
        Self {
            gasLimit: U256::from(gas_limit),
            remoteBranchExecutionGas: U256::from(remote_branch_execution_gas),
        }
    }

    /// Checks that the gas earmarked for the remote hop fits within the gas limit.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if self.remoteBranchExecutionGas > self.gasLimit {
            return Err(ArgumentError::RemoteGasExceedsLimit {
                limit: self.gasLimit,
                remote: self.remoteBranchExecutionGas,
            });
        }
        Ok(())
    }
}

/// Default gas settings for a chain, as found in the deployment config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultGas {
    /// Gas limit of the destination execution.
    pub gas_limit: u64,
    /// Portion of the gas limit earmarked for the remote branch hop.
    #[serde(default)]
    pub remote_branch_execution_gas: u64,
}

impl From<DefaultGas> for GasParams {
    fn from(gas: DefaultGas) -> Self {
        Self::new(gas.gas_limit, gas.remote_branch_execution_gas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_gas_within_limit() {
        assert!(GasParams::ZERO.validate().is_ok());
        assert!(GasParams::new(200_000, 200_000).validate().is_ok());
        assert!(GasParams::new(200_000, 50_000).validate().is_ok());
    }

    #[test]
    fn remote_gas_above_limit() {
        assert_eq!(
            GasParams::new(100, 101).validate(),
            Err(ArgumentError::RemoteGasExceedsLimit {
                limit: U256::from(100),
                remote: U256::from(101)
            })
        );
    }
}
