//! Virtual Account address derivation.

use crate::{chains::Deployments, config::RootDeployment, error::UlyssesError};
use alloy::primitives::{Address, B256, ChainId, Keccak256};
use tracing::trace;

impl RootDeployment {
    /// The init code hash of `user`'s Virtual Account.
    ///
    /// The hash is computed as `keccak256(virtualAccountCode ++ abi.encode(user))`.
    pub fn virtual_account_init_code_hash(&self, user: Address) -> B256 {
        let mut hasher = Keccak256::new();
        hasher.update(&self.virtual_account_code);
        hasher.update(user.into_word());
        hasher.finalize()
    }

    /// The address the root port deploys `user`'s Virtual Account at.
    ///
    /// The user address, left padded to 32 bytes, is both the CREATE2 salt and the single
    /// constructor argument.
    pub fn virtual_account_address(&self, user: Address) -> Address {
        self.root_port.create2(user.into_word(), self.virtual_account_init_code_hash(user))
    }
}

/// Derives `user`'s Virtual Account on the root chain `root_chain_id`.
///
/// Fails with [`UlyssesError::InvalidChainId`] if `root_chain_id` is not a configured root
/// chain. Branch chains are rejected as well, they have no Virtual Accounts.
pub fn derive_virtual_account(
    deployments: &Deployments,
    user: Address,
    root_chain_id: ChainId,
) -> Result<Address, UlyssesError> {
    let root = deployments.root(root_chain_id)?;
    let account = root.virtual_account_address(user);
    trace!(%user, root_chain_id, %account, network = %root.network, "Derived virtual account");
    Ok(account)
}
