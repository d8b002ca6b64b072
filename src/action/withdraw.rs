use super::Action;
use crate::{
    agents::virtual_account,
    error::UlyssesError,
    types::ActionResult,
};
use alloy::primitives::{Address, U256};

/// Withdraws assets out of a Virtual Account to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualAccountWithdraw {
    /// Native currency.
    Native {
        /// The Virtual Account.
        account: Address,
        /// Amount withdrawn.
        amount: U256,
    },
    /// An ERC20 token.
    Erc20 {
        /// The Virtual Account.
        account: Address,
        /// The token.
        token: Address,
        /// Amount withdrawn.
        amount: U256,
    },
    /// An ERC721 token.
    Erc721 {
        /// The Virtual Account.
        account: Address,
        /// The collection.
        token: Address,
        /// The token id.
        token_id: U256,
    },
}

impl Action for VirtualAccountWithdraw {
    fn encode(&self) -> Result<ActionResult, UlyssesError> {
        let (account, calldata) = match *self {
            Self::Native { account, amount } => (account, virtual_account::withdraw_native(amount)),
            Self::Erc20 { account, token, amount } => {
                (account, virtual_account::withdraw_erc20(token, amount)?)
            }
            Self::Erc721 { account, token, token_id } => {
                (account, virtual_account::withdraw_erc721(token, token_id)?)
            }
        };
        Ok(ActionResult::new(account, calldata, U256::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, hex};

    #[test]
    fn targets_the_account() {
        let account = address!("0x7dEaeC1777058ae6E42417631225f385FdC94B37");
        let result = VirtualAccountWithdraw::Erc20 {
            account,
            token: address!("0x3333333333333333333333333333333333333333"),
            amount: U256::from(1),
        }
        .encode()
        .unwrap();
        assert_eq!(result.target, account);
        assert_eq!(result.calldata[..4], hex!("a1db9782"));
    }
}
