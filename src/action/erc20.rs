use super::Action;
use crate::{
    error::{ArgumentError, UlyssesError},
    types::{ActionResult, IERC20},
};
use alloy::{
    primitives::{Address, U256},
    sol_types::SolCall,
};

/// `approve(spender, amount)` on an ERC20 token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc20Approve {
    /// The token.
    pub token: Address,
    /// The approved spender.
    pub spender: Address,
    /// The allowance.
    pub amount: U256,
}

impl Erc20Approve {
    /// Creates a new instance of [`Erc20Approve`].
    pub fn new(token: Address, spender: Address, amount: U256) -> Self {
        Self { token, spender, amount }
    }
}

impl Action for Erc20Approve {
    fn encode(&self) -> Result<ActionResult, UlyssesError> {
        ensure_token(self.token)?;
        if self.spender.is_zero() {
            return Err(ArgumentError::ZeroAddress { field: "spender" }.into());
        }
        let calldata =
            IERC20::approveCall { spender: self.spender, amount: self.amount }.abi_encode();
        Ok(ActionResult::new(self.token, calldata, U256::ZERO))
    }
}

/// `transfer(to, amount)` on an ERC20 token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Erc20Transfer {
    /// The token.
    pub token: Address,
    /// The receiver.
    pub to: Address,
    /// The amount.
    pub amount: U256,
}

impl Erc20Transfer {
    /// Creates a new instance of [`Erc20Transfer`].
    pub fn new(token: Address, to: Address, amount: U256) -> Self {
        Self { token, to, amount }
    }
}

impl Action for Erc20Transfer {
    fn encode(&self) -> Result<ActionResult, UlyssesError> {
        ensure_token(self.token)?;
        if self.to.is_zero() {
            return Err(ArgumentError::ZeroAddress { field: "to" }.into());
        }
        let calldata = IERC20::transferCall { to: self.to, amount: self.amount }.abi_encode();
        Ok(ActionResult::new(self.token, calldata, U256::ZERO))
    }
}

fn ensure_token(token: Address) -> Result<(), ArgumentError> {
    if token.is_zero() {
        return Err(ArgumentError::ZeroAddress { field: "token" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, hex};

    #[test]
    fn transfer_calldata() {
        let result = Erc20Transfer::new(
            address!("0x3333333333333333333333333333333333333333"),
            address!("0x4444444444444444444444444444444444444444"),
            U256::from(1),
        )
        .encode()
        .unwrap();
        assert_eq!(
            result.calldata.as_ref(),
            hex!(
                "a9059cbb"
                "0000000000000000000000004444444444444444444444444444444444444444"
                "0000000000000000000000000000000000000000000000000000000000000001"
            )
        );
        assert_eq!(result.value, U256::ZERO);
    }

    #[test]
    fn zero_token() {
        assert!(
            Erc20Approve::new(Address::ZERO, Address::with_last_byte(1), U256::MAX)
                .encode()
                .is_err()
        );
    }
}
