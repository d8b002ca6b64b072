use super::Action;
use crate::{
    error::{ArgumentError, UlyssesError},
    types::{ActionResult, IWETH9},
};
use alloy::{
    primitives::{Address, U256},
    sol_types::SolCall,
};

/// Wraps native currency through `deposit()` on the wrapped native token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapNative {
    /// The wrapped native token.
    pub weth: Address,
    /// Amount of native currency to wrap, forwarded as call value.
    pub amount: U256,
}

impl WrapNative {
    /// Creates a new instance of [`WrapNative`].
    pub fn new(weth: Address, amount: U256) -> Self {
        Self { weth, amount }
    }
}

impl Action for WrapNative {
    fn encode(&self) -> Result<ActionResult, UlyssesError> {
        ensure_weth(self.weth)?;
        Ok(ActionResult::new(self.weth, IWETH9::depositCall {}.abi_encode(), self.amount))
    }
}

/// Unwraps native currency through `withdraw(wad)` on the wrapped native token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapNative {
    /// The wrapped native token.
    pub weth: Address,
    /// Amount to unwrap.
    pub amount: U256,
}

impl UnwrapNative {
    /// Creates a new instance of [`UnwrapNative`].
    pub fn new(weth: Address, amount: U256) -> Self {
        Self { weth, amount }
    }
}

impl Action for UnwrapNative {
    fn encode(&self) -> Result<ActionResult, UlyssesError> {
        ensure_weth(self.weth)?;
        let calldata = IWETH9::withdrawCall { wad: self.amount }.abi_encode();
        Ok(ActionResult::new(self.weth, calldata, U256::ZERO))
    }
}

fn ensure_weth(weth: Address) -> Result<(), ArgumentError> {
    if weth.is_zero() {
        return Err(ArgumentError::ZeroAddress { field: "weth" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, hex};

    const WETH: Address = address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1");

    #[test]
    fn wrap_and_unwrap() {
        let wrap = WrapNative::new(WETH, U256::from(5)).encode().unwrap();
        assert_eq!(wrap.calldata.as_ref(), hex!("d0e30db0"));
        assert_eq!(wrap.value, U256::from(5));

        let unwrap = UnwrapNative::new(WETH, U256::from(5)).encode().unwrap();
        assert_eq!(unwrap.calldata[..4], hex!("2e1a7d4d"));
        assert_eq!(unwrap.value, U256::ZERO);
    }
}
