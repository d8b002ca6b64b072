//! Calls to a user's Virtual Account on the root chain.

use super::{ensure_calls, ensure_non_zero};
use crate::{
    error::{ArgumentError, UlyssesError},
    types::{ActionResult, Call, IVirtualAccount, PayableCall},
};
use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolCall,
};

/// `call(calls)`.
pub fn call(calls: Vec<Call>) -> Result<Bytes, UlyssesError> {
    ensure_calls(&calls)?;
    Ok(IVirtualAccount::callCall { calls }.abi_encode().into())
}

/// `payableCall(calls)`. The transaction must carry the sum of the call values.
pub fn payable_call(calls: Vec<PayableCall>) -> Result<Bytes, UlyssesError> {
    ensure_calls(&calls)?;
    Ok(IVirtualAccount::payableCallCall { calls }.abi_encode().into())
}

/// Folds `results` into a single call to the Virtual Account at `account`.
///
/// Uses `payableCall` if any result forwards value, `call` otherwise. The returned value is
/// the sum of the forwarded values. A `value` given by the caller must match that sum, since
/// `payableCall` reverts on any other `msg.value`.
pub fn batch(
    account: Address,
    results: &[ActionResult],
    value: Option<U256>,
) -> Result<ActionResult, UlyssesError> {
    let forwarded = total_value(results)?;
    if let Some(value) = value
        && value != forwarded
    {
        return Err(ArgumentError::ValueMismatch { value, forwarded }.into());
    }
    let calldata = if forwarded.is_zero() {
        call(results.iter().map(Call::from).collect())?
    } else {
        payable_call(results.iter().map(PayableCall::from).collect())?
    };
    Ok(ActionResult::new(account, calldata, forwarded))
}

/// `withdrawNative(amount)`.
pub fn withdraw_native(amount: U256) -> Bytes {
    IVirtualAccount::withdrawNativeCall { _amount: amount }.abi_encode().into()
}

/// `withdrawERC20(token, amount)`.
pub fn withdraw_erc20(token: Address, amount: U256) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(token, "token")?;
    Ok(IVirtualAccount::withdrawERC20Call { _token: token, _amount: amount }.abi_encode().into())
}

/// `withdrawERC721(token, tokenId)`.
pub fn withdraw_erc721(token: Address, token_id: U256) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(token, "token")?;
    Ok(IVirtualAccount::withdrawERC721Call { _token: token, _tokenId: token_id }
        .abi_encode()
        .into())
}

/// Sum of the values forwarded by `results`.
pub(crate) fn total_value(results: &[ActionResult]) -> Result<U256, ArgumentError> {
    results.iter().try_fold(U256::ZERO, |total, result| {
        total.checked_add(result.value).ok_or(ArgumentError::ValueOverflow)
    })
}
