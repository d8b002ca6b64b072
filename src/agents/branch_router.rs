//! Calls to a branch router, the entry point that forwards to the branch bridge agent.

use super::ensure_non_zero;
use crate::{
    error::UlyssesError,
    types::{
        DepositInput, DepositMultipleInput, GasParams, IBranchRouter, MultipleAssets, SingleAsset,
    },
};
use alloy::{
    primitives::{Address, Bytes, ChainId, U256},
    sol_types::SolCall,
};

/// `callOut(params, gParams)`.
pub fn call_out(params: impl Into<Bytes>, gas_params: &GasParams) -> Result<Bytes, UlyssesError> {
    gas_params.validate()?;
    Ok(IBranchRouter::callOutCall { _params: params.into(), _gParams: gas_params.clone() }
        .abi_encode()
        .into())
}

/// `callOutAndBridge(params, dParams, gParams)`.
pub fn call_out_and_bridge(
    params: impl Into<Bytes>,
    deposit: &SingleAsset,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    deposit.validate()?;
    gas_params.validate()?;
    Ok(IBranchRouter::callOutAndBridgeCall {
        _params: params.into(),
        _dParams: DepositInput::from(deposit),
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `callOutAndBridgeMultiple(params, dParams, gParams)`.
pub fn call_out_and_bridge_multiple(
    params: impl Into<Bytes>,
    deposit: &MultipleAssets,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    deposit.validate()?;
    gas_params.validate()?;
    Ok(IBranchRouter::callOutAndBridgeMultipleCall {
        _params: params.into(),
        _dParams: DepositMultipleInput::from(deposit),
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `addLocalToken(underlyingAddress, gParams)`, registering a branch token with the root chain.
pub fn add_local_token(
    underlying: Address,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(underlying, "underlyingAddress")?;
    gas_params.validate()?;
    Ok(IBranchRouter::addLocalTokenCall {
        _underlyingAddress: underlying,
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `addGlobalToken(globalAddress, dstChainId, gParams[3])`, making a global token available
/// on `dst_chain_id`.
///
/// The three gas settings pay for the hop to the root chain, the hop to the destination and
/// the confirmation back to the root chain.
pub fn add_global_token(
    global_address: Address,
    dst_chain_id: ChainId,
    gas_params: [GasParams; 3],
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(global_address, "globalAddress")?;
    gas_params.iter().try_for_each(GasParams::validate)?;
    Ok(IBranchRouter::addGlobalTokenCall {
        _globalAddress: global_address,
        _dstChainId: U256::from(dst_chain_id),
        _gParams: gas_params,
    }
    .abi_encode()
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentError;
    use alloy::primitives::{address, hex};

    #[test]
    fn router_calls() {
        let gas = GasParams::new(250_000, 100_000);
        let calldata = call_out(hex!("01").to_vec(), &gas).unwrap();
        assert_eq!(calldata[..4], hex!("f4f79eb5"));
        let call = IBranchRouter::callOutCall::abi_decode(&calldata).unwrap();
        assert_eq!(call._gParams, gas);

        let token = address!("0x4444444444444444444444444444444444444444");
        assert_eq!(add_local_token(token, &gas).unwrap()[..4], hex!("2786d293"));

        let calldata =
            add_global_token(token, 8453, [gas.clone(), gas.clone(), GasParams::ZERO]).unwrap();
        let call = IBranchRouter::addGlobalTokenCall::abi_decode(&calldata).unwrap();
        assert_eq!(call._dstChainId, U256::from(8453));
        assert_eq!(call._gParams[2], GasParams::ZERO);
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(matches!(
            add_local_token(Address::ZERO, &GasParams::ZERO),
            Err(UlyssesError::InvalidArgument(ArgumentError::ZeroAddress { .. }))
        ));
        let deposit = SingleAsset::new(
            Address::ZERO,
            address!("0x4444444444444444444444444444444444444444"),
            U256::from(1),
            U256::from(1),
        );
        assert!(call_out_and_bridge(Bytes::new(), &deposit, &GasParams::ZERO).is_err());
    }
}
