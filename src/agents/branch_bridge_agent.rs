//! Calls to a branch bridge agent.
//!
//! The multicall branch bridge agents are deployed behind a decompressing fallback, so every
//! call can also be sent [`compressed`].

use super::ensure_non_zero;
use crate::{
    codec::cd_compress,
    error::UlyssesError,
    types::{
        DepositInput, DepositMultipleInput, GasParams, IBranchBridgeAgent, MultipleAssets, Nonce,
        SingleAsset,
    },
};
use alloy::{
    primitives::{Address, Bytes},
    sol_types::SolCall,
};
use tracing::trace;

/// `callOut(gasRefundee, params, gParams)`.
pub fn call_out(
    gas_refundee: Address,
    params: impl Into<Bytes>,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(gas_refundee, "gasRefundee")?;
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::callOutCall {
        _gasRefundee: gas_refundee,
        _params: params.into(),
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `callOutAndBridge(gasRefundee, params, dParams, gParams)`.
pub fn call_out_and_bridge(
    gas_refundee: Address,
    params: impl Into<Bytes>,
    deposit: &SingleAsset,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(gas_refundee, "gasRefundee")?;
    deposit.validate()?;
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::callOutAndBridgeCall {
        _gasRefundee: gas_refundee,
        _params: params.into(),
        _dParams: DepositInput::from(deposit),
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `callOutAndBridgeMultiple(gasRefundee, params, dParams, gParams)`.
pub fn call_out_and_bridge_multiple(
    gas_refundee: Address,
    params: impl Into<Bytes>,
    deposit: &MultipleAssets,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(gas_refundee, "gasRefundee")?;
    deposit.validate()?;
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::callOutAndBridgeMultipleCall {
        _gasRefundee: gas_refundee,
        _params: params.into(),
        _dParams: DepositMultipleInput::from(deposit),
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `callOutSigned(params, gParams)`, executed by the caller's Virtual Account.
pub fn call_out_signed(
    params: impl Into<Bytes>,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::callOutSignedCall {
        _params: params.into(),
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `callOutSignedAndBridge(params, dParams, gParams, hasFallbackToggled)`.
pub fn call_out_signed_and_bridge(
    params: impl Into<Bytes>,
    deposit: &SingleAsset,
    gas_params: &GasParams,
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    deposit.validate()?;
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::callOutSignedAndBridgeCall {
        _params: params.into(),
        _dParams: DepositInput::from(deposit),
        _gParams: gas_params.clone(),
        _hasFallbackToggled: has_fallback_toggled,
    }
    .abi_encode()
    .into())
}

/// `callOutSignedAndBridgeMultiple(params, dParams, gParams, hasFallbackToggled)`.
pub fn call_out_signed_and_bridge_multiple(
    params: impl Into<Bytes>,
    deposit: &MultipleAssets,
    gas_params: &GasParams,
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    deposit.validate()?;
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::callOutSignedAndBridgeMultipleCall {
        _params: params.into(),
        _dParams: DepositMultipleInput::from(deposit),
        _gParams: gas_params.clone(),
        _hasFallbackToggled: has_fallback_toggled,
    }
    .abi_encode()
    .into())
}

/// `retryDeposit(depositNonce, params, gParams)`. Legal once the deposit failed.
pub fn retry_deposit(
    deposit_nonce: Nonce,
    params: impl Into<Bytes>,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::retryDepositCall {
        _depositNonce: deposit_nonce,
        _params: params.into(),
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `retryDepositSigned(depositNonce, params, gParams, hasFallbackToggled)`.
pub fn retry_deposit_signed(
    deposit_nonce: Nonce,
    params: impl Into<Bytes>,
    gas_params: &GasParams,
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::retryDepositSignedCall {
        _depositNonce: deposit_nonce,
        _params: params.into(),
        _gParams: gas_params.clone(),
        _hasFallbackToggled: has_fallback_toggled,
    }
    .abi_encode()
    .into())
}

/// `retrieveDeposit(depositNonce, gParams)`, asking the root chain to give up on a failed
/// deposit so it becomes redeemable.
pub fn retrieve_deposit(
    deposit_nonce: Nonce,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    gas_params.validate()?;
    Ok(IBranchBridgeAgent::retrieveDepositCall {
        _depositNonce: deposit_nonce,
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `redeemDeposit(depositNonce, recipient)`, releasing every asset of a redeemable deposit.
pub fn redeem_deposit(deposit_nonce: Nonce, recipient: Address) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(recipient, "recipient")?;
    Ok(IBranchBridgeAgent::redeemDeposit_0Call {
        _depositNonce: deposit_nonce,
        _recipient: recipient,
    }
    .abi_encode()
    .into())
}

/// `redeemDeposit(depositNonce, recipient, localTokenAddress)`, releasing a single asset.
pub fn redeem_deposit_token(
    deposit_nonce: Nonce,
    recipient: Address,
    local_token: Address,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(recipient, "recipient")?;
    ensure_non_zero(local_token, "localTokenAddress")?;
    Ok(IBranchBridgeAgent::redeemDeposit_1Call {
        _depositNonce: deposit_nonce,
        _recipient: recipient,
        _localTokenAddress: local_token,
    }
    .abi_encode()
    .into())
}

/// `retrySettlement(settlementNonce, params, gParams[2], hasFallbackToggled)`.
///
/// The first gas settings pay for the hop to the root chain, the second for the settlement
/// hop back to the destination.
pub fn retry_settlement(
    settlement_nonce: Nonce,
    params: impl Into<Bytes>,
    gas_params: [GasParams; 2],
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    gas_params.iter().try_for_each(GasParams::validate)?;
    Ok(IBranchBridgeAgent::retrySettlementCall {
        _settlementNonce: settlement_nonce,
        _params: params.into(),
        _gParams: gas_params,
        _hasFallbackToggled: has_fallback_toggled,
    }
    .abi_encode()
    .into())
}

/// Compresses agent calldata for the decompressing fallback of the agent.
pub fn compressed(calldata: &[u8]) -> Bytes {
    let compressed = cd_compress(calldata);
    trace!(len = calldata.len(), compressed = compressed.len(), "Compressed agent call");
    compressed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec::cd_decompress, error::ArgumentError};
    use alloy::primitives::{U256, address, hex};

    const REFUNDEE: Address = address!("0xdABBbF2CC029CEafdc7597bc232Da6fEc4fa3934");

    fn asset() -> SingleAsset {
        SingleAsset::new(
            address!("0x1111111111111111111111111111111111111111"),
            address!("0x2222222222222222222222222222222222222222"),
            U256::from(100),
            U256::from(100),
        )
    }

    #[test]
    fn selectors() {
        let gas = GasParams::new(200_000, 0);
        assert_eq!(call_out(REFUNDEE, Bytes::new(), &gas).unwrap()[..4], hex!("114357cb"));
        assert_eq!(
            call_out_signed_and_bridge(Bytes::new(), &asset(), &gas, true).unwrap()[..4],
            hex!("44e71ac5")
        );
        assert_eq!(redeem_deposit(1, REFUNDEE).unwrap()[..4], hex!("97a5b4d5"));
        assert_eq!(redeem_deposit_token(1, REFUNDEE, REFUNDEE).unwrap()[..4], hex!("45c853be"));
    }

    #[test]
    fn retrieve_deposit_calldata() {
        let calldata = retrieve_deposit(7, &GasParams::new(200_000, 50_000)).unwrap();
        assert_eq!(
            calldata.as_ref(),
            hex!(
                "142cb015"
                "0000000000000000000000000000000000000000000000000000000000000007"
                "0000000000000000000000000000000000000000000000000000000000030d40"
                "000000000000000000000000000000000000000000000000000000000000c350"
            )
        );
        assert_eq!(compressed(&calldata).as_ref(), hex!("ebd34fea001e07001c030d40001dc350"));
        assert_eq!(cd_decompress(&compressed(&calldata)).unwrap(), calldata);
    }

    #[test]
    fn signed_deposit_fields() {
        let calldata =
            call_out_signed_and_bridge(hex!("0401").to_vec(), &asset(), &GasParams::new(1, 0), true)
                .unwrap();
        let call = IBranchBridgeAgent::callOutSignedAndBridgeCall::abi_decode(&calldata).unwrap();
        assert_eq!(call._params.as_ref(), hex!("0401"));
        assert_eq!(call._dParams, DepositInput::from(&asset()));
        assert!(call._hasFallbackToggled);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let gas = GasParams::new(100, 0);
        let mut same = asset();
        same.token = same.h_token;
        assert!(matches!(
            call_out_and_bridge(REFUNDEE, Bytes::new(), &same, &gas),
            Err(UlyssesError::InvalidArgument(ArgumentError::HTokenIsToken { index: 0 }))
        ));

        let mut short = asset();
        short.amount = U256::from(1);
        assert!(call_out_signed_and_bridge(Bytes::new(), &short, &gas, false).is_err());

        assert!(matches!(
            call_out(Address::ZERO, Bytes::new(), &gas),
            Err(UlyssesError::InvalidArgument(ArgumentError::ZeroAddress { field: "gasRefundee" }))
        ));
        assert!(matches!(
            call_out_signed(Bytes::new(), &GasParams::new(100, 101)),
            Err(UlyssesError::InvalidArgument(ArgumentError::RemoteGasExceedsLimit { .. }))
        ));
        assert!(
            call_out_and_bridge_multiple(REFUNDEE, Bytes::new(), &MultipleAssets::default(), &gas)
                .is_err()
        );
        assert!(
            retry_settlement(1, Bytes::new(), [gas.clone(), GasParams::new(0, 1)], false).is_err()
        );
    }
}
