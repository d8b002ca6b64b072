//! Calls to the root bridge agent.
//!
//! Destination chains are addressed by their messaging layer id, see
//! [`Deployments::lz_chain_id`](crate::chains::Deployments::lz_chain_id).

use super::ensure_non_zero;
use crate::{
    error::UlyssesError,
    types::{GasParams, IRootBridgeAgent, Nonce, SettlementInput, SettlementMultipleInput},
};
use alloy::{
    primitives::{Address, Bytes},
    sol_types::SolCall,
};

/// `callOut(gasRefundee, recipient, dstChainId, params, gParams)`.
pub fn call_out(
    gas_refundee: Address,
    recipient: Address,
    dst_lz_chain_id: u16,
    params: impl Into<Bytes>,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(gas_refundee, "gasRefundee")?;
    ensure_non_zero(recipient, "recipient")?;
    gas_params.validate()?;
    Ok(IRootBridgeAgent::callOutCall {
        _gasRefundee: gas_refundee,
        _recipient: recipient,
        _dstChainId: dst_lz_chain_id,
        _params: params.into(),
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `callOutAndBridge(settlementOwnerAndGasRefundee, recipient, dstChainId, params, sParams,
/// gParams, hasFallbackToggled)`.
pub fn call_out_and_bridge(
    settlement_owner: Address,
    recipient: Address,
    dst_lz_chain_id: u16,
    params: impl Into<Bytes>,
    settlement: &SettlementInput,
    gas_params: &GasParams,
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(settlement_owner, "settlementOwner")?;
    ensure_non_zero(recipient, "recipient")?;
    settlement.validate()?;
    gas_params.validate()?;
    Ok(IRootBridgeAgent::callOutAndBridgeCall {
        _settlementOwnerAndGasRefundee: settlement_owner,
        _recipient: recipient,
        _dstChainId: dst_lz_chain_id,
        _params: params.into(),
        _sParams: settlement.clone(),
        _gParams: gas_params.clone(),
        _hasFallbackToggled: has_fallback_toggled,
    }
    .abi_encode()
    .into())
}

/// `callOutAndBridgeMultiple(settlementOwnerAndGasRefundee, recipient, dstChainId, params,
/// sParams, gParams, hasFallbackToggled)`.
pub fn call_out_and_bridge_multiple(
    settlement_owner: Address,
    recipient: Address,
    dst_lz_chain_id: u16,
    params: impl Into<Bytes>,
    settlement: &SettlementMultipleInput,
    gas_params: &GasParams,
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(settlement_owner, "settlementOwner")?;
    ensure_non_zero(recipient, "recipient")?;
    settlement.validate()?;
    gas_params.validate()?;
    Ok(IRootBridgeAgent::callOutAndBridgeMultipleCall {
        _settlementOwnerAndGasRefundee: settlement_owner,
        _recipient: recipient,
        _dstChainId: dst_lz_chain_id,
        _params: params.into(),
        _sParams: settlement.clone(),
        _gParams: gas_params.clone(),
        _hasFallbackToggled: has_fallback_toggled,
    }
    .abi_encode()
    .into())
}

/// `retrySettlement(settlementNonce, recipient, params, gParams, hasFallbackToggled)`.
pub fn retry_settlement(
    settlement_nonce: Nonce,
    recipient: Address,
    params: impl Into<Bytes>,
    gas_params: &GasParams,
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(recipient, "recipient")?;
    gas_params.validate()?;
    Ok(IRootBridgeAgent::retrySettlementCall {
        _settlementNonce: settlement_nonce,
        _recipient: recipient,
        _params: params.into(),
        _gParams: gas_params.clone(),
        _hasFallbackToggled: has_fallback_toggled,
    }
    .abi_encode()
    .into())
}

/// `retrieveSettlement(settlementNonce, gParams)`.
pub fn retrieve_settlement(
    settlement_nonce: Nonce,
    gas_params: &GasParams,
) -> Result<Bytes, UlyssesError> {
    gas_params.validate()?;
    Ok(IRootBridgeAgent::retrieveSettlementCall {
        _settlementNonce: settlement_nonce,
        _gParams: gas_params.clone(),
    }
    .abi_encode()
    .into())
}

/// `redeemSettlement(settlementNonce, recipient)`.
pub fn redeem_settlement(
    settlement_nonce: Nonce,
    recipient: Address,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(recipient, "recipient")?;
    Ok(IRootBridgeAgent::redeemSettlementCall {
        _settlementNonce: settlement_nonce,
        _recipient: recipient,
    }
    .abi_encode()
    .into())
}
