//! Payloads decoded by the multicall root router, and calls to the router itself.
//!
//! A payload is a [`RouterTag`] byte followed by the ABI encoding of its body:
//!
//! | tag           | body                                                   |
//! |---------------|--------------------------------------------------------|
//! | `0x01`/`0x04` | `Call[]`                                               |
//! | `0x02`/`0x05` | `(Call[], OutputParams, uint16, GasParams)`            |
//! | `0x03`/`0x06` | `(Call[], OutputMultipleParams, uint16, GasParams)`    |
//!
//! Signed tags are executed by the sender's Virtual Account instead of the router.

use super::{ensure_calls, ensure_non_zero};
use crate::{
    error::{ArgumentError, UlyssesError},
    types::{
        AssetArity, Call, GasParams, IMulticallRootRouter, Nonce, OutputMultipleParams,
        OutputParams, RouterTag, SettlementInput, SettlementMultipleInput,
    },
};
use alloy::{
    primitives::{Address, Bytes},
    sol_types::{SolCall, SolValue},
};

/// A decoded router payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterPayload {
    /// Calls only.
    NoOutput {
        /// Whether the Virtual Account executes the calls.
        signed: bool,
        /// The calls.
        calls: Vec<Call>,
    },
    /// Calls followed by a single output settlement.
    SingleOutput {
        /// Whether the Virtual Account executes the calls.
        signed: bool,
        /// The calls.
        calls: Vec<Call>,
        /// The output.
        output: OutputParams,
        /// Messaging layer id of the destination.
        dst_chain_id: u16,
        /// Gas settings of the settlement hop.
        gas_params: GasParams,
    },
    /// Calls followed by a multiple output settlement.
    MultipleOutput {
        /// Whether the Virtual Account executes the calls.
        signed: bool,
        /// The calls.
        calls: Vec<Call>,
        /// The outputs.
        output: OutputMultipleParams,
        /// Messaging layer id of the destination.
        dst_chain_id: u16,
        /// Gas settings of the settlement hop.
        gas_params: GasParams,
    },
}

impl RouterPayload {
    /// The tag this payload is encoded with.
    pub fn tag(&self) -> RouterTag {
        match self {
            Self::NoOutput { signed, .. } => RouterTag::new(AssetArity::None, *signed),
            Self::SingleOutput { signed, .. } => RouterTag::new(AssetArity::Single, *signed),
            Self::MultipleOutput { signed, .. } => RouterTag::new(AssetArity::Multiple, *signed),
        }
    }

    /// The calls of the payload.
    pub fn calls(&self) -> &[Call] {
        match self {
            Self::NoOutput { calls, .. }
            | Self::SingleOutput { calls, .. }
            | Self::MultipleOutput { calls, .. } => calls,
        }
    }
}

/// `0x01 abi.encode(calls)`, or `0x04` when `signed`.
pub fn no_output(calls: &[Call], signed: bool) -> Result<Bytes, UlyssesError> {
    ensure_calls(calls)?;
    Ok(tagged(RouterTag::new(AssetArity::None, signed), (calls.to_vec(),).abi_encode_params()))
}

/// `0x02 abi.encode(calls, output, dstChainId, gParams)`, or `0x05` when `signed`.
pub fn single_output(
    calls: &[Call],
    output: &OutputParams,
    dst_lz_chain_id: u16,
    gas_params: &GasParams,
    signed: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_calls(calls)?;
    ensure_output(output.settlementOwner, output.recipient)?;
    SettlementInput {
        globalAddress: output.outputToken,
        amount: output.amountOut,
        deposit: output.depositOut,
    }
    .validate()?;
    gas_params.validate()?;
    let body = (calls.to_vec(), output.clone(), dst_lz_chain_id, gas_params.clone())
        .abi_encode_params();
    Ok(tagged(RouterTag::new(AssetArity::Single, signed), body))
}

/// `0x03 abi.encode(calls, output, dstChainId, gParams)`, or `0x06` when `signed`.
pub fn multiple_output(
    calls: &[Call],
    output: &OutputMultipleParams,
    dst_lz_chain_id: u16,
    gas_params: &GasParams,
    signed: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_calls(calls)?;
    ensure_output(output.settlementOwner, output.recipient)?;
    SettlementMultipleInput {
        globalAddresses: output.outputTokens.clone(),
        amounts: output.amountsOut.clone(),
        deposits: output.depositsOut.clone(),
    }
    .validate()?;
    gas_params.validate()?;
    let body = (calls.to_vec(), output.clone(), dst_lz_chain_id, gas_params.clone())
        .abi_encode_params();
    Ok(tagged(RouterTag::new(AssetArity::Multiple, signed), body))
}

/// Decodes a router payload.
pub fn decode(payload: &[u8]) -> Result<RouterPayload, UlyssesError> {
    let (&tag, body) =
        payload.split_first().ok_or(UlyssesError::UnsupportedShape("empty router payload"))?;
    let signed = tag > RouterTag::MultipleOutput.byte();
    match tag {
        0x01 | 0x04 => {
            let (calls,) = <(Vec<Call>,)>::abi_decode_params(body)?;
            Ok(RouterPayload::NoOutput { signed, calls })
        }
        0x02 | 0x05 => {
            let (calls, output, dst_chain_id, gas_params) =
                <(Vec<Call>, OutputParams, u16, GasParams)>::abi_decode_params(body)?;
            Ok(RouterPayload::SingleOutput { signed, calls, output, dst_chain_id, gas_params })
        }
        0x03 | 0x06 => {
            let (calls, output, dst_chain_id, gas_params) =
                <(Vec<Call>, OutputMultipleParams, u16, GasParams)>::abi_decode_params(body)?;
            Ok(RouterPayload::MultipleOutput { signed, calls, output, dst_chain_id, gas_params })
        }
        _ => Err(UlyssesError::UnsupportedShape("unknown router tag")),
    }
}

/// `retrySettlement(settlementNonce, recipient, params, gParams, hasFallbackToggled)` on the
/// router, used when the settlement owner is the router itself.
pub fn retry_settlement(
    settlement_nonce: Nonce,
    recipient: Address,
    params: impl Into<Bytes>,
    gas_params: &GasParams,
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_non_zero(recipient, "recipient")?;
    gas_params.validate()?;
    Ok(IMulticallRootRouter::retrySettlementCall {
        _settlementNonce: settlement_nonce,
        _recipient: recipient,
        _params: params.into(),
        _gParams: gas_params.clone(),
        _hasFallbackToggled: has_fallback_toggled,
    }
    .abi_encode()
    .into())
}

fn tagged(tag: RouterTag, body: Vec<u8>) -> Bytes {
    let mut payload = Vec::with_capacity(body.len() + 1);
    payload.push(tag.byte());
    payload.extend_from_slice(&body);
    payload.into()
}

fn ensure_output(settlement_owner: Address, recipient: Address) -> Result<(), ArgumentError> {
    ensure_non_zero(settlement_owner, "settlementOwner")?;
    ensure_non_zero(recipient, "recipient")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{U256, address, hex};

    const OWNER: Address = address!("0xC466af7ff16ef0f1A7fa4E23E095E47a4058D791");
    const TOKEN: Address = address!("0x3333333333333333333333333333333333333333");

    fn calls() -> Vec<Call> {
        vec![Call { target: TOKEN, callData: hex!("a9059cbb").to_vec().into() }]
    }

    #[test]
    fn no_output_layout() {
        let payload = no_output(&calls(), false).unwrap();
        // Matches `abi.encodePacked(bytes1(0x01), abi.encode(calls))`.
        let mut expected = vec![0x01];
        expected.extend(calls().abi_encode());
        assert_eq!(payload.as_ref(), expected.as_slice());
        assert_eq!(
            payload[1..33],
            hex!("0000000000000000000000000000000000000000000000000000000000000020")
        );

        let signed = no_output(&calls(), true).unwrap();
        assert_eq!(signed[0], 0x04);
        assert_eq!(signed[1..], payload[1..]);
    }

    #[test]
    fn output_payloads() {
        let output = OutputParams {
            settlementOwner: OWNER,
            recipient: OWNER,
            outputToken: TOKEN,
            amountOut: U256::from(10),
            depositOut: U256::from(10),
        };
        let gas = GasParams::new(200_000, 0);
        let payload = single_output(&calls(), &output, 110, &gas, true).unwrap();
        assert_eq!(payload[0], 0x05);
        assert_eq!(
            decode(&payload).unwrap(),
            RouterPayload::SingleOutput {
                signed: true,
                calls: calls(),
                output: output.clone(),
                dst_chain_id: 110,
                gas_params: gas.clone(),
            }
        );

        let multiple = OutputMultipleParams {
            settlementOwner: OWNER,
            recipient: OWNER,
            outputTokens: vec![TOKEN, OWNER],
            amountsOut: vec![U256::from(1), U256::from(2)],
            depositsOut: vec![U256::ZERO, U256::ZERO],
        };
        let payload = multiple_output(&calls(), &multiple, 184, &gas, false).unwrap();
        let decoded = decode(&payload).unwrap();
        assert_eq!(decoded.tag(), RouterTag::MultipleOutput);
        assert_eq!(decoded.calls(), calls().as_slice());
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(matches!(
            no_output(&[], false),
            Err(UlyssesError::InvalidArgument(ArgumentError::EmptyCalls))
        ));
        let output =
            OutputParams { settlementOwner: OWNER, outputToken: TOKEN, ..Default::default() };
        assert!(matches!(
            single_output(&calls(), &output, 110, &GasParams::ZERO, false),
            Err(UlyssesError::InvalidArgument(ArgumentError::ZeroAddress { field: "recipient" }))
        ));
        assert!(matches!(decode(&[0x07]), Err(UlyssesError::UnsupportedShape(_))));
        assert!(matches!(decode(&[]), Err(UlyssesError::UnsupportedShape(_))));
        assert!(matches!(decode(&[0x01, 0x00]), Err(UlyssesError::Abi(_))));
    }
}
