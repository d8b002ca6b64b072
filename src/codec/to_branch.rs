//! Packed messages the root bridge agent sends to a branch bridge agent.

use super::{Packed, asset_count};
use crate::{
    error::{ArgumentError, UlyssesError},
    types::{
        AssetArity, BranchInboundTag, MultipleAssets, Nonce, Settlement, SingleAsset, with_fallback,
    },
};
use alloy::primitives::{Address, Bytes};

/// `0x01 recipient settlementNonce params`.
pub fn call_out(
    recipient: Address,
    settlement_nonce: Nonce,
    params: &[u8],
) -> Result<Bytes, UlyssesError> {
    ensure_recipient(recipient)?;
    Ok(Packed::new(BranchInboundTag::CallOut.byte())
        .address(recipient)
        .nonce(settlement_nonce)
        .bytes(params)
        .finish())
}

/// `0x02 recipient settlementNonce hToken token amount deposit params`, flagged with `0x80`
/// when fallback is toggled.
pub fn call_out_and_bridge(
    recipient: Address,
    settlement_nonce: Nonce,
    settlement: &SingleAsset,
    params: &[u8],
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_recipient(recipient)?;
    settlement.validate()?;
    let tag = with_fallback(BranchInboundTag::CallOutAndBridge.byte(), has_fallback_toggled);
    Ok(Packed::new(tag)
        .address(recipient)
        .nonce(settlement_nonce)
        .asset(settlement)
        .bytes(params)
        .finish())
}

/// `0x03 numOfAssets recipient settlementNonce hTokens[] tokens[] amounts[] deposits[] params`,
/// flagged with `0x80` when fallback is toggled.
pub fn call_out_and_bridge_multiple(
    recipient: Address,
    settlement_nonce: Nonce,
    settlement: &MultipleAssets,
    params: &[u8],
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_recipient(recipient)?;
    settlement.validate()?;
    let tag =
        with_fallback(BranchInboundTag::CallOutAndBridgeMultiple.byte(), has_fallback_toggled);
    Ok(Packed::new(tag)
        .u8(asset_count(settlement))
        .address(recipient)
        .nonce(settlement_nonce)
        .assets(settlement)
        .bytes(params)
        .finish())
}

/// `0x04 depositNonce`.
pub fn deposit_fallback(deposit_nonce: Nonce) -> Bytes {
    Packed::new(BranchInboundTag::Fallback.byte()).nonce(deposit_nonce).finish()
}

/// Encodes a call with an optional settlement, picking the tag from the settlement arity.
pub fn settlement_envelope(
    recipient: Address,
    settlement_nonce: Nonce,
    settlement: Option<&Settlement>,
    params: &[u8],
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    match settlement {
        None => call_out(recipient, settlement_nonce, params),
        Some(Settlement::Single(asset)) => {
            call_out_and_bridge(recipient, settlement_nonce, asset, params, has_fallback_toggled)
        }
        Some(Settlement::Multiple(assets)) => call_out_and_bridge_multiple(
            recipient,
            settlement_nonce,
            assets,
            params,
            has_fallback_toggled,
        ),
    }
}

/// Arity and effective fallback of the message [`settlement_envelope`] would produce.
pub fn settlement_envelope_kind(
    settlement: Option<&Settlement>,
    has_fallback_toggled: bool,
) -> (AssetArity, bool) {
    let arity = settlement.map_or(AssetArity::None, Settlement::arity);
    let fallback = has_fallback_toggled && BranchInboundTag::call(arity).supports_fallback();
    (arity, fallback)
}

fn ensure_recipient(recipient: Address) -> Result<(), ArgumentError> {
    if recipient.is_zero() {
        return Err(ArgumentError::ZeroAddress { field: "recipient" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{U256, address, hex};

    const RECIPIENT: Address = address!("0x00000000206ad3e31DffF979Ccef06dE72a9E027");

    fn asset() -> SingleAsset {
        SingleAsset::new(
            address!("0x1111111111111111111111111111111111111111"),
            address!("0x2222222222222222222222222222222222222222"),
            U256::from(10),
            U256::from(10),
        )
    }

    #[test]
    fn no_settlement_layout() {
        let payload = call_out(RECIPIENT, 5, &hex!("01")).unwrap();
        assert_eq!(
            payload.as_ref(),
            [&[0x01][..], RECIPIENT.as_slice(), &[0, 0, 0, 5, 1]].concat()
        );
        assert_eq!(deposit_fallback(5).as_ref(), hex!("04" "00000005"));
    }

    #[test]
    fn multiple_settlement_puts_count_first() {
        let assets: MultipleAssets = [asset(), asset(), asset()].into_iter().collect();
        let payload = call_out_and_bridge_multiple(RECIPIENT, 2, &assets, &[], true).unwrap();
        assert_eq!(payload[0], 0x83);
        assert_eq!(payload[1], 3);
        assert_eq!(&payload[2..22], RECIPIENT.as_slice());
        assert_eq!(&payload[22..26], &[0, 0, 0, 2]);
        assert_eq!(payload.len(), 26 + 4 * 3 * 32);
    }

    #[test]
    fn settlement_envelope_dispatch() {
        let single = Settlement::Single(asset());
        let payload = settlement_envelope(RECIPIENT, 1, Some(&single), &[], false).unwrap();
        assert_eq!(payload[0], 0x02);
        assert_eq!(payload.len(), 1 + 20 + 4 + 20 + 20 + 32 + 32);
        assert_eq!(settlement_envelope_kind(Some(&single), true), (AssetArity::Single, true));
        assert_eq!(settlement_envelope_kind(None, true), (AssetArity::None, false));

        assert!(
            settlement_envelope(Address::ZERO, 1, None, &[], false)
                .unwrap_err()
                .is_invalid_argument()
        );
    }
}
