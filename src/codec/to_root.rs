//! Packed messages a branch bridge agent sends to the root bridge agent.

use super::{Packed, asset_count};
use crate::{
    error::{ArgumentError, UlyssesError},
    types::{
        AssetArity, Deposit, GasParams, MultipleAssets, Nonce, RootInboundTag, SingleAsset,
        with_fallback,
    },
};
use alloy::primitives::{Address, Bytes};

/// `0x01 depositNonce params`.
pub fn call_out(deposit_nonce: Nonce, params: &[u8]) -> Bytes {
    Packed::new(RootInboundTag::CallOut.byte()).nonce(deposit_nonce).bytes(params).finish()
}

/// `0x02 depositNonce hToken token amount deposit params`.
pub fn call_out_and_bridge(
    deposit_nonce: Nonce,
    deposit: &SingleAsset,
    params: &[u8],
) -> Result<Bytes, UlyssesError> {
    deposit.validate()?;
    Ok(Packed::new(RootInboundTag::CallOutAndBridge.byte())
        .nonce(deposit_nonce)
        .asset(deposit)
        .bytes(params)
        .finish())
}

/// `0x03 numOfAssets depositNonce hTokens[] tokens[] amounts[] deposits[] params`.
pub fn call_out_and_bridge_multiple(
    deposit_nonce: Nonce,
    deposit: &MultipleAssets,
    params: &[u8],
) -> Result<Bytes, UlyssesError> {
    deposit.validate()?;
    Ok(Packed::new(RootInboundTag::CallOutAndBridgeMultiple.byte())
        .u8(asset_count(deposit))
        .nonce(deposit_nonce)
        .assets(deposit)
        .bytes(params)
        .finish())
}

/// `0x04 user depositNonce params`.
pub fn call_out_signed(
    user: Address,
    deposit_nonce: Nonce,
    params: &[u8],
) -> Result<Bytes, UlyssesError> {
    ensure_user(user)?;
    Ok(Packed::new(RootInboundTag::CallOutSigned.byte())
        .address(user)
        .nonce(deposit_nonce)
        .bytes(params)
        .finish())
}

/// `0x05 user depositNonce hToken token amount deposit params`, flagged with `0x80` when
/// fallback is toggled.
pub fn call_out_signed_and_bridge(
    user: Address,
    deposit_nonce: Nonce,
    deposit: &SingleAsset,
    params: &[u8],
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_user(user)?;
    deposit.validate()?;
    let tag = with_fallback(RootInboundTag::CallOutSignedAndBridge.byte(), has_fallback_toggled);
    Ok(Packed::new(tag).address(user).nonce(deposit_nonce).asset(deposit).bytes(params).finish())
}

/// `0x06 user numOfAssets depositNonce hTokens[] tokens[] amounts[] deposits[] params`, flagged
/// with `0x80` when fallback is toggled.
pub fn call_out_signed_and_bridge_multiple(
    user: Address,
    deposit_nonce: Nonce,
    deposit: &MultipleAssets,
    params: &[u8],
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_user(user)?;
    deposit.validate()?;
    let tag =
        with_fallback(RootInboundTag::CallOutSignedAndBridgeMultiple.byte(), has_fallback_toggled);
    Ok(Packed::new(tag)
        .address(user)
        .u8(asset_count(deposit))
        .nonce(deposit_nonce)
        .assets(deposit)
        .bytes(params)
        .finish())
}

/// `0x07 user settlementNonce hasFallbackToggled params gasLimit remoteBranchExecutionGas`.
pub fn retry_settlement(
    user: Address,
    settlement_nonce: Nonce,
    params: &[u8],
    gas_params: &GasParams,
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    ensure_user(user)?;
    gas_params.validate()?;
    Ok(Packed::new(RootInboundTag::RetrySettlement.byte())
        .address(user)
        .nonce(settlement_nonce)
        .bool(has_fallback_toggled)
        .bytes(params)
        .word(gas_params.gasLimit)
        .word(gas_params.remoteBranchExecutionGas)
        .finish())
}

/// `0x08 user depositNonce`.
pub fn retrieve_deposit(user: Address, deposit_nonce: Nonce) -> Result<Bytes, UlyssesError> {
    ensure_user(user)?;
    Ok(Packed::new(RootInboundTag::RetrieveDeposit.byte())
        .address(user)
        .nonce(deposit_nonce)
        .finish())
}

/// `0x09 settlementNonce`.
pub fn settlement_fallback(settlement_nonce: Nonce) -> Bytes {
    Packed::new(RootInboundTag::Fallback.byte()).nonce(settlement_nonce).finish()
}

/// Encodes a call with an optional deposit, picking the tag from the deposit arity and from
/// whether the call is attributed to `user`'s Virtual Account.
pub fn deposit_envelope(
    deposit_nonce: Nonce,
    user: Option<Address>,
    deposit: Option<&Deposit>,
    params: &[u8],
    has_fallback_toggled: bool,
) -> Result<Bytes, UlyssesError> {
    match (user, deposit) {
        (None, None) => Ok(call_out(deposit_nonce, params)),
        (None, Some(Deposit::Single(asset))) => call_out_and_bridge(deposit_nonce, asset, params),
        (None, Some(Deposit::Multiple(assets))) => {
            call_out_and_bridge_multiple(deposit_nonce, assets, params)
        }
        (Some(user), None) => call_out_signed(user, deposit_nonce, params),
        (Some(user), Some(Deposit::Single(asset))) => {
            call_out_signed_and_bridge(user, deposit_nonce, asset, params, has_fallback_toggled)
        }
        (Some(user), Some(Deposit::Multiple(assets))) => call_out_signed_and_bridge_multiple(
            user,
            deposit_nonce,
            assets,
            params,
            has_fallback_toggled,
        ),
    }
}

/// Arity and effective fallback of the message [`deposit_envelope`] would produce.
pub fn deposit_envelope_kind(
    signed: bool,
    deposit: Option<&Deposit>,
    has_fallback_toggled: bool,
) -> (AssetArity, bool) {
    let arity = deposit.map_or(AssetArity::None, Deposit::arity);
    let fallback = has_fallback_toggled && RootInboundTag::call(arity, signed).supports_fallback();
    (arity, fallback)
}

fn ensure_user(user: Address) -> Result<(), ArgumentError> {
    if user.is_zero() {
        return Err(ArgumentError::ZeroAddress { field: "user" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{U256, address, hex};

    const USER: Address = address!("0xdABBbF2CC029CEafdc7597bc232Da6fEc4fa3934");
    const H_TOKEN: Address = address!("0x1111111111111111111111111111111111111111");
    const TOKEN: Address = address!("0x2222222222222222222222222222222222222222");

    fn asset() -> SingleAsset {
        SingleAsset::new(H_TOKEN, TOKEN, U256::from(100), U256::from(60))
    }

    #[test]
    fn call_out_layout() {
        assert_eq!(call_out(7, &hex!("beef")).as_ref(), hex!("01" "00000007" "beef"));
        assert_eq!(settlement_fallback(258).as_ref(), hex!("09" "00000102"));
    }

    #[test]
    fn single_deposit_layout() {
        let payload = call_out_and_bridge(1, &asset(), &hex!("aa")).unwrap();
        assert_eq!(payload.len(), 1 + 4 + 20 + 20 + 32 + 32 + 1);
        assert_eq!(payload[0], 0x02);
        assert_eq!(&payload[1..5], &[0, 0, 0, 1]);
        assert_eq!(&payload[5..25], H_TOKEN.as_slice());
        assert_eq!(&payload[25..45], TOKEN.as_slice());
        assert_eq!(&payload[45..77], &U256::from(100).to_be_bytes::<32>());
        assert_eq!(&payload[77..109], &U256::from(60).to_be_bytes::<32>());
        assert_eq!(payload[109], 0xaa);
    }

    #[test]
    fn signed_deposit_fallback_flag() {
        let plain = call_out_signed_and_bridge(USER, 3, &asset(), &[], false).unwrap();
        let flagged = call_out_signed_and_bridge(USER, 3, &asset(), &[], true).unwrap();
        assert_eq!(plain[0], 0x05);
        assert_eq!(flagged[0], 0x85);
        assert_eq!(&plain[1..21], USER.as_slice());
        assert_eq!(plain[1..], flagged[1..]);
    }

    #[test]
    fn multiple_deposit_layout() {
        let assets: MultipleAssets = [asset(), asset()].into_iter().collect();
        let payload = call_out_signed_and_bridge_multiple(USER, 9, &assets, &[], true).unwrap();
        assert_eq!(payload[0], 0x86);
        assert_eq!(&payload[1..21], USER.as_slice());
        assert_eq!(payload[21], 2);
        assert_eq!(&payload[22..26], &[0, 0, 0, 9]);
        // hTokens are padded to a full word inside the array.
        assert_eq!(&payload[26..58], H_TOKEN.into_word().as_slice());
        assert_eq!(payload.len(), 26 + 4 * 2 * 32);
    }

    #[test]
    fn invalid_deposit_produces_nothing() {
        let bad = SingleAsset::new(TOKEN, TOKEN, U256::from(1), U256::ZERO);
        assert!(call_out_and_bridge(1, &bad, &[]).unwrap_err().is_invalid_argument());
        assert!(
            deposit_envelope(1, Some(USER), Some(&Deposit::Single(bad)), &[], false)
                .unwrap_err()
                .is_invalid_argument()
        );
        assert!(call_out_signed(Address::ZERO, 1, &[]).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn retry_settlement_layout() {
        let payload =
            retry_settlement(USER, 4, &hex!("cafe"), &GasParams::new(500, 100), true).unwrap();
        assert_eq!(payload[0], 0x07);
        assert_eq!(&payload[21..25], &[0, 0, 0, 4]);
        assert_eq!(payload[25], 1);
        assert_eq!(&payload[26..28], &hex!("cafe"));
        assert_eq!(&payload[28..60], &U256::from(500).to_be_bytes::<32>());
        assert_eq!(&payload[60..92], &U256::from(100).to_be_bytes::<32>());
        assert_eq!(
            retrieve_deposit(USER, 4).unwrap().as_ref(),
            [&[0x08][..], USER.as_slice(), &[0, 0, 0, 4]].concat()
        );
    }

    #[test]
    fn envelope_kind() {
        let deposit = Deposit::Single(asset());
        assert_eq!(deposit_envelope_kind(false, None, true), (AssetArity::None, false));
        assert_eq!(deposit_envelope_kind(false, Some(&deposit), true), (AssetArity::Single, false));
        assert_eq!(deposit_envelope_kind(true, Some(&deposit), true), (AssetArity::Single, true));
    }
}
