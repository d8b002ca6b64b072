//! Primitive encoders shared by the agent call builders and the step planner.

pub mod to_branch;
pub mod to_root;

mod zip;
pub use zip::{cd_compress, cd_decompress};

use crate::types::{MultipleAssets, Nonce, SingleAsset};
use alloy::primitives::{Address, Bytes, U256};

/// Writer for `abi.encodePacked` layouts.
///
/// Scalars are written at their natural width, while array elements are padded to 32 bytes
/// like Solidity does.
#[derive(Debug, Default)]
pub(crate) struct Packed(Vec<u8>);

impl Packed {
    pub(crate) fn new(tag: u8) -> Self {
        Self(vec![tag])
    }

    pub(crate) fn u8(mut self, value: u8) -> Self {
        self.0.push(value);
        self
    }

    pub(crate) fn bool(self, value: bool) -> Self {
        self.u8(value as u8)
    }

    pub(crate) fn nonce(mut self, nonce: Nonce) -> Self {
        self.0.extend_from_slice(&nonce.to_be_bytes());
        self
    }

    pub(crate) fn address(mut self, address: Address) -> Self {
        self.0.extend_from_slice(address.as_slice());
        self
    }

    pub(crate) fn word(mut self, value: U256) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes::<32>());
        self
    }

    pub(crate) fn address_array(mut self, addresses: &[Address]) -> Self {
        for address in addresses {
            self.0.extend_from_slice(address.into_word().as_slice());
        }
        self
    }

    pub(crate) fn word_array(self, values: &[U256]) -> Self {
        values.iter().fold(self, |packed, value| packed.word(*value))
    }

    /// `hToken token amount deposit`.
    pub(crate) fn asset(self, asset: &SingleAsset) -> Self {
        self.address(asset.h_token).address(asset.token).word(asset.amount).word(asset.deposit)
    }

    /// `hTokens[] tokens[] amounts[] deposits[]`.
    pub(crate) fn assets(self, assets: &MultipleAssets) -> Self {
        self.address_array(&assets.h_tokens)
            .address_array(&assets.tokens)
            .word_array(&assets.amounts)
            .word_array(&assets.deposits)
    }

    pub(crate) fn bytes(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }

    pub(crate) fn finish(self) -> Bytes {
        self.0.into()
    }
}

/// Asset count of a validated multiple asset record.
pub(crate) fn asset_count(assets: &MultipleAssets) -> u8 {
    // `MultipleAssets::validate` caps the length at `u8::MAX`.
    assets.len() as u8
}
