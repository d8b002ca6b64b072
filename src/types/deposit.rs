//! Deposits escrowed on a branch chain and credited on the root chain.

use super::{AssetArity, DepositInput, DepositMultipleInput, MultipleAssets, SingleAsset};
use crate::error::ArgumentError;

/// Tokens escrowed on the origin branch chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deposit {
    /// A single asset.
    Single(SingleAsset),
    /// Several assets.
    Multiple(MultipleAssets),
}

impl Deposit {
    /// Arity of the deposit.
    pub fn arity(&self) -> AssetArity {
        match self {
            Self::Single(_) => AssetArity::Single,
            Self::Multiple(_) => AssetArity::Multiple,
        }
    }

    /// Checks the invariants of every deposited asset.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        match self {
            Self::Single(asset) => asset.validate(),
            Self::Multiple(assets) => assets.validate(),
        }
    }
}

impl From<SingleAsset> for Deposit {
    fn from(asset: SingleAsset) -> Self {
        Self::Single(asset)
    }
}

impl From<MultipleAssets> for Deposit {
    fn from(assets: MultipleAssets) -> Self {
        Self::Multiple(assets)
    }
}

impl From<&SingleAsset> for DepositInput {
    fn from(asset: &SingleAsset) -> Self {
        Self {
            hToken: asset.h_token,
            token: asset.token,
            amount: asset.amount,
            deposit: asset.deposit,
        }
    }
}

impl From<&MultipleAssets> for DepositMultipleInput {
    fn from(assets: &MultipleAssets) -> Self {
        Self {
            hTokens: assets.h_tokens.clone(),
            tokens: assets.tokens.clone(),
            amounts: assets.amounts.clone(),
            deposits: assets.deposits.clone(),
        }
    }
}
