//! Asset records carried by deposits and settlements.

use crate::{constants::MAX_ASSETS, error::ArgumentError};
use alloy::primitives::{Address, U256};
use itertools::izip;
use strum::Display;

/// Number of assets carried by a deposit, a settlement or an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum AssetArity {
    /// No asset.
    None,
    /// Exactly one asset.
    Single,
    /// One or more assets encoded as parallel arrays.
    Multiple,
}

/// One asset moving between chains.
///
/// `amount` is the virtual balance credited, `deposit` the portion of the underlying token
/// actually escrowed or released.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleAsset {
    /// The hToken representing the asset.
    pub h_token: Address,
    /// The underlying token.
    pub token: Address,
    /// Virtual amount.
    pub amount: U256,
    /// Amount of underlying.
    pub deposit: U256,
}

impl SingleAsset {
    /// Creates a new instance of [`SingleAsset`].
    pub fn new(h_token: Address, token: Address, amount: U256, deposit: U256) -> Self {
        Self { h_token, token, amount, deposit }
    }

    /// Checks the asset invariants.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        validate_asset(0, self.h_token, self.token, self.amount, self.deposit)
    }
}

/// Several assets moving between chains, as parallel arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipleAssets {
    /// The hTokens representing the assets.
    pub h_tokens: Vec<Address>,
    /// The underlying tokens.
    pub tokens: Vec<Address>,
    /// Virtual amounts.
    pub amounts: Vec<U256>,
    /// Amounts of underlying.
    pub deposits: Vec<U256>,
}

impl MultipleAssets {
    /// Number of assets.
    pub fn len(&self) -> usize {
        self.h_tokens.len()
    }

    /// Returns `true` if no asset is carried.
    pub fn is_empty(&self) -> bool {
        self.h_tokens.is_empty()
    }

    /// Appends an asset.
    pub fn push(&mut self, asset: SingleAsset) {
        self.h_tokens.push(asset.h_token);
        self.tokens.push(asset.token);
        self.amounts.push(asset.amount);
        self.deposits.push(asset.deposit);
    }

    /// Iterates over the assets.
    pub fn iter(&self) -> impl Iterator<Item = SingleAsset> + '_ {
        izip!(&self.h_tokens, &self.tokens, &self.amounts, &self.deposits).map(
            |(h_token, token, amount, deposit)| {
                SingleAsset::new(*h_token, *token, *amount, *deposit)
            },
        )
    }

    /// Checks the array lengths and the invariants of every asset.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        let len = self.len();
        if len == 0 {
            return Err(ArgumentError::EmptyAssets);
        }
        if len > MAX_ASSETS {
            return Err(ArgumentError::TooManyAssets(len));
        }
        for (field, got) in [
            ("tokens", self.tokens.len()),
            ("amounts", self.amounts.len()),
            ("deposits", self.deposits.len()),
        ] {
            if got != len {
                return Err(ArgumentError::LengthMismatch { field, expected: len, got });
            }
        }
        self.iter().enumerate().try_for_each(|(index, asset)| {
            validate_asset(index, asset.h_token, asset.token, asset.amount, asset.deposit)
        })
    }
}

impl FromIterator<SingleAsset> for MultipleAssets {
    fn from_iter<I: IntoIterator<Item = SingleAsset>>(iter: I) -> Self {
        let mut assets = Self::default();
        iter.into_iter().for_each(|asset| assets.push(asset));
        assets
    }
}

fn validate_asset(
    index: usize,
    h_token: Address,
    token: Address,
    amount: U256,
    deposit: U256,
) -> Result<(), ArgumentError> {
    if h_token.is_zero() {
        return Err(ArgumentError::ZeroAddress { field: "hToken" });
    }
    if h_token == token {
        return Err(ArgumentError::HTokenIsToken { index });
    }
    if amount < deposit {
        return Err(ArgumentError::AmountBelowDeposit { index, amount, deposit });
    }
    Ok(())
}
