//! Settlements released on a destination branch chain.

use super::{AssetArity, MultipleAssets, SettlementInput, SettlementMultipleInput, SingleAsset};
use crate::{constants::MAX_ASSETS, error::ArgumentError};
use itertools::izip;

/// Tokens released on the destination branch chain, in destination local tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// A single asset.
    Single(SingleAsset),
    /// Several assets.
    Multiple(MultipleAssets),
}

impl Settlement {
    /// Arity of the settlement.
    pub fn arity(&self) -> AssetArity {
        match self {
            Self::Single(_) => AssetArity::Single,
            Self::Multiple(_) => AssetArity::Multiple,
        }
    }

    /// Checks the invariants of every released asset.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        match self {
            Self::Single(asset) => asset.validate(),
            Self::Multiple(assets) => assets.validate(),
        }
    }
}

impl SettlementInput {
    /// Checks the settlement invariants.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        validate_global(0, self)
    }
}

impl SettlementMultipleInput {
    /// Checks the array lengths and the invariants of every settled asset.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        let len = self.globalAddresses.len();
        if len == 0 {
            return Err(ArgumentError::EmptyAssets);
        }
        if len > MAX_ASSETS {
            return Err(ArgumentError::TooManyAssets(len));
        }
        for (field, got) in [("amounts", self.amounts.len()), ("deposits", self.deposits.len())] {
            if got != len {
                return Err(ArgumentError::LengthMismatch { field, expected: len, got });
            }
        }
        izip!(&self.globalAddresses, &self.amounts, &self.deposits).enumerate().try_for_each(
            |(index, (global_address, amount, deposit))| {
                validate_global(
                    index,
                    &SettlementInput {
                        globalAddress: *global_address,
                        amount: *amount,
                        deposit: *deposit,
                    },
                )
            },
        )
    }
}

fn validate_global(index: usize, input: &SettlementInput) -> Result<(), ArgumentError> {
    if input.globalAddress.is_zero() {
        return Err(ArgumentError::ZeroAddress { field: "globalAddress" });
    }
    if input.amount < input.deposit {
        return Err(ArgumentError::AmountBelowDeposit {
            index,
            amount: input.amount,
            deposit: input.deposit,
        });
    }
    Ok(())
}
