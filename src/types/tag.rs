//! Tag bytes prefixed to router payloads and cross-chain envelopes.

use super::AssetArity;
use crate::constants::FALLBACK_FLAG;
use strum::Display;

/// Sets [`FALLBACK_FLAG`] on `tag` if fallback is toggled.
pub const fn with_fallback(tag: u8, toggled: bool) -> u8 {
    if toggled { tag | FALLBACK_FLAG } else { tag }
}

/// Tag of a multicall root router payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum RouterTag {
    /// `Call[]`.
    NoOutput = 0x01,
    /// `(Call[], OutputParams, uint16, GasParams)`.
    SingleOutput = 0x02,
    /// `(Call[], OutputMultipleParams, uint16, GasParams)`.
    MultipleOutput = 0x03,
    /// Signed [`RouterTag::NoOutput`].
    SignedNoOutput = 0x04,
    /// Signed [`RouterTag::SingleOutput`].
    SignedSingleOutput = 0x05,
    /// Signed [`RouterTag::MultipleOutput`].
    SignedMultipleOutput = 0x06,
}

impl RouterTag {
    /// Picks the tag for an output arity, signed payloads being executed by the Virtual Account.
    pub const fn new(output: AssetArity, signed: bool) -> Self {
        match (output, signed) {
            (AssetArity::None, false) => Self::NoOutput,
            (AssetArity::Single, false) => Self::SingleOutput,
            (AssetArity::Multiple, false) => Self::MultipleOutput,
            (AssetArity::None, true) => Self::SignedNoOutput,
            (AssetArity::Single, true) => Self::SignedSingleOutput,
            (AssetArity::Multiple, true) => Self::SignedMultipleOutput,
        }
    }

    /// The tag byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the Virtual Account variants.
    pub const fn is_signed(self) -> bool {
        self.byte() > Self::MultipleOutput.byte()
    }

    /// Output arity selected by this tag.
    pub const fn output(self) -> AssetArity {
        match self {
            Self::NoOutput | Self::SignedNoOutput => AssetArity::None,
            Self::SingleOutput | Self::SignedSingleOutput => AssetArity::Single,
            Self::MultipleOutput | Self::SignedMultipleOutput => AssetArity::Multiple,
        }
    }
}

/// Tag of a packed message sent from a branch chain to the root chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum RootInboundTag {
    /// Call without deposit.
    CallOut = 0x01,
    /// Call with a single asset deposit.
    CallOutAndBridge = 0x02,
    /// Call with a multiple asset deposit.
    CallOutAndBridgeMultiple = 0x03,
    /// Call executed by the user's Virtual Account.
    CallOutSigned = 0x04,
    /// Virtual Account call with a single asset deposit.
    CallOutSignedAndBridge = 0x05,
    /// Virtual Account call with a multiple asset deposit.
    CallOutSignedAndBridgeMultiple = 0x06,
    /// Retry of a failed settlement.
    RetrySettlement = 0x07,
    /// Retrieval of a failed deposit.
    RetrieveDeposit = 0x08,
    /// Notification that a settlement failed on the branch chain.
    Fallback = 0x09,
}

impl RootInboundTag {
    /// Picks the call tag for a deposit arity.
    pub const fn call(deposit: AssetArity, signed: bool) -> Self {
        match (deposit, signed) {
            (AssetArity::None, false) => Self::CallOut,
            (AssetArity::Single, false) => Self::CallOutAndBridge,
            (AssetArity::Multiple, false) => Self::CallOutAndBridgeMultiple,
            (AssetArity::None, true) => Self::CallOutSigned,
            (AssetArity::Single, true) => Self::CallOutSignedAndBridge,
            (AssetArity::Multiple, true) => Self::CallOutSignedAndBridgeMultiple,
        }
    }

    /// The tag byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Whether this tag accepts [`FALLBACK_FLAG`].
    ///
    /// Only signed calls carrying assets can be rolled back on the origin chain.
    pub const fn supports_fallback(self) -> bool {
        matches!(self, Self::CallOutSignedAndBridge | Self::CallOutSignedAndBridgeMultiple)
    }
}

/// Tag of a packed message sent from the root chain to a branch chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[repr(u8)]
pub enum BranchInboundTag {
    /// Call without settlement.
    CallOut = 0x01,
    /// Call with a single asset settlement.
    CallOutAndBridge = 0x02,
    /// Call with a multiple asset settlement.
    CallOutAndBridgeMultiple = 0x03,
    /// Notification that a deposit failed on the root chain.
    Fallback = 0x04,
}

impl BranchInboundTag {
    /// Picks the call tag for a settlement arity.
    pub const fn call(settlement: AssetArity) -> Self {
        match settlement {
            AssetArity::None => Self::CallOut,
            AssetArity::Single => Self::CallOutAndBridge,
            AssetArity::Multiple => Self::CallOutAndBridgeMultiple,
        }
    }

    /// The tag byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Whether this tag accepts [`FALLBACK_FLAG`].
    pub const fn supports_fallback(self) -> bool {
        matches!(self, Self::CallOutAndBridge | Self::CallOutAndBridgeMultiple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_tags() {
        for (arity, unsigned, signed) in [
            (AssetArity::None, 0x01, 0x04),
            (AssetArity::Single, 0x02, 0x05),
            (AssetArity::Multiple, 0x03, 0x06),
        ] {
            assert_eq!(RouterTag::new(arity, false).byte(), unsigned);
            assert_eq!(RouterTag::new(arity, true).byte(), signed);
            assert!(RouterTag::new(arity, true).is_signed());
            assert!(!RouterTag::new(arity, false).is_signed());
            assert_eq!(RouterTag::new(arity, true).output(), arity);
        }
    }

    #[test]
    fn fallback_flag() {
        assert_eq!(with_fallback(RootInboundTag::CallOutSignedAndBridge.byte(), true), 0x85);
        assert_eq!(
            with_fallback(RootInboundTag::CallOutSignedAndBridgeMultiple.byte(), true),
            0x86
        );
        assert_eq!(with_fallback(BranchInboundTag::CallOutAndBridge.byte(), true), 0x82);
        assert_eq!(with_fallback(BranchInboundTag::CallOutAndBridge.byte(), false), 0x02);
        assert!(!RootInboundTag::CallOutSigned.supports_fallback());
        assert!(!BranchInboundTag::CallOut.supports_fallback());
    }
}
