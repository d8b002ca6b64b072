use alloy::primitives::U256;
use thiserror::Error;

/// Errors raised when validating the structural inputs of an encoder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// An address that must be set is zero.
    #[error("{field} must not be the zero address")]
    ZeroAddress {
        /// The offending field.
        field: &'static str,
    },
    /// The hToken of an asset is the same address as its underlying token.
    #[error("hToken and token are the same address at index {index}")]
    HTokenIsToken {
        /// Position of the asset.
        index: usize,
    },
    /// The virtual amount credited is lower than the amount actually escrowed.
    #[error("amount {amount} is below deposit {deposit} at index {index}")]
    AmountBelowDeposit {
        /// Position of the asset.
        index: usize,
        /// The virtual amount.
        amount: U256,
        /// The escrowed amount.
        deposit: U256,
    },
    /// Parallel arrays of a multiple asset record differ in length.
    #[error("{field} has {got} entries, expected {expected}")]
    LengthMismatch {
        /// The offending field.
        field: &'static str,
        /// Length of the leading array.
        expected: usize,
        /// Length of the offending array.
        got: usize,
    },
    /// A multiple asset record carries no asset.
    #[error("multiple asset record is empty")]
    EmptyAssets,
    /// More assets than the one byte asset count of the wire format can address.
    #[error("too many assets: {0}, at most 255")]
    TooManyAssets(usize),
    /// A batch was requested without any call.
    #[error("call list is empty")]
    EmptyCalls,
    /// The gas earmarked for the remote hop exceeds the total gas limit.
    #[error("remote branch execution gas {remote} exceeds gas limit {limit}")]
    RemoteGasExceedsLimit {
        /// The total gas limit.
        limit: U256,
        /// The remote branch execution gas.
        remote: U256,
    },
    /// The values forwarded by a batch overflow `uint256`.
    #[error("sum of call values overflows")]
    ValueOverflow,
    /// The native value of a batch differs from the sum of its call values.
    #[error("value {value} does not match the forwarded call values {forwarded}")]
    ValueMismatch {
        /// The value the context sends.
        value: U256,
        /// The sum of the call values.
        forwarded: U256,
    },
    /// The operation acts on behalf of a user but none was given.
    #[error("a user account is required")]
    MissingUserAccount,
}
