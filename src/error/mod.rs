//! Ulysses error types.
use alloy::primitives::ChainId;
use thiserror::Error;

mod argument;
pub use argument::ArgumentError;

/// The overarching error type returned by the encoders, the context handler and the planner.
#[derive(Debug, Error)]
pub enum UlyssesError {
    /// A structural input was malformed.
    ///
    /// Raised before any encoding work happens, so no partial payload is ever produced.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    /// The chain is not part of any configured deployment.
    #[error("invalid chain id {0}")]
    InvalidChainId(ChainId),
    /// The combination of context parameters has no wire representation.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(&'static str),
    /// An ABI payload could not be decoded.
    #[error(transparent)]
    Abi(#[from] alloy::sol_types::Error),
}

impl UlyssesError {
    /// Returns `true` if this is an [`UlyssesError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` if this is an [`UlyssesError::InvalidChainId`].
    pub fn is_invalid_chain_id(&self) -> bool {
        matches!(self, Self::InvalidChainId(_))
    }
}
