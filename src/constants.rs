//! Ulysses constants.

use alloy::primitives::ChainId;
use alloy_chains::NamedChain;

/// Bit set on a payload tag to select the variant that notifies the origin chain when the
/// execution fails, so escrowed assets can be released.
pub const FALLBACK_FLAG: u8 = 0x80;

/// Maximum number of assets in a multiple asset payload. The count is encoded as a `uint8`.
pub const MAX_ASSETS: usize = u8::MAX as usize;

/// Root chain of the production deployment.
pub const MAINNET_ROOT_CHAIN_ID: ChainId = NamedChain::Arbitrum as ChainId;

/// Root chain of the test deployment.
pub const TESTNET_ROOT_CHAIN_ID: ChainId = NamedChain::ArbitrumSepolia as ChainId;

/// Base gas of a hop that moves no asset.
pub const BASE_GAS_NO_ASSET: u64 = 100_000;

/// Base gas of a hop that moves a single asset.
pub const BASE_GAS_SINGLE_ASSET: u64 = 150_000;

/// Base gas of a hop that moves several assets.
pub const BASE_GAS_MULTIPLE_ASSET: u64 = 200_000;

/// Extra base gas of a hop with fallback toggled, covering the notification to the origin chain.
pub const BASE_GAS_FALLBACK: u64 = 140_000;
