//! Calldata builders, one module per external agent role.
//!
//! Every builder validates its inputs before encoding anything and returns the full calldata
//! of one agent operation.

pub mod branch_bridge_agent;
pub mod branch_router;
pub mod root_bridge_agent;
pub mod root_router;
pub mod virtual_account;

use crate::error::ArgumentError;
use alloy::primitives::Address;

fn ensure_non_zero(address: Address, field: &'static str) -> Result<(), ArgumentError> {
    if address.is_zero() {
        return Err(ArgumentError::ZeroAddress { field });
    }
    Ok(())
}

fn ensure_calls<T>(calls: &[T]) -> Result<(), ArgumentError> {
    if calls.is_empty() {
        return Err(ArgumentError::EmptyCalls);
    }
    Ok(())
}
