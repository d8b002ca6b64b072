//! Call types folded into batches.

use super::{Call, PayableCall};
use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::{Error, SolValue},
};

/// A rendered action: the contract to call, its calldata and the native value to send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionResult {
    /// The call target.
    pub target: Address,
    /// The calldata bytes.
    pub calldata: Bytes,
    /// Native value to send to the target.
    pub value: U256,
}

impl ActionResult {
    /// Creates a new instance of [`ActionResult`].
    pub fn new(target: Address, calldata: impl Into<Bytes>, value: U256) -> Self {
        Self { target, calldata: calldata.into(), value }
    }

    /// The result of an empty batch: a call to the zero address without data or value.
    pub fn noop() -> Self {
        Self::default()
    }

    /// Returns `true` if this targets the zero address without data or value.
    pub fn is_noop(&self) -> bool {
        self.target.is_zero() && self.calldata.is_empty() && self.value.is_zero()
    }
}

impl From<&ActionResult> for Call {
    fn from(result: &ActionResult) -> Self {
        Self { target: result.target, callData: result.calldata.clone() }
    }
}

impl From<&ActionResult> for PayableCall {
    fn from(result: &ActionResult) -> Self {
        Self { target: result.target, callData: result.calldata.clone(), value: result.value }
    }
}

impl Call {
    /// Helper method to decode an array of `Call[]` into `Vec<Call>`.
    pub fn decode_array(data: &[u8]) -> Result<Vec<Self>, Error> {
        <Vec<Self>>::abi_decode(data)
    }
}

impl PayableCall {
    /// Helper method to decode an array of `PayableCall[]` into `Vec<PayableCall>`.
    pub fn decode_array(data: &[u8]) -> Result<Vec<Self>, Error> {
        <Vec<Self>>::abi_decode(data)
    }
}
