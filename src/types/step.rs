use alloy::primitives::{Address, Bytes, ChainId};
use serde::{Deserialize, Serialize};

/// One hop of a cross-chain execution plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepData {
    /// The bridge agent receiving the hop.
    pub to: Address,
    /// The payload delivered to `to`. Empty for the transaction the caller signs directly.
    pub calldata: Bytes,
    /// Advisory base gas of the hop. Never part of the payload.
    pub base_gas: u64,
    /// Chain on which the hop executes.
    pub chain_id: ChainId,
}

impl StepData {
    /// Returns `true` for the entry placeholder step.
    pub fn is_placeholder(&self) -> bool {
        self.calldata.is_empty()
    }
}
