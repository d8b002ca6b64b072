//! Output tokens settled on a destination chain once a root chain call resolves.

use super::{
    AssetArity, GasParams, OutputMultipleParams, OutputParams, SettlementInput,
    SettlementMultipleInput,
};
use crate::error::ArgumentError;
use alloy::primitives::{Address, ChainId, U256};

/// Destination of a single output settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTokenParams {
    /// Owner of the settlement, allowed to retry or redeem it.
    pub settlement_owner: Address,
    /// Receiver of the output on the destination chain.
    pub recipient: Address,
    /// Global output token on the root chain.
    pub output_token: Address,
    /// Amount released.
    pub amount_out: U256,
    /// Amount of underlying released.
    pub deposit_out: U256,
    /// Destination chain.
    pub dst_chain_id: ChainId,
    /// Gas settings of the settlement hop.
    pub gas_params: GasParams,
}

/// Destination of a multiple output settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputMultipleTokenParams {
    /// Owner of the settlement, allowed to retry or redeem it.
    pub settlement_owner: Address,
    /// Receiver of the outputs on the destination chain.
    pub recipient: Address,
    /// Global output tokens on the root chain.
    pub output_tokens: Vec<Address>,
    /// Amounts released.
    pub amounts_out: Vec<U256>,
    /// Amounts of underlying released.
    pub deposits_out: Vec<U256>,
    /// Destination chain.
    pub dst_chain_id: ChainId,
    /// Gas settings of the settlement hop.
    pub gas_params: GasParams,
}

/// Settlement side of a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTokens {
    /// A single output token.
    Single(OutputTokenParams),
    /// Several output tokens.
    Multiple(OutputMultipleTokenParams),
}

impl OutputTokens {
    /// Arity of the output.
    pub fn arity(&self) -> AssetArity {
        match self {
            Self::Single(_) => AssetArity::Single,
            Self::Multiple(_) => AssetArity::Multiple,
        }
    }

    /// Destination chain of the settlement.
    pub fn dst_chain_id(&self) -> ChainId {
        match self {
            Self::Single(params) => params.dst_chain_id,
            Self::Multiple(params) => params.dst_chain_id,
        }
    }

    /// Gas settings of the settlement hop.
    pub fn gas_params(&self) -> &GasParams {
        match self {
            Self::Single(params) => &params.gas_params,
            Self::Multiple(params) => &params.gas_params,
        }
    }

    /// Receiver of the outputs.
    pub fn recipient(&self) -> Address {
        match self {
            Self::Single(params) => params.recipient,
            Self::Multiple(params) => params.recipient,
        }
    }

    /// Owner of the settlement.
    pub fn settlement_owner(&self) -> Address {
        match self {
            Self::Single(params) => params.settlement_owner,
            Self::Multiple(params) => params.settlement_owner,
        }
    }

    /// Checks addresses, amounts and gas settings.
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if self.settlement_owner().is_zero() {
            return Err(ArgumentError::ZeroAddress { field: "settlementOwner" });
        }
        if self.recipient().is_zero() {
            return Err(ArgumentError::ZeroAddress { field: "recipient" });
        }
        match self {
            Self::Single(params) => SettlementInput::from(params).validate()?,
            Self::Multiple(params) => SettlementMultipleInput::from(params).validate()?,
        }
        self.gas_params().validate()
    }
}

impl From<OutputTokenParams> for OutputTokens {
    fn from(params: OutputTokenParams) -> Self {
        Self::Single(params)
    }
}

impl From<OutputMultipleTokenParams> for OutputTokens {
    fn from(params: OutputMultipleTokenParams) -> Self {
        Self::Multiple(params)
    }
}

impl From<&OutputTokenParams> for OutputParams {
    fn from(params: &OutputTokenParams) -> Self {
        Self {
            settlementOwner: params.settlement_owner,
            recipient: params.recipient,
            outputToken: params.output_token,
            amountOut: params.amount_out,
            depositOut: params.deposit_out,
        }
    }
}

impl From<&OutputMultipleTokenParams> for OutputMultipleParams {
    fn from(params: &OutputMultipleTokenParams) -> Self {
        Self {
            settlementOwner: params.settlement_owner,
            recipient: params.recipient,
            outputTokens: params.output_tokens.clone(),
            amountsOut: params.amounts_out.clone(),
            depositsOut: params.deposits_out.clone(),
        }
    }
}

impl From<&OutputTokenParams> for SettlementInput {
    fn from(params: &OutputTokenParams) -> Self {
        Self {
            globalAddress: params.output_token,
            amount: params.amount_out,
            deposit: params.deposit_out,
        }
    }
}

impl From<&OutputMultipleTokenParams> for SettlementMultipleInput {
    fn from(params: &OutputMultipleTokenParams) -> Self {
        Self {
            globalAddresses: params.output_tokens.clone(),
            amounts: params.amounts_out.clone(),
            deposits: params.deposits_out.clone(),
        }
    }
}
