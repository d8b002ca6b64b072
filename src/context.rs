//! Wrapping of rendered actions into the single call a user submits.

use crate::{
    account::derive_virtual_account,
    agents::{branch_bridge_agent, root_bridge_agent, root_router, virtual_account},
    chains::Deployments,
    error::{ArgumentError, UlyssesError},
    types::{
        ActionResult, Call, Deposit, GasParams, OutputMultipleParams, OutputParams, OutputTokens,
        PayableCall, SettlementInput, SettlementMultipleInput,
    },
};
use alloy::primitives::{Address, Bytes, ChainId, U256};
use std::iter;
use strum::Display;
use tracing::{debug, instrument, warn};

/// Where and on whose behalf a batch of actions executes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextParameters {
    /// Chain the user submits the wrapped call on.
    pub chain_id: ChainId,
    /// Execute the actions through the user's Virtual Account.
    pub use_virtual_account: bool,
    /// The user. Owner of the Virtual Account and gas refundee of unsigned calls.
    pub user_account: Option<Address>,
    /// Native value paying for the cross-chain hops.
    pub value: Option<U256>,
    /// Gas settings of the hop to the root chain. Defaults to the chain's configured gas.
    pub gas_params: Option<GasParams>,
    /// Assets deposited on the branch chain along with the actions.
    pub input_tokens: Option<Deposit>,
    /// Assets settled on a destination chain once the actions executed.
    pub output_tokens: Option<OutputTokens>,
    /// Notify the origin chain when the execution fails.
    pub has_fallback_toggled: bool,
}

/// The outer wrapping applied to a batch of actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum WrapStrategy {
    /// `call`/`payableCall` on the user's Virtual Account, no hop.
    VirtualAccountBatch,
    /// Virtual Account `payableCall` followed by a single asset settlement.
    VirtualAccountSingleSettlement,
    /// Virtual Account `payableCall` followed by a multiple asset settlement.
    VirtualAccountMultipleSettlement,
    /// Router payload `0x01`/`0x04` sent through the branch bridge agent.
    BranchNoOutput,
    /// Router payload `0x02`/`0x05` sent through the branch bridge agent.
    BranchSingleOutput,
    /// Router payload `0x03`/`0x06` sent through the branch bridge agent.
    BranchMultipleOutput,
}

impl WrapStrategy {
    /// Returns `true` if the batch executes on the root chain without a hop.
    pub const fn is_on_root(self) -> bool {
        matches!(
            self,
            Self::VirtualAccountBatch
                | Self::VirtualAccountSingleSettlement
                | Self::VirtualAccountMultipleSettlement
        )
    }
}

/// Picks the wrapping of a context.
///
/// A Virtual Account on the root chain executes the batch in place, settling outputs if any are
/// requested. Everything else goes through the chain's branch bridge agent and the multicall
/// root router.
///
/// Fails with [`UlyssesError::UnsupportedShape`] for a Virtual Account on the root chain given
/// input tokens, or gas params without output tokens. Nothing on that path would consume them.
pub fn select_strategy(
    params: &ContextParameters,
    deployments: &Deployments,
) -> Result<WrapStrategy, UlyssesError> {
    let in_place = deployments.is_root_chain(params.chain_id)? && params.use_virtual_account;
    if in_place {
        if params.input_tokens.is_some() {
            return Err(UlyssesError::UnsupportedShape("input tokens on the root chain"));
        }
        if params.gas_params.is_some() && params.output_tokens.is_none() {
            return Err(UlyssesError::UnsupportedShape("gas params without output tokens"));
        }
    }
    let strategy = match (in_place, &params.output_tokens) {
        (true, None) => WrapStrategy::VirtualAccountBatch,
        (true, Some(OutputTokens::Single(_))) => WrapStrategy::VirtualAccountSingleSettlement,
        (true, Some(OutputTokens::Multiple(_))) => WrapStrategy::VirtualAccountMultipleSettlement,
        (false, None) => WrapStrategy::BranchNoOutput,
        (false, Some(OutputTokens::Single(_))) => WrapStrategy::BranchSingleOutput,
        (false, Some(OutputTokens::Multiple(_))) => WrapStrategy::BranchMultipleOutput,
    };
    Ok(strategy)
}

/// Wraps rendered actions for a fixed [`ContextParameters`].
#[derive(Debug, Clone)]
pub struct ContextHandler {
    deployments: Deployments,
    params: ContextParameters,
}

impl ContextHandler {
    /// Creates a new instance of [`ContextHandler`].
    pub fn new(deployments: Deployments, params: ContextParameters) -> Self {
        Self { deployments, params }
    }

    /// The context.
    pub fn params(&self) -> &ContextParameters {
        &self.params
    }

    /// The deployments the context resolves against.
    pub fn deployments(&self) -> &Deployments {
        &self.deployments
    }

    /// The wrapping [`wrap_calldata`](Self::wrap_calldata) applies.
    pub fn strategy(&self) -> Result<WrapStrategy, UlyssesError> {
        select_strategy(&self.params, &self.deployments)
    }

    /// Wraps `results` into the call the user submits on [`ContextParameters::chain_id`].
    ///
    /// `results` execute in order.
    #[instrument(skip_all, fields(chain_id = self.params.chain_id, calls = results.len()))]
    pub fn wrap_calldata(&self, results: &[ActionResult]) -> Result<ActionResult, UlyssesError> {
        if results.is_empty() {
            return Err(ArgumentError::EmptyCalls.into());
        }

        let strategy = self.strategy()?;
        debug!(%strategy, "Wrapping calldata");

        match strategy {
            WrapStrategy::VirtualAccountBatch => {
                virtual_account::batch(self.virtual_account()?, results, self.params.value)
            }
            WrapStrategy::VirtualAccountSingleSettlement
            | WrapStrategy::VirtualAccountMultipleSettlement => self.wrap_settlement(results),
            WrapStrategy::BranchNoOutput
            | WrapStrategy::BranchSingleOutput
            | WrapStrategy::BranchMultipleOutput => self.wrap_branch(results),
        }
    }

    /// The user's Virtual Account on the context's root chain.
    pub fn virtual_account(&self) -> Result<Address, UlyssesError> {
        let root_chain_id = self.deployments.root_chain_id(self.params.chain_id)?;
        derive_virtual_account(&self.deployments, self.user()?, root_chain_id)
    }

    /// Appends a settlement call to `results` and sends the batch to the Virtual Account.
    fn wrap_settlement(&self, results: &[ActionResult]) -> Result<ActionResult, UlyssesError> {
        let outputs = self
            .params
            .output_tokens
            .as_ref()
            .ok_or(UlyssesError::UnsupportedShape("settlement without output tokens"))?;
        outputs.validate()?;

        let root = self.deployments.root(self.params.chain_id)?;
        let dst_lz_chain_id = self.deployments.lz_chain_id(outputs.dst_chain_id())?;
        let calldata = match outputs {
            OutputTokens::Single(output) => root_bridge_agent::call_out_and_bridge(
                output.settlement_owner,
                output.recipient,
                dst_lz_chain_id,
                Bytes::new(),
                &SettlementInput::from(output),
                &output.gas_params,
                self.params.has_fallback_toggled,
            )?,
            OutputTokens::Multiple(output) => root_bridge_agent::call_out_and_bridge_multiple(
                output.settlement_owner,
                output.recipient,
                dst_lz_chain_id,
                Bytes::new(),
                &SettlementMultipleInput::from(output),
                &output.gas_params,
                self.params.has_fallback_toggled,
            )?,
        };
        let settlement = ActionResult::new(
            root.root_bridge_agent,
            calldata,
            self.params.value.unwrap_or_default(),
        );

        let calls = results.iter().chain(iter::once(&settlement)).map(PayableCall::from).collect();
        let value = virtual_account::total_value(results)?
            .checked_add(settlement.value)
            .ok_or(ArgumentError::ValueOverflow)?;
        Ok(ActionResult::new(self.virtual_account()?, virtual_account::payable_call(calls)?, value))
    }

    /// Encodes `results` as a router payload and sends it through the branch bridge agent.
    fn wrap_branch(&self, results: &[ActionResult]) -> Result<ActionResult, UlyssesError> {
        let signed = self.params.use_virtual_account;
        if results.iter().any(|result| !result.value.is_zero()) {
            warn!("Dropping call values, router calls carry no native value");
        }
        let calls: Vec<Call> = results.iter().map(Call::from).collect();

        let payload = match &self.params.output_tokens {
            None => root_router::no_output(&calls, signed)?,
            Some(outputs) => {
                outputs.validate()?;
                let dst_lz_chain_id = self.deployments.lz_chain_id(outputs.dst_chain_id())?;
                match outputs {
                    OutputTokens::Single(output) => root_router::single_output(
                        &calls,
                        &OutputParams::from(output),
                        dst_lz_chain_id,
                        &output.gas_params,
                        signed,
                    )?,
                    OutputTokens::Multiple(output) => root_router::multiple_output(
                        &calls,
                        &OutputMultipleParams::from(output),
                        dst_lz_chain_id,
                        &output.gas_params,
                        signed,
                    )?,
                }
            }
        };

        let gas_params = match &self.params.gas_params {
            Some(gas_params) => gas_params.clone(),
            None => self.deployments.default_gas_params(self.params.chain_id)?,
        };
        let fallback = self.params.has_fallback_toggled;
        let calldata = match (signed, &self.params.input_tokens) {
            (false, None) => branch_bridge_agent::call_out(self.user()?, payload, &gas_params)?,
            (false, Some(Deposit::Single(asset))) => {
                branch_bridge_agent::call_out_and_bridge(self.user()?, payload, asset, &gas_params)?
            }
            (false, Some(Deposit::Multiple(assets))) => {
                branch_bridge_agent::call_out_and_bridge_multiple(
                    self.user()?,
                    payload,
                    assets,
                    &gas_params,
                )?
            }
            (true, None) => branch_bridge_agent::call_out_signed(payload, &gas_params)?,
            (true, Some(Deposit::Single(asset))) => branch_bridge_agent::call_out_signed_and_bridge(
                payload,
                asset,
                &gas_params,
                fallback,
            )?,
            (true, Some(Deposit::Multiple(assets))) => {
                branch_bridge_agent::call_out_signed_and_bridge_multiple(
                    payload,
                    assets,
                    &gas_params,
                    fallback,
                )?
            }
        };

        Ok(ActionResult::new(
            self.deployments.branch_bridge_agent(self.params.chain_id)?,
            branch_bridge_agent::compressed(&calldata),
            self.params.value.unwrap_or_default(),
        ))
    }

    fn user(&self) -> Result<Address, ArgumentError> {
        self.params.user_account.ok_or(ArgumentError::MissingUserAccount)
    }
}
