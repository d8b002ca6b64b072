//! Planning of the hops a cross-chain execution goes through.
//!
//! A plan starts with a placeholder for the transaction the caller signs on the entry chain,
//! followed by the packed message each later hop delivers:
//!
//! ```text
//! origin branch ──deposit envelope──▶ root ──settlement envelope──▶ destination branch
//! ```
//!
//! The hop to the root chain is skipped when the execution starts on the root chain, the
//! settlement hop when there is no destination or the destination is the root chain itself.

use crate::{
    chains::Deployments,
    codec::{to_branch, to_root},
    error::UlyssesError,
    types::{Deposit, Nonce, Settlement, StepData},
};
use alloy::primitives::{Address, Bytes, ChainId};
use tracing::{debug, instrument, warn};

/// Everything a plan is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRequest {
    /// Chain the caller signs on.
    pub origin_chain_id: ChainId,
    /// Root chain of the deployment.
    pub root_chain_id: ChainId,
    /// Chain the settlement is released on, if any.
    pub dst_chain_id: Option<ChainId>,
    /// Start on the root chain, skipping the deposit hop.
    pub use_root_as_origin: bool,
    /// Execute on the root chain through this user's Virtual Account.
    pub user: Option<Address>,
    /// Notify the previous chain when a hop fails.
    pub has_fallback_toggled: bool,
    /// Branch bridge agent of the origin chain.
    pub origin_bridge_agent: Option<Address>,
    /// Root bridge agent.
    pub root_bridge_agent: Option<Address>,
    /// Branch bridge agent of the destination chain.
    pub dst_bridge_agent: Option<Address>,
    /// Nonce of the deposit hop.
    pub deposit_nonce: Option<Nonce>,
    /// Nonce of the settlement hop.
    pub settlement_nonce: Option<Nonce>,
    /// Assets deposited on the origin chain.
    pub deposit: Option<Deposit>,
    /// Assets released on the destination chain.
    pub settlement: Option<Settlement>,
    /// Receiver of the settlement.
    pub recipient: Option<Address>,
    /// Params executed on the root chain.
    pub root_params: Bytes,
    /// Params executed on the destination chain.
    pub dst_params: Bytes,
}

impl PlanRequest {
    /// Fills the bridge agents left unset from `deployments`.
    pub fn with_default_agents(mut self, deployments: &Deployments) -> Result<Self, UlyssesError> {
        if self.root_bridge_agent.is_none() {
            self.root_bridge_agent = Some(deployments.root(self.root_chain_id)?.root_bridge_agent);
        }
        if self.origin_bridge_agent.is_none() && !self.starts_on_root() {
            self.origin_bridge_agent = Some(deployments.branch_bridge_agent(self.origin_chain_id)?);
        }
        if let Some(dst_chain_id) = self.dst_chain_id
            && self.dst_bridge_agent.is_none()
        {
            self.dst_bridge_agent = Some(deployments.branch_bridge_agent(dst_chain_id)?);
        }
        Ok(self)
    }

    /// Returns `true` if the execution starts on the root chain.
    pub fn starts_on_root(&self) -> bool {
        self.use_root_as_origin || self.origin_chain_id == self.root_chain_id
    }

    /// Returns `true` if the plan has a settlement hop.
    pub fn has_settlement_hop(&self) -> bool {
        self.dst_chain_id.is_some_and(|dst_chain_id| dst_chain_id != self.root_chain_id)
    }

    /// The first field the plan needs that is unset.
    fn missing_field(&self) -> Option<&'static str> {
        let starts_on_root = self.starts_on_root();
        if starts_on_root && self.root_bridge_agent.is_none() {
            return Some("root_bridge_agent");
        }
        if !starts_on_root {
            if self.origin_bridge_agent.is_none() {
                return Some("origin_bridge_agent");
            }
            if self.root_bridge_agent.is_none() {
                return Some("root_bridge_agent");
            }
            if self.deposit_nonce.is_none() {
                return Some("deposit_nonce");
            }
        }
        if self.has_settlement_hop() {
            if self.dst_bridge_agent.is_none() {
                return Some("dst_bridge_agent");
            }
            if self.settlement_nonce.is_none() {
                return Some("settlement_nonce");
            }
            if self.recipient.is_none() {
                return Some("recipient");
            }
        }
        None
    }
}

/// Turns a [`PlanRequest`] into the ordered [`StepData`] a relayer submits.
#[derive(Debug, Clone)]
pub struct MultiHopPlanner {
    deployments: Deployments,
    request: PlanRequest,
}

impl MultiHopPlanner {
    /// Creates a new instance of [`MultiHopPlanner`].
    pub fn new(deployments: Deployments, request: PlanRequest) -> Self {
        Self { deployments, request }
    }

    /// The request being planned.
    pub fn request(&self) -> &PlanRequest {
        &self.request
    }

    /// Plans the hops.
    ///
    /// Returns an empty plan if a field the path needs is unset. Fails if the chains are not
    /// part of the deployment or a payload is malformed.
    #[instrument(skip_all, fields(
        origin = self.request.origin_chain_id,
        root = self.request.root_chain_id,
        dst = ?self.request.dst_chain_id,
    ))]
    pub fn plan(&self) -> Result<Vec<StepData>, UlyssesError> {
        let request = &self.request;
        if let Some(field) = request.missing_field() {
            warn!(field, "Missing plan field, returning an empty plan");
            return Ok(Vec::new());
        }
        if !self.deployments.is_root_chain(request.root_chain_id)? {
            return Err(UlyssesError::InvalidChainId(request.root_chain_id));
        }
        if self.deployments.root_chain_id(request.origin_chain_id)? != request.root_chain_id {
            return Err(UlyssesError::InvalidChainId(request.origin_chain_id));
        }

        let starts_on_root = request.starts_on_root();
        let (entry_chain_id, entry_agent) = if starts_on_root {
            (request.root_chain_id, request.root_bridge_agent)
        } else {
            (request.origin_chain_id, request.origin_bridge_agent)
        };
        let mut steps = vec![StepData {
            to: entry_agent.unwrap_or_default(),
            calldata: Bytes::new(),
            base_gas: 0,
            chain_id: entry_chain_id,
        }];

        if !starts_on_root {
            steps.push(self.deposit_hop()?);
        }
        if request.has_settlement_hop() {
            steps.push(self.settlement_hop()?);
        }

        debug!(steps = steps.len(), "Planned hops");
        Ok(steps)
    }

    fn deposit_hop(&self) -> Result<StepData, UlyssesError> {
        let request = &self.request;
        let calldata = to_root::deposit_envelope(
            request.deposit_nonce.unwrap_or_default(),
            request.user,
            request.deposit.as_ref(),
            &request.root_params,
            request.has_fallback_toggled,
        )?;
        let (arity, fallback) = to_root::deposit_envelope_kind(
            request.user.is_some(),
            request.deposit.as_ref(),
            request.has_fallback_toggled,
        );
        Ok(StepData {
            to: request.root_bridge_agent.unwrap_or_default(),
            calldata,
            base_gas: self.deployments.base_gas(arity, fallback),
            chain_id: request.root_chain_id,
        })
    }

    fn settlement_hop(&self) -> Result<StepData, UlyssesError> {
        let request = &self.request;
        let dst_chain_id = request.dst_chain_id.unwrap_or_default();
        if self.deployments.root_chain_id(dst_chain_id)? != request.root_chain_id {
            return Err(UlyssesError::InvalidChainId(dst_chain_id));
        }
        let calldata = to_branch::settlement_envelope(
            request.recipient.unwrap_or_default(),
            request.settlement_nonce.unwrap_or_default(),
            request.settlement.as_ref(),
            &request.dst_params,
            request.has_fallback_toggled,
        )?;
        let (arity, fallback) = to_branch::settlement_envelope_kind(
            request.settlement.as_ref(),
            request.has_fallback_toggled,
        );
        Ok(StepData {
            to: request.dst_bridge_agent.unwrap_or_default(),
            calldata,
            base_gas: self.deployments.base_gas(arity, fallback),
            chain_id: dst_chain_id,
        })
    }
}
