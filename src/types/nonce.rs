//! Lifecycle of the nonces addressing deposits and settlements.
//!
//! Nonces are allocated and tracked by the agents. These types only describe which recovery
//! encoder is legal from which state, so callers can pick the next call to make.

use super::{IBranchBridgeAgent, IRootBridgeAgent};
use alloy::sol_types::SolCall;
use strum::Display;

/// A deposit or settlement nonce.
pub type Nonce = u32;

/// Direction a nonce belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NonceKind {
    /// Assigned by a branch bridge agent to a deposit.
    Deposit,
    /// Assigned by the root bridge agent to a settlement.
    Settlement,
}

/// State of a deposit or settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NonceState {
    /// Sent, not yet executed.
    Pending,
    /// Executed on the remote chain.
    Executed,
    /// Execution failed on the remote chain.
    Failed,
    /// Assets can be redeemed on the origin chain.
    Redeemable,
    /// Assets were redeemed.
    Redeemed,
}

/// A transition between two [`NonceState`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum NonceTransition {
    /// Remote execution succeeded.
    Execute,
    /// Remote execution failed.
    Fail,
    /// Resend the failed payload.
    Retry,
    /// Ask the remote chain to release the assets back to the origin chain.
    Retrieve,
    /// Claim the released assets.
    Redeem,
}

impl NonceState {
    /// Applies `transition`, returning `None` if it is not legal from this state.
    pub const fn next(self, transition: NonceTransition) -> Option<Self> {
        match (self, transition) {
            (Self::Pending, NonceTransition::Execute) => Some(Self::Executed),
            (Self::Pending, NonceTransition::Fail) => Some(Self::Failed),
            (Self::Failed, NonceTransition::Retry) => Some(Self::Pending),
            (Self::Failed, NonceTransition::Retrieve) => Some(Self::Redeemable),
            (Self::Redeemable, NonceTransition::Redeem) => Some(Self::Redeemed),
            _ => None,
        }
    }

    /// Returns `true` if no transition leaves this state.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Executed | Self::Redeemed)
    }
}

impl NonceTransition {
    /// Selector of the agent call requesting this transition.
    ///
    /// Returns `None` for transitions driven by the agents themselves.
    pub const fn selector(self, kind: NonceKind) -> Option<[u8; 4]> {
        match (kind, self) {
            (_, Self::Execute | Self::Fail) => None,
            (NonceKind::Deposit, Self::Retry) => {
                Some(IBranchBridgeAgent::retryDepositCall::SELECTOR)
            }
            (NonceKind::Deposit, Self::Retrieve) => {
                Some(IBranchBridgeAgent::retrieveDepositCall::SELECTOR)
            }
            (NonceKind::Deposit, Self::Redeem) => {
                Some(IBranchBridgeAgent::redeemDeposit_0Call::SELECTOR)
            }
            (NonceKind::Settlement, Self::Retry) => {
                Some(IRootBridgeAgent::retrySettlementCall::SELECTOR)
            }
            (NonceKind::Settlement, Self::Retrieve) => {
                Some(IRootBridgeAgent::retrieveSettlementCall::SELECTOR)
            }
            (NonceKind::Settlement, Self::Redeem) => {
                Some(IRootBridgeAgent::redeemSettlementCall::SELECTOR)
            }
        }
    }
}
