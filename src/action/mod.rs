//! Actions and their sequencing into a single wrapped call.

mod erc20;
pub use erc20::{Erc20Approve, Erc20Transfer};

mod native;
pub use native::{UnwrapNative, WrapNative};

mod withdraw;
pub use withdraw::VirtualAccountWithdraw;

use crate::{context::ContextHandler, error::UlyssesError, types::ActionResult};
use alloy::primitives::{Address, Bytes, U256};
use std::fmt::Debug;
use tracing::debug;

/// A single operation that renders to one call.
pub trait Action: Debug + Send + Sync {
    /// Renders the call.
    fn encode(&self) -> Result<ActionResult, UlyssesError>;
}

/// A call given as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAction(pub ActionResult);

impl RawAction {
    /// Creates a new instance of [`RawAction`].
    pub fn new(target: Address, calldata: impl Into<Bytes>, value: U256) -> Self {
        Self(ActionResult::new(target, calldata, value))
    }
}

impl Action for RawAction {
    fn encode(&self) -> Result<ActionResult, UlyssesError> {
        Ok(self.0.clone())
    }
}

/// Output of [`ActionBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltActions {
    /// Every rendered action, in insertion order.
    pub results: Vec<ActionResult>,
    /// The call wrapping `results`, or [`ActionResult::noop`] if there are none.
    pub encoded: ActionResult,
}

/// Sequences actions and wraps them with a [`ContextHandler`].
///
/// Actions execute in the order they are added. Later actions can rely on the balances left by
/// earlier ones, so wrapping native currency must be added before depositing it.
#[derive(Debug)]
pub struct ActionBuilder {
    handler: ContextHandler,
    actions: Vec<Box<dyn Action>>,
}

impl ActionBuilder {
    /// Creates a new instance of [`ActionBuilder`].
    pub fn new(handler: ContextHandler) -> Self {
        Self { handler, actions: Vec::new() }
    }

    /// Appends an action.
    pub fn add_action(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    /// Appends every action of `actions`.
    pub fn add_actions<A: Action + 'static>(self, actions: impl IntoIterator<Item = A>) -> Self {
        actions.into_iter().fold(self, |builder, action| builder.add_action(action))
    }

    /// Number of actions added so far.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if no action was added.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Renders every action and wraps the results.
    pub fn build(self) -> Result<BuiltActions, UlyssesError> {
        if self.actions.is_empty() {
            debug!("No actions, returning a no-op");
            return Ok(BuiltActions { results: Vec::new(), encoded: ActionResult::noop() });
        }

        let results =
            self.actions.iter().map(|action| action.encode()).collect::<Result<Vec<_>, _>>()?;
        let encoded = self.handler.wrap_calldata(&results)?;
        Ok(BuiltActions { results, encoded })
    }
}
