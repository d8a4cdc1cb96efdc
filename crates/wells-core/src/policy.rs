//! Action selection strategies.
//!
//! An agent asks its strategy for today's well. The default strategy is
//! epsilon-greedy with an initial forced-exploration phase. Contemplation
//! swaps in [`FixedAction`], which replays one well over and over so the
//! agent can rehearse a scenario without spending real days.

use crate::types::{ActionId, Day};
use crate::value::ValueTable;
use rand::{Rng, RngCore};

/// What a strategy may look at when choosing.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    /// Current value estimates.
    pub values: &'a ValueTable,
    /// Days lived so far in this run (before today).
    pub days_lived: Day,
    /// The action chosen yesterday, if any.
    pub last_action: Option<ActionId>,
}

/// Chooses which action an agent takes today.
pub trait SelectionStrategy {
    /// Pick an action. Must return an action covered by `ctx.values`.
    fn select_action(&mut self, ctx: &SelectionContext<'_>, rng: &mut dyn RngCore) -> ActionId;

    /// Short name for logging.
    fn name(&self) -> &str;
}

/// Explore with probability `epsilon` (and always during the first
/// `exploration_length` days), otherwise exploit the best estimate.
///
/// `epsilon` is a probability in `[0, 1]`, not a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct EpsilonGreedy {
    pub epsilon: f64,
    pub exploration_length: Day,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64, exploration_length: Day) -> Self {
        Self {
            epsilon,
            exploration_length,
        }
    }

    /// Never explores after the exploration phase.
    pub fn greedy() -> Self {
        Self::new(0.0, 0)
    }
}

impl SelectionStrategy for EpsilonGreedy {
    fn select_action(&mut self, ctx: &SelectionContext<'_>, rng: &mut dyn RngCore) -> ActionId {
        let r: f64 = rng.gen();
        if r < self.epsilon || ctx.days_lived < self.exploration_length {
            ActionId(rng.gen_range(0..ctx.values.len()))
        } else {
            ctx.values.best_action().0
        }
    }

    fn name(&self) -> &str {
        "epsilon-greedy"
    }
}

/// Always returns the same action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAction(pub ActionId);

impl SelectionStrategy for FixedAction {
    fn select_action(&mut self, _ctx: &SelectionContext<'_>, _rng: &mut dyn RngCore) -> ActionId {
        self.0
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
