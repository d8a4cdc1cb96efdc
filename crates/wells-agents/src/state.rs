//! Per-run agent state.
//!
//! Created fresh when a run starts and consumed into a
//! [`RunResult`](crate::agent::RunResult) when it ends.

use serde::Serialize;
use wells_core::types::{ActionId, Day};

/// Stages of a run after initialisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LifeStage {
    /// Choosing and drinking from a well.
    Living,
    /// Correcting the estimate of the given action with the true health change.
    CheckingUp(ActionId),
    /// Rehearsing the given action in a nested agent.
    Contemplating(ActionId),
    /// The run is over; the given action takes the terminal penalty.
    Dead { cause: DeathCause, last_action: ActionId },
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeathCause {
    /// Health reached zero.
    Starved,
    /// The configured day cap was reached.
    StepLimit,
}

/// One doctor's checkup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckupRecord {
    /// Day on which the checkup happened.
    pub day: Day,
    /// Action corrected (the one chosen that day).
    pub action: ActionId,
    /// Health change since the previous checkup (or the start of the run).
    pub delta: f64,
    /// Reward fed to the update: the action's score plus `delta`.
    pub reward: f64,
    /// The action's estimate after correction.
    pub value: f64,
}

/// Mutable state of a single run.
#[derive(Debug, Clone)]
pub struct AgentState {
    pub(crate) health: f64,
    pub(crate) last_observed_health: f64,
    pub(crate) days_lived: Day,
    pub(crate) last_action: Option<ActionId>,
    pub(crate) history: Option<Vec<ActionId>>,
    pub(crate) checkups: Vec<CheckupRecord>,
    pub(crate) contemplations: u64,
}

impl AgentState {
    pub fn new(max_health: f64, track_history: bool) -> Self {
        Self {
            health: max_health,
            last_observed_health: max_health,
            days_lived: 0,
            last_action: None,
            history: track_history.then(Vec::new),
            checkups: Vec::new(),
            contemplations: 0,
        }
    }

    /// Apply today's choice: remember it and change health.
    pub(crate) fn consume(&mut self, action: ActionId, health_delta: f64) {
        if let Some(history) = self.history.as_mut() {
            history.push(action);
        }
        self.last_action = Some(action);
        self.health += health_delta;
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn last_observed_health(&self) -> f64 {
        self.last_observed_health
    }

    pub fn days_lived(&self) -> Day {
        self.days_lived
    }

    pub fn last_action(&self) -> Option<ActionId> {
        self.last_action
    }

    pub fn history(&self) -> Option<&[ActionId]> {
        self.history.as_deref()
    }

    /// Checkups performed so far.
    pub fn checkup_count(&self) -> u64 {
        self.checkups.len() as u64
    }

    pub fn contemplation_count(&self) -> u64 {
        self.contemplations
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}
