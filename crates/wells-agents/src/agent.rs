//! Agent - a forager that learns which well to trust.
//!
//! Each call to [`Agent::run`] is one life:
//!
//! 1. **Initializing** - fresh [`AgentState`]; values reset unless retained
//! 2. **Living** - pick a well, drink, learn from the score (not on the day
//!    after a checkup)
//! 3. **CheckingUp** - every `checkup_frequency` days, correct the estimate of
//!    today's well with the true health change since the last checkup
//! 4. **Contemplating** - every `thinking_frequency` checkups, rehearse today's
//!    well in a nested agent and adopt what it learned
//! 5. **Dead** - health ≤ 0 or the day cap is hit; the last well takes
//!    [`TERMINAL_PENALTY`] without bootstrap
//! 6. **RunComplete** - a [`RunResult`] goes back to the caller
//!
//! Value estimates live on the agent, not on the run, so with
//! `retain_values` a later life starts from what earlier lives learned.

use crate::contemplation::ContemplationPlan;
use crate::state::{AgentState, CheckupRecord, DeathCause, LifeStage};
use crate::trace::ValueTrace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, trace};
use wells_core::config::AgentConfig;
use wells_core::error::{Result, WellsError};
use wells_core::model::ActionModel;
use wells_core::policy::{EpsilonGreedy, SelectionContext, SelectionStrategy};
use wells_core::types::{ActionId, Day};
use wells_core::value::ValueTable;

/// Reward applied to the last action when a run ends.
pub const TERMINAL_PENALTY: f64 = -100.0;

/// Terminal record of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    /// 1-based run number for this agent.
    pub run_index: u64,
    pub days_lived: Day,
    pub cause: DeathCause,
    pub final_health: f64,
    /// Every checkup of the run, in order.
    pub checkups: Vec<CheckupRecord>,
    pub contemplations: u64,
    /// Actions chosen, one per day, if history tracking is on.
    pub history: Option<Vec<ActionId>>,
    /// Values after each day, if value tracking is on.
    pub trace: Option<ValueTrace>,
    /// Values after the terminal update.
    pub final_values: Vec<f64>,
}

impl RunResult {
    /// Well names of the history, in order.
    pub fn history_names<'m>(&self, model: &'m ActionModel) -> Option<Result<Vec<&'m str>>> {
        self.history
            .as_ref()
            .map(|h| h.iter().map(|&a| model.name(a)).collect())
    }

    /// How many times each action was chosen.
    pub fn choice_counts(&self, action_count: usize) -> Option<Vec<u64>> {
        self.history.as_ref().map(|h| {
            let mut counts = vec![0u64; action_count];
            for action in h {
                if let Some(c) = counts.get_mut(action.index()) {
                    *c += 1;
                }
            }
            counts
        })
    }
}

/// The learning forager.
pub struct Agent {
    config: AgentConfig,
    model: ActionModel,
    values: ValueTable,
    /// False until the table has been initialised by a run or seeded.
    values_ready: bool,
    strategy: Box<dyn SelectionStrategy>,
    rng: StdRng,
    runs_completed: u64,
    contemplation: Option<ContemplationPlan>,
    contemplating: bool,
}

impl Agent {
    /// Create an epsilon-greedy agent from a validated configuration.
    pub fn new(config: AgentConfig, model: ActionModel) -> Result<Self> {
        config.validate()?;
        let values = ValueTable::for_model(&model, config.alpha, config.gamma)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let strategy = EpsilonGreedy::new(config.epsilon, config.exploration_length);
        let contemplation = config
            .thinking_enabled()
            .then(|| ContemplationPlan::from_config(&config));

        Ok(Self {
            config,
            model,
            values,
            values_ready: false,
            strategy: Box::new(strategy),
            rng,
            runs_completed: 0,
            contemplation,
            contemplating: false,
        })
    }

    /// Build the nested rehearsal agent. It has no plan of its own, so it
    /// can never contemplate.
    pub(crate) fn contemplative(
        config: AgentConfig,
        model: ActionModel,
        values: ValueTable,
        strategy: Box<dyn SelectionStrategy>,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        if values.len() != model.len() {
            return Err(WellsError::invalid_config(
                "values",
                values.len().to_string(),
                format!("table must cover all {} wells", model.len()),
            ));
        }
        Ok(Self {
            config,
            model,
            values,
            values_ready: true,
            strategy,
            rng: StdRng::seed_from_u64(seed),
            runs_completed: 0,
            contemplation: None,
            contemplating: true,
        })
    }

    /// Replace the selection strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn SelectionStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Start from the given estimates instead of zeros.
    ///
    /// Seeded values survive the first run's initialisation; whether they
    /// survive later runs depends on `retain_values`.
    pub fn with_values(mut self, values: ValueTable) -> Result<Self> {
        if values.len() != self.model.len() {
            return Err(WellsError::invalid_config(
                "values",
                values.len().to_string(),
                format!("table must cover all {} wells", self.model.len()),
            ));
        }
        self.values = values;
        self.values_ready = true;
        Ok(self)
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn model(&self) -> &ActionModel {
        &self.model
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Hand the learned estimates over, consuming the agent.
    pub fn into_values(self) -> ValueTable {
        self.values
    }

    pub fn runs_completed(&self) -> u64 {
        self.runs_completed
    }

    /// Whether this is a nested rehearsal agent.
    pub fn is_contemplating(&self) -> bool {
        self.contemplating
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Live one full life and report it.
    pub fn run(&mut self) -> Result<RunResult> {
        let run_index = self.runs_completed + 1;

        // Initializing
        let first_run = self.runs_completed == 0;
        if !self.values_ready || (!first_run && !self.config.retain_values) {
            self.values.reset();
            self.values_ready = true;
        }
        let mut state = AgentState::new(self.config.max_health, self.config.track_history);
        let mut value_trace = self.config.track_values.then(|| ValueTrace::new(&self.model));

        let mut stage = LifeStage::Living;
        let (cause, last_action) = loop {
            stage = match stage {
                LifeStage::Living => self.live_day(&mut state, value_trace.as_mut())?,
                LifeStage::CheckingUp(action) => self.checkup(&mut state, action, run_index)?,
                LifeStage::Contemplating(action) => {
                    self.contemplate(&mut state, action)?;
                    LifeStage::Living
                }
                LifeStage::Dead { cause, last_action } => break (cause, last_action),
            };
        };

        // Dead
        self.values.update_terminal(last_action, TERMINAL_PENALTY)?;
        self.runs_completed = run_index;

        // RunComplete
        let result = RunResult {
            run_index,
            days_lived: state.days_lived,
            cause,
            final_health: state.health,
            checkups: state.checkups,
            contemplations: state.contemplations,
            history: state.history,
            trace: value_trace,
            final_values: self.values.snapshot(),
        };

        if self.contemplating {
            trace!(run = run_index, days = result.days_lived, "rehearsal complete");
        } else {
            info!(
                run = run_index,
                days = result.days_lived,
                cause = ?result.cause,
                checkups = result.checkups.len(),
                contemplations = result.contemplations,
                "run complete"
            );
        }
        Ok(result)
    }

    fn live_day(
        &mut self,
        state: &mut AgentState,
        value_trace: Option<&mut ValueTrace>,
    ) -> Result<LifeStage> {
        let ctx = SelectionContext {
            values: &self.values,
            days_lived: state.days_lived,
            last_action: state.last_action,
        };
        let action = self.strategy.select_action(&ctx, &mut self.rng);
        let well = self.model.well(action)?;
        let (score, health_delta) = (well.score, well.health);

        state.consume(action, health_delta);

        // The day after a checkup learns nothing from the score.
        if !self.config.is_checkup_day(state.days_lived) {
            self.values.update(action, score)?;
        }
        let day = state.days_lived + 1;
        state.days_lived = day;

        if let Some(value_trace) = value_trace {
            value_trace.push(self.values.snapshot());
        }

        if self.config.step_limit.is_some_and(|limit| day >= limit) {
            return Ok(LifeStage::Dead {
                cause: DeathCause::StepLimit,
                last_action: action,
            });
        }
        if state.is_dead() {
            return Ok(LifeStage::Dead {
                cause: DeathCause::Starved,
                last_action: action,
            });
        }
        if self.config.is_checkup_day(day) {
            return Ok(LifeStage::CheckingUp(action));
        }
        Ok(LifeStage::Living)
    }

    fn checkup(
        &mut self,
        state: &mut AgentState,
        action: ActionId,
        run_index: u64,
    ) -> Result<LifeStage> {
        let delta = state.health - state.last_observed_health;
        state.last_observed_health = state.health;

        let reward = self.model.score(action)? + delta;
        let value = self.values.update(action, reward)?;
        state.checkups.push(CheckupRecord {
            day: state.days_lived,
            action,
            delta,
            reward,
            value,
        });

        if !self.contemplating {
            debug!(
                run = run_index,
                day = state.days_lived,
                delta,
                reward,
                well = self.model.name(action)?,
                value,
                "checkup"
            );
        }

        if self.config.is_thinking_boundary(state.checkup_count()) {
            Ok(LifeStage::Contemplating(action))
        } else {
            Ok(LifeStage::Living)
        }
    }

    /// Rehearse `action` in a nested agent and adopt its estimates.
    fn contemplate(&mut self, state: &mut AgentState, action: ActionId) -> Result<()> {
        if self.contemplating {
            return Err(WellsError::NestedContemplation);
        }
        let Some(plan) = self.contemplation.as_ref() else {
            return Ok(());
        };

        let seed: u64 = self.rng.gen();
        let mut nested = plan.build(&self.model, self.values.clone(), action, seed)?;
        for _ in 0..plan.runs() {
            nested.run()?;
        }
        self.values = nested.into_values();
        state.contemplations += 1;

        debug!(
            day = state.days_lived,
            well = self.model.name(action)?,
            rehearsals = plan.runs(),
            values = ?self.values.snapshot(),
            "contemplation"
        );
        Ok(())
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("config", &self.config)
            .field("model", &self.model)
            .field("values", &self.values)
            .field("strategy", &self.strategy.name())
            .field("runs_completed", &self.runs_completed)
            .field("contemplating", &self.contemplating)
            .finish()
    }
}
