//! Agent configuration and experiment description.
//!
//! [`AgentConfig`] carries every tunable of a run. It is plain data:
//! nothing here reads files or parses arguments. [`Experiment`] pairs a
//! configuration with its action model so a whole setup can be exported
//! and reproduced.

use crate::error::{check_unit, Result, WellsError};
use crate::model::ActionModel;
use crate::types::Day;
use serde::{Deserialize, Serialize};

/// Configuration for an agent and the runs it performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Days between checkups (0 disables checkups).
    pub checkup_frequency: u64,
    /// Days of forced random exploration at the start of every run.
    pub exploration_length: Day,
    /// Probability in `[0, 1]` of exploring on any given day.
    pub epsilon: f64,
    /// Learning rate in `[0, 1]`.
    pub alpha: f64,
    /// Discount factor in `[0, 1]`.
    pub gamma: f64,
    /// Health at the start of every run.
    pub max_health: f64,
    /// Carry value estimates from one run to the next.
    pub retain_values: bool,
    /// Checkups between contemplation phases (0 disables contemplation).
    pub thinking_frequency: u64,
    /// Sub-runs per contemplation phase.
    pub thinking_runs: u64,
    /// Day cap for each contemplation sub-run; must be positive when thinking is on.
    pub thinking_step_limit: Day,
    /// Number of real runs the driver performs.
    pub run_count: u64,
    /// Optional day cap for real runs.
    pub step_limit: Option<Day>,
    /// Fixed PRNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// Keep the per-run action history.
    pub track_history: bool,
    /// Keep the per-day value trace.
    pub track_values: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            checkup_frequency: 1,
            exploration_length: 0,
            epsilon: 0.15,
            alpha: 0.2,
            gamma: 0.8,
            max_health: 2000.0,
            retain_values: false,
            thinking_frequency: 0,
            thinking_runs: 10,
            thinking_step_limit: 100,
            run_count: 2,
            step_limit: None,
            seed: None,
            track_history: true,
            track_values: true,
        }
    }
}

impl AgentConfig {
    /// Check every field that has a constrained range.
    pub fn validate(&self) -> Result<()> {
        check_unit("alpha", self.alpha)?;
        check_unit("gamma", self.gamma)?;
        check_unit("epsilon", self.epsilon)?;
        if !(self.max_health.is_finite() && self.max_health > 0.0) {
            return Err(WellsError::invalid_config(
                "max_health",
                self.max_health.to_string(),
                "must be a finite positive number",
            ));
        }
        if self.run_count == 0 {
            return Err(WellsError::invalid_config(
                "run_count",
                "0",
                "at least one run is required",
            ));
        }
        if self.thinking_enabled() && self.thinking_step_limit == 0 {
            return Err(WellsError::invalid_config(
                "thinking_step_limit",
                "0",
                "rehearsal runs replay one well and need a day cap",
            ));
        }
        if self.step_limit == Some(0) {
            return Err(WellsError::invalid_config(
                "step_limit",
                "0",
                "omit the limit instead of setting it to zero",
            ));
        }
        Ok(())
    }

    /// Whether checkups ever happen.
    pub fn checkups_enabled(&self) -> bool {
        self.checkup_frequency > 0
    }

    /// Whether contemplation ever happens.
    pub fn thinking_enabled(&self) -> bool {
        self.thinking_frequency > 0 && self.thinking_runs > 0
    }

    /// Checkup-day predicate for the 1-based day being lived.
    pub fn is_checkup_day(&self, day: Day) -> bool {
        self.checkup_frequency > 0 && day > 0 && day % self.checkup_frequency == 0
    }

    /// Thinking-boundary predicate on the checkup counter.
    pub fn is_thinking_boundary(&self, checkups: u64) -> bool {
        self.thinking_enabled() && checkups > 0 && checkups % self.thinking_frequency == 0
    }
}

/// A complete, reproducible experiment: configuration plus wells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub wells: ActionModel,
}

impl Experiment {
    pub fn new(agent: AgentConfig, wells: ActionModel) -> Self {
        Self { agent, wells }
    }

    pub fn validate(&self) -> Result<()> {
        self.agent.validate()
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let experiment: Experiment = serde_json::from_str(json)?;
        experiment.validate()?;
        Ok(experiment)
    }
}

impl Default for Experiment {
    fn default() -> Self {
        Self::new(AgentConfig::default(), ActionModel::default_wells())
    }
}
