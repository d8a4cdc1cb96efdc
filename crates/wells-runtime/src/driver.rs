//! Run driver - performs an experiment's runs.
//!
//! The driver owns one agent for the whole experiment, so learned values
//! carry over between runs whenever the configuration retains them.
//! Each finished run is handed to every sink, in order.

use crate::metrics::{LifespanMetrics, LifespanSummary};
use crate::sink::RunSink;
use tracing::{info, warn};
use wells_agents::agent::{Agent, RunResult};
use wells_agents::state::DeathCause;
use wells_core::config::Experiment;
use wells_core::error::Result;

/// Drives one agent through the configured number of runs.
#[derive(Debug)]
pub struct RunDriver {
    experiment: Experiment,
    agent: Agent,
}

impl RunDriver {
    /// Validate the experiment and build its agent.
    pub fn new(experiment: Experiment) -> Result<Self> {
        let agent = Agent::new(experiment.agent.clone(), experiment.wells.clone())?;
        Ok(Self { experiment, agent })
    }

    /// Drive a pre-built agent, e.g. one with seeded values or a custom strategy.
    pub fn with_agent(agent: Agent) -> Self {
        let experiment = Experiment::new(agent.config().clone(), agent.model().clone());
        Self { experiment, agent }
    }

    pub fn experiment(&self) -> &Experiment {
        &self.experiment
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn into_agent(self) -> Agent {
        self.agent
    }

    /// Runs still to go before `run_count` is reached.
    pub fn remaining(&self) -> u64 {
        self.experiment
            .agent
            .run_count
            .saturating_sub(self.agent.runs_completed())
    }

    /// Perform one run and feed it to the sinks.
    pub fn run_once(&mut self, sinks: &mut [&mut dyn RunSink]) -> Result<RunResult> {
        let result = self.agent.run()?;
        if result.cause == DeathCause::StepLimit {
            warn!(
                run = result.run_index,
                days = result.days_lived,
                health = result.final_health,
                "run stopped at the day cap"
            );
        }
        for sink in sinks.iter_mut() {
            sink.record(&self.experiment.wells, &result)?;
        }
        Ok(result)
    }

    /// Perform every remaining run, finish the sinks and summarise.
    pub fn run_all(&mut self, sinks: &mut [&mut dyn RunSink]) -> Result<LifespanSummary> {
        let mut metrics = LifespanMetrics::new();
        while self.remaining() > 0 {
            let result = self.run_once(sinks)?;
            metrics.record(&self.experiment.wells, &result)?;
        }
        for sink in sinks.iter_mut() {
            sink.finish()?;
        }

        let summary = metrics.summary();
        info!(
            runs = summary.runs,
            mean_days = summary.mean_days,
            max_days = summary.max_days,
            "experiment complete"
        );
        Ok(summary)
    }
}
