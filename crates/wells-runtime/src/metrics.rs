//! Lifespan metrics across runs.
//!
//! Summarises how long the agent lived and how it split its days
//! between wells. Runs without history still count toward lifespans.

use crate::sink::RunSink;
use serde::Serialize;
use wells_agents::agent::RunResult;
use wells_agents::state::DeathCause;
use wells_core::error::Result;
use wells_core::model::ActionModel;
use wells_core::types::Day;

/// Share of days spent at one well.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceShare {
    pub well: String,
    pub days: u64,
    pub share: f64,
}

/// Lifespan statistics over all recorded runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifespanSummary {
    pub runs: u64,
    pub mean_days: f64,
    pub min_days: Day,
    pub max_days: Day,
    /// Runs that ended on the day cap rather than by starvation.
    pub capped_runs: u64,
    pub total_checkups: u64,
    pub total_contemplations: u64,
    pub choices: Vec<ChoiceShare>,
}

/// Accumulates a [`LifespanSummary`].
#[derive(Debug, Clone, Default)]
pub struct LifespanMetrics {
    lifespans: Vec<Day>,
    capped_runs: u64,
    checkups: u64,
    contemplations: u64,
    wells: Vec<String>,
    choice_days: Vec<u64>,
}

impl LifespanMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> LifespanSummary {
        let runs = self.lifespans.len() as u64;
        let total: Day = self.lifespans.iter().sum();
        let mean_days = if runs > 0 {
            total as f64 / runs as f64
        } else {
            0.0
        };

        let chosen: u64 = self.choice_days.iter().sum();
        let choices = self
            .wells
            .iter()
            .zip(&self.choice_days)
            .map(|(well, &days)| ChoiceShare {
                well: well.clone(),
                days,
                share: if chosen > 0 {
                    days as f64 / chosen as f64
                } else {
                    0.0
                },
            })
            .collect();

        LifespanSummary {
            runs,
            mean_days,
            min_days: self.lifespans.iter().copied().min().unwrap_or(0),
            max_days: self.lifespans.iter().copied().max().unwrap_or(0),
            capped_runs: self.capped_runs,
            total_checkups: self.checkups,
            total_contemplations: self.contemplations,
            choices,
        }
    }
}

impl RunSink for LifespanMetrics {
    fn record(&mut self, model: &ActionModel, result: &RunResult) -> Result<()> {
        if self.wells.is_empty() {
            self.wells = model.wells().iter().map(|w| w.name.clone()).collect();
            self.choice_days = vec![0; model.len()];
        }

        self.lifespans.push(result.days_lived);
        if result.cause == DeathCause::StepLimit {
            self.capped_runs += 1;
        }
        self.checkups += result.checkups.len() as u64;
        self.contemplations += result.contemplations;

        if let Some(counts) = result.choice_counts(model.len()) {
            for (total, count) in self.choice_days.iter_mut().zip(counts) {
                *total += count;
            }
        }
        Ok(())
    }
}
