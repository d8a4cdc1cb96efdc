//! Contemplation - rehearsing a choice without spending real days.
//!
//! A plan is derived once from the parent's configuration. When the
//! parent reaches a thinking boundary, the plan builds a nested agent
//! that:
//! - starts from a deep copy of the parent's value table
//! - always picks the parent's last action
//! - retains values across its sub-runs
//! - caps every sub-run at `thinking_step_limit` days
//! - has no plan of its own
//!
//! The parent then replaces its table with the nested agent's.

use crate::agent::Agent;
use wells_core::config::AgentConfig;
use wells_core::error::Result;
use wells_core::model::ActionModel;
use wells_core::policy::FixedAction;
use wells_core::types::{ActionId, Day};
use wells_core::value::ValueTable;

/// Factory for the nested rehearsal agent.
#[derive(Debug, Clone, PartialEq)]
pub struct ContemplationPlan {
    runs: u64,
    config: AgentConfig,
}

impl ContemplationPlan {
    pub fn from_config(parent: &AgentConfig) -> Self {
        let config = AgentConfig {
            retain_values: true,
            thinking_frequency: 0,
            run_count: parent.thinking_runs.max(1),
            step_limit: Some(parent.thinking_step_limit.max(1)),
            seed: None,
            track_history: false,
            track_values: false,
            ..parent.clone()
        };
        Self {
            runs: parent.thinking_runs,
            config,
        }
    }

    /// Sub-runs per contemplation phase.
    pub fn runs(&self) -> u64 {
        self.runs
    }

    /// Day cap of each sub-run.
    pub fn step_limit(&self) -> Day {
        self.config.step_limit.unwrap_or(1)
    }

    /// Configuration the nested agent runs with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Build a nested agent replaying `replay`, starting from `values`.
    pub fn build(
        &self,
        model: &ActionModel,
        values: ValueTable,
        replay: ActionId,
        seed: u64,
    ) -> Result<Agent> {
        model.well(replay)?;
        Agent::contemplative(
            self.config.clone(),
            model.clone(),
            values,
            Box::new(FixedAction(replay)),
            seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wells_core::error::WellsError;

    fn parent() -> AgentConfig {
        AgentConfig {
            thinking_frequency: 2,
            thinking_runs: 4,
            thinking_step_limit: 25,
            retain_values: false,
            ..Default::default()
        }
    }

    #[test]
    fn nested_config_retains_and_never_thinks() {
        let plan = ContemplationPlan::from_config(&parent());
        assert!(plan.config().retain_values);
        assert!(!plan.config().thinking_enabled());
        assert_eq!(plan.step_limit(), 25);
        assert_eq!(plan.runs(), 4);
    }

    #[test]
    fn every_sub_run_is_capped() {
        let plan = ContemplationPlan::from_config(&AgentConfig {
            thinking_step_limit: 0,
            ..parent()
        });
        assert_eq!(plan.config().step_limit, Some(1));
        plan.config().validate().unwrap();
    }

    #[test]
    fn nested_agent_replays_and_keeps_seed_values() {
        let model = ActionModel::default_wells();
        let mut values = ValueTable::for_model(&model, 0.2, 0.8).unwrap();
        values.set(ActionId(0), 42.0).unwrap();

        let plan = ContemplationPlan::from_config(&parent());
        let mut nested = plan.build(&model, values, ActionId(1), 9).unwrap();
        assert!(nested.is_contemplating());
        assert_eq!(nested.strategy_name(), "fixed");

        let result = nested.run().unwrap();
        assert_eq!(result.days_lived, 25);
        assert!(result.history.is_none());
        // The replayed well learned; the other one kept its seed.
        assert_eq!(nested.values().read(ActionId(0)).unwrap(), 42.0);
        assert_ne!(nested.values().read(ActionId(1)).unwrap(), 0.0);
    }

    #[test]
    fn replaying_unknown_action_fails() {
        let model = ActionModel::default_wells();
        let values = ValueTable::for_model(&model, 0.2, 0.8).unwrap();
        let plan = ContemplationPlan::from_config(&parent());
        assert_eq!(
            plan.build(&model, values, ActionId(9), 1).unwrap_err(),
            WellsError::UnknownAction(ActionId(9))
        );
    }
}
