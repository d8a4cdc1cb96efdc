//! Per-day value snapshots.
//!
//! One row per lived day, one column per action. Rendering is left to
//! whoever consumes the trace; this only keeps the numbers.

use serde::Serialize;
use wells_core::model::ActionModel;
use wells_core::types::ActionId;

/// Value estimates of every action, sampled once per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueTrace {
    /// Column labels, in action order.
    pub actions: Vec<String>,
    /// `days[d][a]` is the estimate of action `a` at the end of day `d + 1`.
    pub days: Vec<Vec<f64>>,
}

impl ValueTrace {
    pub fn new(model: &ActionModel) -> Self {
        Self {
            actions: model.wells().iter().map(|w| w.name.clone()).collect(),
            days: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: Vec<f64>) {
        self.days.push(snapshot);
    }

    /// Number of days recorded.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The day-by-day series for one action.
    pub fn series(&self, action: ActionId) -> Vec<f64> {
        self.days
            .iter()
            .filter_map(|row| row.get(action.index()).copied())
            .collect()
    }
}
