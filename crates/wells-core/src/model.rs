//! Action model - the wells an agent can choose from.
//!
//! The model is fixed once built: every agent, value table and strategy
//! refers to wells by [`ActionId`], which is the well's position in the
//! model. Looking up an identifier the model does not contain is an error.

use crate::error::{ConfigError, Result, WellsError};
use crate::types::{ActionId, Well};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Static lookup from action identifier to its effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Well>", into = "Vec<Well>")]
pub struct ActionModel {
    wells: Vec<Well>,
}

impl ActionModel {
    /// Build a model from a nonempty list of uniquely named wells.
    pub fn new(wells: Vec<Well>) -> Result<Self> {
        if wells.is_empty() {
            return Err(ConfigError::EmptyActionModel.into());
        }

        let mut seen = HashSet::new();
        for well in &wells {
            if well.name.trim().is_empty() {
                return Err(WellsError::invalid_config(
                    "wells.name",
                    well.name.clone(),
                    "well names must not be empty",
                ));
            }
            if !seen.insert(well.name.as_str()) {
                return Err(ConfigError::DuplicateWell(well.name.clone()).into());
            }
            if !well.score.is_finite() || !well.health.is_finite() {
                return Err(WellsError::invalid_config(
                    format!("wells.{}", well.name),
                    format!("score={}, health={}", well.score, well.health),
                    "effects must be finite",
                ));
            }
        }

        Ok(Self { wells })
    }

    /// The classic pair: a tasty but harmful well and a plainer, gentler one.
    pub fn default_wells() -> Self {
        Self {
            wells: vec![
                Well::new("unhealthy", 10.0, -6.0),
                Well::new("healthy", 6.0, -1.0),
            ],
        }
    }

    /// Number of wells.
    pub fn len(&self) -> usize {
        self.wells.len()
    }

    /// Always false for a constructed model.
    pub fn is_empty(&self) -> bool {
        self.wells.is_empty()
    }

    /// All action identifiers in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        (0..self.wells.len()).map(ActionId)
    }

    /// All wells in declaration order.
    pub fn wells(&self) -> &[Well] {
        &self.wells
    }

    /// The well behind an identifier.
    pub fn well(&self, id: ActionId) -> Result<&Well> {
        self.wells
            .get(id.index())
            .ok_or(WellsError::UnknownAction(id))
    }

    /// Immediate score of an action.
    pub fn score(&self, id: ActionId) -> Result<f64> {
        self.well(id).map(|w| w.score)
    }

    /// Health delta of an action.
    pub fn health_delta(&self, id: ActionId) -> Result<f64> {
        self.well(id).map(|w| w.health)
    }

    /// Name of an action.
    pub fn name(&self, id: ActionId) -> Result<&str> {
        self.well(id).map(|w| w.name.as_str())
    }

    /// Find an action by well name.
    pub fn id_of(&self, name: &str) -> Option<ActionId> {
        self.wells.iter().position(|w| w.name == name).map(ActionId)
    }
}

impl Default for ActionModel {
    fn default() -> Self {
        Self::default_wells()
    }
}

impl TryFrom<Vec<Well>> for ActionModel {
    type Error = WellsError;

    fn try_from(wells: Vec<Well>) -> Result<Self> {
        Self::new(wells)
    }
}

impl From<ActionModel> for Vec<Well> {
    fn from(model: ActionModel) -> Self {
        model.wells
    }
}
