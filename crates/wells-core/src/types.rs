//! Shared types used across the wells crates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day counter. Day 1 is the first day an agent lives.
pub type Day = u64;

/// Identifier of a well (an action) within an [`ActionModel`](crate::model::ActionModel).
///
/// Identifiers are dense indices in declaration order, so ordering by
/// identifier is ordering by declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub usize);

impl ActionId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action-{}", self.0)
    }
}

/// A well the agent can drink from, and what drinking does to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Well {
    /// Human-readable, unique name ("unhealthy", "healthy", ...).
    pub name: String,
    /// Immediate score, used as the reward in value updates.
    pub score: f64,
    /// Change applied to health every time this well is chosen.
    pub health: f64,
}

impl Well {
    pub fn new(name: impl Into<String>, score: f64, health: f64) -> Self {
        Self {
            name: name.into(),
            score,
            health,
        }
    }
}
