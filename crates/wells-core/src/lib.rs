//! # Wells Core
//!
//! Core types for the two-well foraging simulation.
//!
//! An agent lives day by day, drinking from one of a fixed set of wells.
//! Each well has an immediate score and a health effect. The agent learns
//! a value estimate per well with a tabular temporal-difference rule and
//! dies when its health runs out. This crate holds the pieces that carry
//! no lifecycle of their own:
//!
//! - **ActionModel** - the wells and their (score, health) effects
//! - **ValueTable** - per-action value estimates and the update rules
//! - **SelectionStrategy** - how an agent picks today's well
//! - **AgentConfig / Experiment** - validated, serializable configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use wells_core::prelude::*;
//!
//! let model = ActionModel::default_wells();
//! let mut values = ValueTable::for_model(&model, 0.2, 0.8).unwrap();
//!
//! let unhealthy = model.id_of("unhealthy").unwrap();
//! values.update(unhealthy, 10.0).unwrap();
//! assert_eq!(values.best_action().0, unhealthy);
//! ```

pub mod types;
pub mod error;
pub mod model;
pub mod value;
pub mod policy;
pub mod config;
pub mod prelude;
