//! # Wells
//!
//! A foraging agent that learns, by Q-learning, which of several wells
//! to drink from.
//!
//! Every well has a tasty **score** and a hidden **health** effect. A naive
//! agent learns from the score alone and happily drinks itself to death.
//! Periodic doctor's checkups reveal the true health change, and
//! contemplation lets the agent rehearse a choice in a nested simulation
//! without spending real days.
//!
//! ## Quick Start
//!
//! ```rust
//! use wells::prelude::*;
//!
//! let experiment = Experiment::new(
//!     AgentConfig {
//!         checkup_frequency: 5,
//!         max_health: 200.0,
//!         seed: Some(7),
//!         ..Default::default()
//!     },
//!     ActionModel::default_wells(),
//! );
//!
//! let mut values = ValueTraceCollector::new(&experiment.agent);
//! let mut driver = RunDriver::new(experiment).unwrap();
//! let summary = driver.run_all(&mut [&mut values]).unwrap();
//!
//! assert_eq!(summary.runs, 2);
//! assert_eq!(values.report().runs.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`wells_core`] - Actions, value table, selection strategies, configuration
//! - [`wells_agents`] - The agent's run loop, checkups and contemplation
//! - [`wells_runtime`] - Run driver, reporting sinks, metrics, persistence
//!
//! ## One Day
//!
//! | Step | What Happens |
//! |------|--------------|
//! | Select | Explore at random with probability epsilon, else take the best value |
//! | Drink | Health changes by the well's hidden effect |
//! | Learn | `Q(a) <- (1 - alpha) Q(a) + alpha (score + gamma max Q)` |
//! | Checkup | Every `checkup_frequency` days the score is replaced by score + true health change |
//! | Contemplate | Every `thinking_frequency` checkups, rehearse today's well |
//!
//! When health reaches zero the last well chosen takes a terminal penalty.

// Re-export all subcrates
pub use wells_core as core;
pub use wells_agents as agents;
pub use wells_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use wells::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use wells_core::types::{ActionId, Day, Well};
    pub use wells_core::model::ActionModel;
    pub use wells_core::value::ValueTable;
    pub use wells_core::config::{AgentConfig, Experiment};

    // Selection
    pub use wells_core::policy::{EpsilonGreedy, FixedAction, SelectionContext, SelectionStrategy};

    // Error types
    pub use wells_core::error::{ConfigError, Result, WellsError};

    // Agents
    pub use wells_agents::agent::{Agent, RunResult, TERMINAL_PENALTY};
    pub use wells_agents::state::{CheckupRecord, DeathCause};
    pub use wells_agents::trace::ValueTrace;

    // Runtime
    pub use wells_runtime::driver::RunDriver;
    pub use wells_runtime::sink::{HistoryWriter, RunSink, ValueReport, ValueTraceCollector};
    pub use wells_runtime::metrics::{ChoiceShare, LifespanMetrics, LifespanSummary};
    pub use wells_runtime::session::{load_experiment, save_experiment, save_summary};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
