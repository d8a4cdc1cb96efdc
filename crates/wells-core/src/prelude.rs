//! Wells Core Prelude - convenient imports for common usage.
//!
//! ```rust
//! use wells_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{ActionId, Day, Well};

pub use crate::model::ActionModel;
pub use crate::value::ValueTable;
pub use crate::policy::{EpsilonGreedy, FixedAction, SelectionContext, SelectionStrategy};
pub use crate::config::{AgentConfig, Experiment};

// Re-export error types
pub use crate::error::{ConfigError, Result, WellsError};
