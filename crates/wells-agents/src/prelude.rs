//! Wells Agents Prelude - convenient imports for common usage.
//!
//! ```rust
//! use wells_agents::prelude::*;
//! ```

pub use crate::agent::{Agent, RunResult, TERMINAL_PENALTY};
pub use crate::state::{AgentState, CheckupRecord, DeathCause, LifeStage};
pub use crate::trace::ValueTrace;
pub use crate::contemplation::ContemplationPlan;

// Re-export from core
pub use wells_core::prelude::*;
