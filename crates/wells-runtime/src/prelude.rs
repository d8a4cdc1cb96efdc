//! Wells Runtime Prelude - convenient imports for common usage.
//!
//! ```rust
//! use wells_runtime::prelude::*;
//! ```

// Re-export driver
pub use crate::driver::RunDriver;

// Re-export sinks
pub use crate::sink::{HistoryWriter, RunSink, RunTrace, ValueReport, ValueTraceCollector};

// Re-export metrics
pub use crate::metrics::{ChoiceShare, LifespanMetrics, LifespanSummary};

// Re-export experiment persistence
pub use crate::session::{load_experiment, save_experiment, save_summary};

// Re-export from agents
pub use wells_agents::prelude::*;
