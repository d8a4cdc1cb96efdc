//! # Wells Runtime
//!
//! Drives an agent through its configured runs and hands every finished
//! run to reporting sinks.
//!
//! The driver owns the experiment (configuration plus wells) and one
//! agent. Sinks decide what to keep: the action history, the per-day
//! value trace for plotting, or lifespan statistics.

pub mod driver;
pub mod sink;
pub mod metrics;
pub mod session;
pub mod prelude;
