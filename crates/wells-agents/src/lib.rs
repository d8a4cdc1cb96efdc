//! # Wells Agents
//!
//! The foraging agent and its lifecycle.
//!
//! An [`Agent`](agent::Agent) performs runs. Each run is a life: the agent
//! drinks from one well per day, learns from the immediate score, sees a
//! doctor every few days for the true health change, and dies when its
//! health runs out. Between checkups it may contemplate, rehearsing its
//! last choice in a nested agent that works on a copy of its values.
//!
//! - **Agent** - the run loop (Living → CheckingUp → Contemplating → Dead)
//! - **AgentState** - per-run counters, health and history
//! - **ContemplationPlan** - builds the one-level nested rehearsal agent
//! - **ValueTrace** - per-day value snapshots for downstream plotting

pub mod state;
pub mod trace;
pub mod agent;
pub mod contemplation;
pub mod prelude;
