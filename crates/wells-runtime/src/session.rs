//! Experiment persistence - save/load the setup and the run summary.
//!
//! An experiment (configuration plus wells) is written as pretty JSON so
//! a run can be reproduced later. The lifespan summary is written next to
//! it for comparison across experiments.

use crate::metrics::LifespanSummary;
use std::path::Path;
use wells_core::config::Experiment;
use wells_core::error::Result;

/// Save an experiment to a JSON file, creating parent directories.
pub fn save_experiment(experiment: &Experiment, path: &Path) -> Result<()> {
    let json = experiment.to_json()?;
    write_creating_parent(path, &json)
}

/// Load and validate an experiment from JSON.
pub fn load_experiment(path: &Path) -> Result<Experiment> {
    let json = std::fs::read_to_string(path)?;
    Experiment::from_json(&json)
}

/// Save a lifespan summary as pretty JSON.
pub fn save_summary(summary: &LifespanSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    write_creating_parent(path, &json)
}

fn write_creating_parent(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}
