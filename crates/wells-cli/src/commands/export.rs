//! Export the resolved experiment.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

pub fn run(output: &str, format: &str) -> Result<()> {
    let experiment = Config::load()?.experiment();

    let content = match format.to_lowercase().as_str() {
        "toml" => toml::to_string_pretty(&experiment).context("Failed to serialize experiment")?,
        "json" => experiment.to_json()?,
        _ => {
            bail!("Unsupported format: {}. Use 'toml' or 'json'.", format);
        }
    };

    let output_path = Path::new(output);
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    std::fs::write(output_path, content)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("{} Exported to {}", "✓".green().bold(), output.cyan());
    println!("  Wells: {}", experiment.wells.len().to_string().cyan());
    match experiment.agent.seed {
        Some(seed) => println!("  Seed: {}", seed.to_string().cyan()),
        None => println!(
            "  {} no seed set; reruns will differ",
            "•".yellow()
        ),
    }
    println!("  Reload with: wells run --experiment {}", output);

    Ok(())
}
