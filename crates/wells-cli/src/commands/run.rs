//! Run the experiment.

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use wells::prelude::*;

use crate::config::{load_experiment_file, Config, OutputConfig};
use crate::RunArgs;

pub fn run(args: &RunArgs) -> Result<()> {
    let (mut experiment, output) = match &args.experiment {
        Some(path) => (load_experiment_file(Path::new(path))?, OutputConfig::default()),
        None => {
            let config = Config::load()?;
            (config.experiment(), config.output)
        }
    };
    apply_overrides(&mut experiment.agent, args);
    experiment.validate().context("Invalid experiment")?;

    let out_dir = PathBuf::from(args.output.as_deref().unwrap_or(&output.dir));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let agent = &experiment.agent;
    println!(
        "{} Running {} lives over {} wells (checkups: {}, contemplation: {})",
        "→".blue(),
        agent.run_count.to_string().cyan(),
        experiment.wells.len().to_string().cyan(),
        if agent.checkups_enabled() { "on".green() } else { "off".yellow() },
        if agent.thinking_enabled() { "on".green() } else { "off".yellow() },
    );

    let mut history = if output.write_history {
        let path = out_dir.join("history.txt");
        let file = File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        Some(HistoryWriter::new(BufWriter::new(file)))
    } else {
        None
    };
    let mut values = output
        .write_values
        .then(|| ValueTraceCollector::new(&experiment.agent));

    let pb = ProgressBar::new(experiment.agent.run_count);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lives {msg}")?
            .progress_chars("#>-"),
    );
    let mut progress = |_: &ActionModel, result: &RunResult| -> wells::prelude::Result<()> {
        pb.set_message(format!("(last: {} days)", result.days_lived));
        pb.inc(1);
        Ok(())
    };

    let mut driver = RunDriver::new(experiment.clone())?;
    let summary = {
        let mut sinks: Vec<&mut dyn RunSink> = Vec::new();
        sinks.push(&mut progress);
        if let Some(history) = history.as_mut() {
            sinks.push(history);
        }
        if let Some(values) = values.as_mut() {
            sinks.push(values);
        }
        driver.run_all(&mut sinks)?
    };
    pb.finish_with_message("done");

    let mut written = Vec::new();
    if history.is_some() {
        written.push(out_dir.join("history.txt"));
    }
    if let Some(values) = &values {
        let path = out_dir.join("values.json");
        values.write_json(&path)?;
        written.push(path);
    }
    let summary_path = out_dir.join("summary.json");
    save_summary(&summary, &summary_path)?;
    written.push(summary_path);
    let experiment_path = out_dir.join("experiment.json");
    save_experiment(&experiment, &experiment_path)?;
    written.push(experiment_path);

    print_summary(&summary);
    println!();
    for path in written {
        println!("  {} Wrote {}", "✓".green(), path.display());
    }

    Ok(())
}

/// Apply command-line flags on top of the loaded configuration.
pub fn apply_overrides(agent: &mut AgentConfig, args: &RunArgs) {
    if let Some(runs) = args.runs {
        agent.run_count = runs;
    }
    if let Some(checkups) = args.checkups {
        agent.checkup_frequency = checkups;
    }
    if let Some(days) = args.exploration {
        agent.exploration_length = days;
    }
    if let Some(epsilon) = args.epsilon {
        agent.epsilon = epsilon;
    }
    if let Some(alpha) = args.alpha {
        agent.alpha = alpha;
    }
    if let Some(gamma) = args.gamma {
        agent.gamma = gamma;
    }
    if let Some(health) = args.max_health {
        agent.max_health = health;
    }
    if args.retain {
        agent.retain_values = true;
    }
    if let Some(thinking) = args.thinking {
        agent.thinking_frequency = thinking;
    }
    if let Some(runs) = args.thinking_runs {
        agent.thinking_runs = runs;
    }
    if let Some(limit) = args.thinking_step_limit {
        agent.thinking_step_limit = limit;
    }
    if let Some(limit) = args.step_limit {
        agent.step_limit = Some(limit);
    }
    if let Some(seed) = args.seed {
        agent.seed = Some(seed);
    }
}

fn print_summary(summary: &LifespanSummary) {
    println!();
    println!("{} Experiment complete!", "✓".green().bold());
    println!(
        "  Lifespan: mean {} days (min {}, max {})",
        format!("{:.1}", summary.mean_days).cyan(),
        summary.min_days.to_string().yellow(),
        summary.max_days.to_string().green()
    );
    if summary.capped_runs > 0 {
        println!(
            "  {} {} of {} lives hit the day cap",
            "•".yellow(),
            summary.capped_runs,
            summary.runs
        );
    }
    println!(
        "  Checkups: {}  Contemplations: {}",
        summary.total_checkups.to_string().cyan(),
        summary.total_contemplations.to_string().cyan()
    );
    for choice in &summary.choices {
        println!(
            "  {:<16} {:>5.1}% of days",
            choice.well,
            choice.share * 100.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let mut agent = AgentConfig::default();
        let args = RunArgs {
            runs: Some(5),
            checkups: Some(0),
            retain: true,
            thinking: Some(2),
            thinking_step_limit: Some(40),
            step_limit: Some(300),
            seed: Some(9),
            ..Default::default()
        };
        apply_overrides(&mut agent, &args);

        assert_eq!(agent.run_count, 5);
        assert_eq!(agent.checkup_frequency, 0);
        assert!(agent.retain_values);
        assert_eq!(agent.thinking_frequency, 2);
        assert_eq!(agent.thinking_step_limit, 40);
        assert_eq!(agent.step_limit, Some(300));
        assert_eq!(agent.seed, Some(9));
        assert_eq!(agent.alpha, AgentConfig::default().alpha);
    }

    #[test]
    fn absent_flags_leave_config_alone() {
        let mut agent = AgentConfig {
            retain_values: true,
            epsilon: 0.3,
            ..Default::default()
        };
        let before = agent.clone();
        apply_overrides(&mut agent, &RunArgs::default());
        assert_eq!(agent, before);
    }
}
