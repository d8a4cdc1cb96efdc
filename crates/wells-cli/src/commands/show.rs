//! Show the resolved configuration.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;

pub fn run() -> Result<()> {
    let config = Config::load()?;
    let agent = &config.agent;

    println!("{}", "Agent".bold());
    println!("  runs:               {}", agent.run_count.to_string().cyan());
    println!("  max health:         {}", agent.max_health.to_string().cyan());
    println!("  epsilon:            {}", agent.epsilon.to_string().cyan());
    println!("  alpha / gamma:      {} / {}", agent.alpha.to_string().cyan(), agent.gamma.to_string().cyan());
    println!("  exploration days:   {}", agent.exploration_length.to_string().cyan());
    println!("  retain values:      {}", agent.retain_values.to_string().cyan());
    println!("  checkups:           {}", describe_every(agent.checkup_frequency, "days"));
    if agent.thinking_enabled() {
        println!(
            "  contemplation:      every {} checkups, {} rehearsals",
            agent.thinking_frequency.to_string().cyan(),
            agent.thinking_runs.to_string().cyan()
        );
    } else {
        println!("  contemplation:      {}", "off".yellow());
    }
    if let Some(limit) = agent.step_limit {
        println!("  day cap:            {}", limit.to_string().cyan());
    }
    if let Some(seed) = agent.seed {
        println!("  seed:               {}", seed.to_string().cyan());
    }

    println!();
    println!("{}", "Wells".bold());
    for well in config.wells.wells() {
        let health = format!("{:>6}", well.health);
        let health = if well.health < 0.0 { health.red() } else { health.green() };
        println!("  {:<16} score {:>6}  health {}", well.name, well.score, health);
    }

    println!();
    println!("Output directory: {}", config.output.dir.cyan());
    Ok(())
}

fn describe_every(frequency: u64, unit: &str) -> String {
    if frequency == 0 {
        "off".yellow().to_string()
    } else {
        format!("every {} {}", frequency.to_string().cyan(), unit)
    }
}
