//! Reporting sinks - where finished runs go.
//!
//! A sink sees every [`RunResult`] once, right after the run ends.
//! Two sinks ship with the runtime:
//! - [`HistoryWriter`] appends one line of well names per run
//! - [`ValueTraceCollector`] keeps per-day value series for plotting
//!
//! Closures of the right shape are sinks too.

use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use wells_agents::agent::RunResult;
use wells_core::config::AgentConfig;
use wells_core::error::Result;
use wells_core::model::ActionModel;
use wells_core::types::Day;

/// Receives every finished run.
pub trait RunSink {
    /// Record one run.
    fn record(&mut self, model: &ActionModel, result: &RunResult) -> Result<()>;

    /// Called once after the last run.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<F> RunSink for F
where
    F: FnMut(&ActionModel, &RunResult) -> Result<()>,
{
    fn record(&mut self, model: &ActionModel, result: &RunResult) -> Result<()> {
        self(model, result)
    }
}

/// Writes each run's action history as one line: `[unhealthy, healthy, ...]`.
///
/// Runs without a tracked history are skipped.
pub struct HistoryWriter<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> HistoryWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written so far.
    pub fn lines(&self) -> usize {
        self.lines
    }
}

impl<W: Write> RunSink for HistoryWriter<W> {
    fn record(&mut self, model: &ActionModel, result: &RunResult) -> Result<()> {
        let Some(names) = result.history_names(model) else {
            return Ok(());
        };
        let names = names?;
        writeln!(self.out, "[{}]", names.join(", "))?;
        self.lines += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Value series of one run, keyed by well name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunTrace {
    pub run_index: u64,
    pub days_lived: Day,
    pub series: BTreeMap<String, Vec<f64>>,
}

/// Everything a plotter needs: one trace per run plus axis markers.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ValueReport {
    pub runs: Vec<RunTrace>,
    /// Longest life across all recorded runs.
    pub longest_run: Day,
    /// Day on which forced exploration ends.
    pub exploration_length: Day,
    /// Days between checkups (0 when disabled).
    pub checkup_frequency: u64,
}

/// Collects value traces into a [`ValueReport`].
#[derive(Debug, Clone, Default)]
pub struct ValueTraceCollector {
    report: ValueReport,
}

impl ValueTraceCollector {
    /// A collector whose markers come from `config`.
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            report: ValueReport {
                exploration_length: config.exploration_length,
                checkup_frequency: config.checkup_frequency,
                ..Default::default()
            },
        }
    }

    pub fn report(&self) -> &ValueReport {
        &self.report
    }

    pub fn into_report(self) -> ValueReport {
        self.report
    }

    /// Write the report as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.report)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl RunSink for ValueTraceCollector {
    fn record(&mut self, model: &ActionModel, result: &RunResult) -> Result<()> {
        let Some(trace) = result.trace.as_ref() else {
            return Ok(());
        };
        let mut series = BTreeMap::new();
        for id in model.ids() {
            series.insert(model.name(id)?.to_string(), trace.series(id));
        }
        self.report.longest_run = self.report.longest_run.max(result.days_lived);
        self.report.runs.push(RunTrace {
            run_index: result.run_index,
            days_lived: result.days_lived,
            series,
        });
        Ok(())
    }
}
