//! Experiment integration tests - full runs through the driver and sinks.

use std::fs;
use wells_runtime::prelude::*;

fn experiment(checkup_frequency: u64, seed: u64) -> Experiment {
    Experiment::new(
        AgentConfig {
            checkup_frequency,
            seed: Some(seed),
            ..Default::default()
        },
        ActionModel::default_wells(),
    )
}

#[test]
fn history_file_has_one_line_per_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.txt");

    let mut driver = RunDriver::new(experiment(1, 4)).unwrap();
    let mut history = HistoryWriter::new(fs::File::create(&path).unwrap());
    let summary = driver.run_all(&mut [&mut history]).unwrap();
    assert_eq!(history.lines(), 2);
    drop(history);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.starts_with('[') && line.ends_with(']'));
        let names: Vec<&str> = line[1..line.len() - 1].split(", ").collect();
        assert!(names.iter().all(|n| *n == "unhealthy" || *n == "healthy"));
    }
    let days: u64 = lines
        .iter()
        .map(|l| l.split(", ").count() as u64)
        .sum();
    assert_eq!(days as f64, summary.mean_days * 2.0);
}

#[test]
fn value_report_covers_every_lived_day() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.json");

    let exp = experiment(3, 9);
    let mut driver = RunDriver::new(exp.clone()).unwrap();
    let mut collector = ValueTraceCollector::new(&exp.agent);
    let summary = driver.run_all(&mut [&mut collector]).unwrap();
    collector.write_json(&path).unwrap();

    let report = collector.report();
    assert_eq!(report.runs.len(), 2);
    assert_eq!(report.longest_run, summary.max_days);
    assert_eq!(report.checkup_frequency, 3);
    for run in &report.runs {
        assert_eq!(run.series["healthy"].len() as u64, run.days_lived);
        assert_eq!(run.series["unhealthy"].len() as u64, run.days_lived);
    }

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["runs"].as_array().unwrap().len(), 2);
    assert_eq!(json["longest_run"].as_u64().unwrap(), summary.max_days);
}

#[test]
fn same_seed_same_lives() {
    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();
    {
        let mut writer = HistoryWriter::new(&mut first);
        RunDriver::new(experiment(2, 77))
            .unwrap()
            .run_all(&mut [&mut writer])
            .unwrap();
    }
    {
        let mut writer = HistoryWriter::new(&mut second);
        RunDriver::new(experiment(2, 77))
            .unwrap()
            .run_all(&mut [&mut writer])
            .unwrap();
    }
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn checkups_teach_the_agent_to_live_longer() {
    // Scores alone favour "unhealthy"; the true health change favours "healthy".
    let blind = RunDriver::new(experiment(0, 31))
        .unwrap()
        .run_all(&mut [])
        .unwrap();
    let checked = RunDriver::new(experiment(1, 31))
        .unwrap()
        .run_all(&mut [])
        .unwrap();

    assert!(
        checked.mean_days > 2.0 * blind.mean_days,
        "with checkups {} vs without {}",
        checked.mean_days,
        blind.mean_days
    );
    let healthy = |s: &LifespanSummary| {
        s.choices
            .iter()
            .find(|c| c.well == "healthy")
            .map(|c| c.share)
            .unwrap()
    };
    assert!(healthy(&checked) > healthy(&blind));
}

#[test]
fn exported_experiment_reproduces_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("experiment.json");
    let exp = experiment(1, 12);
    save_experiment(&exp, &path).unwrap();

    let reloaded = load_experiment(&path).unwrap();
    let a = RunDriver::new(exp).unwrap().run_all(&mut []).unwrap();
    let b = RunDriver::new(reloaded).unwrap().run_all(&mut []).unwrap();
    assert_eq!(a, b);

    let summary_path = dir.path().join("summary.json");
    save_summary(&a, &summary_path).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(json["runs"].as_u64().unwrap(), 2);
}

#[test]
fn retained_values_feed_the_next_run() {
    let exp = Experiment::new(
        AgentConfig {
            retain_values: true,
            checkup_frequency: 0,
            max_health: 50.0,
            seed: Some(5),
            run_count: 3,
            ..Default::default()
        },
        ActionModel::default_wells(),
    );
    let mut driver = RunDriver::new(exp).unwrap();
    let mut finals: Vec<Vec<f64>> = Vec::new();
    let mut starts: Vec<Vec<f64>> = Vec::new();
    let mut sink = |_: &ActionModel, r: &RunResult| -> wells_core::error::Result<()> {
        finals.push(r.final_values.clone());
        if let Some(trace) = &r.trace {
            starts.push(trace.days[0].clone());
        }
        Ok(())
    };
    driver.run_all(&mut [&mut sink]).unwrap();
    drop(sink);

    assert_eq!(finals.len(), 3);
    // Each run's first day starts from the previous run's final table, so
    // at least one of the two values is carried over untouched.
    for run in 1..3 {
        let carried = &finals[run - 1];
        let first_day = &starts[run];
        assert!((0..2).any(|i| first_day[i] == carried[i]));
    }
}
