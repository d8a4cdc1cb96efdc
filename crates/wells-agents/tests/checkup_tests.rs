//! Doctor's checkup tests - corrections use the true health change.

mod common;

use common::Scripted;
use wells_agents::prelude::*;

const A: ActionId = ActionId(0);
const B: ActionId = ActionId(1);

fn two_wells() -> ActionModel {
    ActionModel::new(vec![Well::new("a", 1.0, -2.0), Well::new("b", 1.0, -3.0)]).unwrap()
}

fn every_third_day(alpha: f64, gamma: f64) -> Agent {
    let config = AgentConfig {
        checkup_frequency: 3,
        alpha,
        gamma,
        max_health: 100.0,
        step_limit: Some(7),
        seed: Some(5),
        ..Default::default()
    };
    Agent::new(config, two_wells())
        .unwrap()
        .with_strategy(Scripted::boxed(vec![A, B, B, A, A, B]))
}

#[test]
fn correction_uses_health_change_since_last_checkup() {
    // Health: 100 -> 98 -> 95 -> 92 (checkup) -> 90 -> 88 -> 85 (checkup) -> 83
    let mut agent = every_third_day(1.0, 0.0);
    let result = agent.run().unwrap();

    assert_eq!(result.days_lived, 7);
    assert_eq!(result.cause, DeathCause::StepLimit);
    assert_eq!(
        result.checkups,
        vec![
            CheckupRecord { day: 3, action: B, delta: -8.0, reward: -7.0, value: -7.0 },
            CheckupRecord { day: 6, action: B, delta: -7.0, reward: -6.0, value: -6.0 },
        ]
    );
}

#[test]
fn day_after_checkup_skips_the_regular_update() {
    let mut agent = every_third_day(1.0, 0.0);
    let trace = agent.run().unwrap().trace.unwrap();

    // Day 3 still learns B's score; the day-3 correction shows on day 4,
    // which chooses A without touching its estimate.
    assert_eq!(trace.days[2], vec![1.0, 1.0]);
    assert_eq!(trace.days[3], vec![1.0, -7.0]);
    // Day 6 relearns B from its score before the next correction.
    assert_eq!(trace.days[5], vec![1.0, 1.0]);
}

#[test]
fn regular_update_timing_around_a_checkup() {
    let model = ActionModel::new(vec![Well::new("only", 10.0, -1.0)]).unwrap();
    let mut agent = Agent::new(
        AgentConfig {
            checkup_frequency: 3,
            alpha: 0.5,
            gamma: 0.0,
            max_health: 100.0,
            step_limit: Some(5),
            seed: Some(6),
            ..Default::default()
        },
        model,
    )
    .unwrap();

    let result = agent.run().unwrap();
    // Days 1-3 learn from the score; the checkup blends in 10 - 3 = 7;
    // day 4 skips its update and day 5 resumes.
    assert_eq!(
        result.trace.unwrap().series(ActionId(0)),
        vec![5.0, 7.5, 8.75, 7.875, 8.9375]
    );
    assert_eq!(result.checkups.len(), 1);
    assert_eq!(result.checkups[0].reward, 7.0);
    assert_eq!(result.checkups[0].value, 7.875);
}

#[test]
fn correction_bootstraps_like_a_regular_update() {
    let mut agent = every_third_day(0.5, 0.5);
    let result = agent.run().unwrap();

    // A = 0.5 * 1; B = 0.5 * (1 + 0.5 * 0.5) = 0.625
    // B = 0.625 * 0.5 + 0.5 * (1 + 0.5 * 0.625) = 0.96875
    // B = 0.96875 * 0.5 + 0.5 * (-7 + 0.5 * 0.96875)
    let first = &result.checkups[0];
    assert_eq!(first.action, B);
    assert_eq!(first.reward, -7.0);
    assert!((first.value - -2.7734375).abs() < 1e-12, "got {}", first.value);
}

#[test]
fn daily_checkups_replace_score_with_true_reward() {
    let model = ActionModel::new(vec![Well::new("only", 10.0, -6.0)]).unwrap();
    let mut agent = Agent::new(
        AgentConfig {
            checkup_frequency: 1,
            alpha: 1.0,
            gamma: 0.0,
            max_health: 30.0,
            epsilon: 0.0,
            seed: Some(1),
            ..Default::default()
        },
        model,
    )
    .unwrap();

    let result = agent.run().unwrap();
    assert_eq!(result.days_lived, 5);
    // Every day is a checkup day except the day of death.
    assert_eq!(result.checkups.len(), 4);
    assert!(result.checkups.iter().all(|c| c.delta == -6.0 && c.value == 4.0));
    // Only day 1 learns from the score; every later day follows a checkup.
    assert_eq!(result.trace.unwrap().series(ActionId(0)), vec![10.0, 4.0, 4.0, 4.0, 4.0]);
}

#[test]
fn no_checkup_on_the_day_of_death() {
    let model = ActionModel::new(vec![Well::new("spring", 1.0, 0.0)]).unwrap();
    let mut agent = Agent::new(
        AgentConfig {
            checkup_frequency: 5,
            step_limit: Some(25),
            epsilon: 0.0,
            seed: Some(1),
            ..Default::default()
        },
        model,
    )
    .unwrap();

    let result = agent.run().unwrap();
    let days: Vec<Day> = result.checkups.iter().map(|c| c.day).collect();
    assert_eq!(days, vec![5, 10, 15, 20]);
}

#[test]
fn disabled_checkups_never_fire() {
    let mut agent = Agent::new(
        AgentConfig {
            checkup_frequency: 0,
            max_health: 300.0,
            seed: Some(2),
            ..Default::default()
        },
        ActionModel::default_wells(),
    )
    .unwrap();

    let result = agent.run().unwrap();
    assert!(result.days_lived > 0);
    assert!(result.checkups.is_empty());
}
