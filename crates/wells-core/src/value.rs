//! Value table - per-action value estimates.
//!
//! Holds one running estimate per action and applies the tabular
//! temporal-difference rule:
//!
//! ```text
//! Q[a] <- Q[a] * (1 - alpha) + alpha * (reward + gamma * max_b Q[b])
//! ```
//!
//! After death there is no successor state, so the terminal update drops
//! the bootstrap term:
//!
//! ```text
//! Q[a] <- Q[a] * (1 - alpha) + alpha * reward
//! ```
//!
//! Every action of the model has an explicit entry from construction on.
//! Ties for the maximum always resolve to the lowest action identifier.

use crate::error::{check_unit, ConfigError, Result, WellsError};
use crate::model::ActionModel;
use crate::types::ActionId;
use serde::Serialize;

/// Learned value estimates, one per action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueTable {
    alpha: f64,
    gamma: f64,
    /// Indexed by `ActionId`.
    values: Vec<f64>,
}

impl ValueTable {
    /// Create a table with `action_count` zero-valued entries.
    ///
    /// `alpha` (learning rate) and `gamma` (discount) must lie in `[0, 1]`.
    pub fn new(action_count: usize, alpha: f64, gamma: f64) -> Result<Self> {
        check_unit("alpha", alpha)?;
        check_unit("gamma", gamma)?;
        if action_count == 0 {
            return Err(ConfigError::EmptyActionModel.into());
        }
        Ok(Self {
            alpha,
            gamma,
            values: vec![0.0; action_count],
        })
    }

    /// Create a table covering every action of `model`.
    pub fn for_model(model: &ActionModel, alpha: f64, gamma: f64) -> Result<Self> {
        Self::new(model.len(), alpha, gamma)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Number of actions covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Current estimate for `action`.
    pub fn read(&self, action: ActionId) -> Result<f64> {
        self.values
            .get(action.index())
            .copied()
            .ok_or(WellsError::UnknownAction(action))
    }

    /// Bootstrapped update toward `reward + gamma * best value`.
    ///
    /// The best value is taken over the table as it stands before the
    /// update, including the entry being updated.
    pub fn update(&mut self, action: ActionId, reward: f64) -> Result<f64> {
        let (_, best) = self.best_action();
        let target = reward + self.gamma * best;
        self.blend(action, target)
    }

    /// Terminal update toward `reward`, with no bootstrap term.
    pub fn update_terminal(&mut self, action: ActionId, reward: f64) -> Result<f64> {
        self.blend(action, reward)
    }

    fn blend(&mut self, action: ActionId, target: f64) -> Result<f64> {
        let alpha = self.alpha;
        let slot = self
            .values
            .get_mut(action.index())
            .ok_or(WellsError::UnknownAction(action))?;
        *slot = *slot * (1.0 - alpha) + alpha * target;
        Ok(*slot)
    }

    /// The action with the highest estimate, and that estimate.
    ///
    /// Ties resolve to the lowest action identifier.
    pub fn best_action(&self) -> (ActionId, f64) {
        let mut best = (ActionId(0), self.values[0]);
        for (index, &value) in self.values.iter().enumerate().skip(1) {
            if value > best.1 {
                best = (ActionId(index), value);
            }
        }
        best
    }

    /// Set every estimate back to zero.
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|v| *v = 0.0);
    }

    /// Overwrite one estimate (seeding tables in experiments and tests).
    pub fn set(&mut self, action: ActionId, value: f64) -> Result<()> {
        let slot = self
            .values
            .get_mut(action.index())
            .ok_or(WellsError::UnknownAction(action))?;
        *slot = value;
        Ok(())
    }

    /// All estimates in action order.
    pub fn snapshot(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Iterate over `(action, estimate)` pairs in action order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (ActionId(i), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ActionId = ActionId(0);
    const B: ActionId = ActionId(1);

    fn table(alpha: f64, gamma: f64) -> ValueTable {
        ValueTable::new(2, alpha, gamma).unwrap()
    }

    #[test]
    fn starts_at_zero_for_every_action() {
        let t = table(0.5, 0.5);
        assert_eq!(t.read(A).unwrap(), 0.0);
        assert_eq!(t.read(B).unwrap(), 0.0);
    }

    #[test]
    fn update_bootstraps_from_best_value() {
        let mut t = table(0.5, 0.5);
        t.set(B, 4.0).unwrap();
        // 0 * 0.5 + 0.5 * (10 + 0.5 * 4)
        let v = t.update(A, 10.0).unwrap();
        assert!((v - 6.0).abs() < 1e-12);
    }

    #[test]
    fn update_recomputes_best_every_call() {
        let mut t = table(0.5, 1.0);
        t.update(A, 10.0).unwrap(); // A = 5
        let v = t.update(B, 0.0).unwrap(); // B = 0.5 * (0 + 5)
        assert!((v - 2.5).abs() < 1e-12);
    }

    #[test]
    fn terminal_update_has_no_bootstrap_term() {
        let mut t = table(0.2, 0.9);
        t.set(A, 3.0).unwrap();
        t.set(B, 1000.0).unwrap();
        let v = t.update_terminal(A, -100.0).unwrap();
        assert!((v - (3.0 * 0.8 + 0.2 * -100.0)).abs() < 1e-12);
    }

    #[test]
    fn ties_break_to_lowest_identifier() {
        let t = table(0.5, 0.5);
        assert_eq!(t.best_action(), (A, 0.0));

        let mut t = ValueTable::new(3, 0.5, 0.5).unwrap();
        t.set(ActionId(1), 2.0).unwrap();
        t.set(ActionId(2), 2.0).unwrap();
        assert_eq!(t.best_action(), (ActionId(1), 2.0));
    }

    #[test]
    fn rejects_parameters_outside_unit_interval() {
        assert!(ValueTable::new(2, 1.5, 0.5).is_err());
        assert!(ValueTable::new(2, 0.5, -0.1).is_err());
        assert!(ValueTable::new(2, 0.0, 1.0).is_ok());
    }

    #[test]
    fn unknown_action_is_an_error() {
        let mut t = table(0.5, 0.5);
        assert_eq!(t.read(ActionId(2)), Err(WellsError::UnknownAction(ActionId(2))));
        assert!(t.update(ActionId(2), 1.0).is_err());
        assert!(t.update_terminal(ActionId(2), 1.0).is_err());
    }

    #[test]
    fn values_stay_finite_under_long_bounded_sequences() {
        for &(alpha, gamma) in &[(0.0, 0.0), (1.0, 1.0), (0.2, 0.8), (1.0, 0.0), (0.5, 1.0)] {
            let mut t = table(alpha, gamma);
            for step in 0..10_000u32 {
                let action = if step % 3 == 0 { A } else { B };
                let reward = if step % 7 == 0 { -100.0 } else { 10.0 };
                if step % 50 == 0 {
                    t.update_terminal(action, reward).unwrap();
                } else {
                    t.update(action, reward).unwrap();
                }
            }
            assert!(t.iter().all(|(_, v)| v.is_finite()), "alpha={alpha} gamma={gamma}");
        }
    }

    #[test]
    fn reset_zeroes_every_entry() {
        let mut t = table(0.5, 0.5);
        t.update(A, 10.0).unwrap();
        t.update(B, 3.0).unwrap();
        t.reset();
        assert_eq!(t.snapshot(), vec![0.0, 0.0]);
    }
}
