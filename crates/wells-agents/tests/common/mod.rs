//! Shared helpers for the agent integration tests.

use rand::RngCore;
use wells_agents::prelude::*;

/// Replays a fixed script of actions, cycling when it runs out.
pub struct Scripted {
    script: Vec<ActionId>,
    next: usize,
}

impl Scripted {
    pub fn boxed(script: Vec<ActionId>) -> Box<dyn SelectionStrategy> {
        Box::new(Self { script, next: 0 })
    }
}

impl SelectionStrategy for Scripted {
    fn select_action(&mut self, _ctx: &SelectionContext<'_>, _rng: &mut dyn RngCore) -> ActionId {
        let action = self.script[self.next % self.script.len()];
        self.next += 1;
        action
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
