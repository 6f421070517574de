use super::Search;
use crate::form::{key, Formula};
use crate::proof::Justification;
use crate::Rule;
use alloc::vec::Vec;
use log::debug;

impl<'p> Search<'p> {
    /// Prove a goal backwards, returning the line that asserts it.
    ///
    /// For every rule, guess premise tuples for the goal and
    /// prove their elements from left to right.
    /// The first tuple whose elements are all proved and
    /// that licenses the goal justifies a new line for the goal.
    pub(super) fn prove(&mut self, goal: &str, depth: usize) -> Option<usize> {
        let goal = key(goal);
        if goal.is_empty() {
            return None;
        }
        if let Some(line) = self.proof.find(goal) {
            return Some(line);
        }
        if depth >= self.limits.goal_depth || !self.fits(goal) {
            return None;
        }
        if !self.attempted.insert(goal.into()) {
            debug!("cycle: {}", goal);
            self.stats.cycles += 1;
            return None;
        }
        debug!("goal (depth {}): {}", depth, goal);
        self.stats.goals += 1;

        for rule in Rule::CATALOG.iter().copied() {
            for tuple in rule.guess(goal) {
                if let Some(line) = self.discharge(rule, goal, &tuple, depth) {
                    return Some(line);
                }
            }
        }
        None
    }

    /// Prove all premises of a guessed tuple and derive the goal from them.
    fn discharge(&mut self, rule: Rule, goal: &str, tuple: &[Formula], depth: usize) -> Option<usize> {
        let mut references = Vec::with_capacity(tuple.len());
        for premise in tuple {
            references.push(self.prove(premise, depth + 1)?);
        }
        let premises: Vec<&str> = references.iter().map(|r| self.proof.expression(*r)).collect();
        if !rule.licenses(&premises, goal) {
            debug!("{} does not license {} from {:?}", rule, goal, premises);
            self.stats.unlicensed += 1;
            return None;
        }
        debug!("{} proves {} from {:?}", rule, goal, references);
        let depth = self.scopes.depth();
        let just = Justification::Rule(rule);
        Some(self.proof.push(goal.into(), just, references, depth))
    }
}
