use super::Search;
use crate::form::{key, same};
use crate::proof::Justification;
use crate::{Combinations, Failure, Rule};
use alloc::{vec, vec::Vec};
use log::debug;

impl<'p> Search<'p> {
    /// Apply every rule to every combination of accessible lines
    /// until `target` is derived, returning the line that asserts it.
    ///
    /// Each pass applies the rules in catalog order to
    /// the lines accessible at the start of the pass.
    /// Where a rule licenses the target, the target is derived directly,
    /// so that rules with arbitrary subformulas (such as ex falso quodlibet)
    /// derive the target instead of the placeholder.
    /// After `passes` passes, fail with `exhausted`.
    pub(super) fn saturate(
        &mut self,
        target: &str,
        passes: usize,
        exhausted: Failure,
    ) -> Result<usize, Failure> {
        self.seen = self.proof.accessible().map(|st| key(&st.expression).into()).collect();
        let mut budget = self.limits.budget;

        for pass in 0..passes {
            debug!("saturation pass {} with {} lines", pass, self.proof.len());
            self.stats.passes += 1;
            let mut progress = false;
            let lines: Vec<usize> = self.proof.accessible().map(|st| st.line).collect();
            for rule in Rule::CATALOG.iter().copied() {
                for combo in Combinations::new(lines.len(), rule.arity()) {
                    budget = budget.checked_sub(1).ok_or(Failure::BudgetExhausted)?;
                    self.stats.applications += 1;
                    let references: Vec<usize> = combo.iter().map(|i| lines[*i]).collect();
                    let premises: Vec<&str> = references.iter().map(|r| self.proof.expression(*r)).collect();
                    // arbitrary subformulas of conclusions are chosen to match the target
                    let conclusions = if rule.licenses(&premises, target) {
                        vec![key(target).into()]
                    } else {
                        rule.conclusions(&premises)
                    };
                    for fm in conclusions {
                        let done = same(&fm, target);
                        if !done && !self.fits(&fm) {
                            continue;
                        }
                        if !self.seen.insert(key(&fm).into()) {
                            continue;
                        }
                        if self.proof.len() >= self.limits.lines {
                            return Err(Failure::LineCountExceeded);
                        }
                        let depth = self.scopes.depth();
                        let just = Justification::Rule(rule);
                        let line = self.proof.push(fm, just, references.clone(), depth);
                        progress = true;
                        if done {
                            return Ok(line);
                        }
                    }
                }
            }
            if !progress {
                return Err(Failure::Saturated);
            }
        }
        Err(exhausted)
    }
}
