use super::{Checkpoint, Search};
use crate::form::{same, split, Op};
use crate::proof::{Closing, Justification};
use crate::{Failure, Rewind};
use alloc::{string::String, vec, vec::Vec};
use log::{debug, warn};

impl<'p> Search<'p> {
    /// Open a subproof that assumes `fm`, returning the line of its `Show`.
    fn start_subproof(&mut self, fm: &str) -> usize {
        let depth = self.scopes.depth() + 1;
        let show = self.proof.push(fm.into(), Justification::Show, Vec::new(), depth);
        self.scopes.push(show);
        let assume = Justification::Assumption;
        self.proof.push(fm.into(), assume, Vec::new(), depth);
        show
    }

    /// Close the innermost subproof, returning its closing line.
    ///
    /// The lines of the subproof become inaccessible.
    fn end_subproof(&mut self, closing: Closing, references: Vec<usize>) -> usize {
        let depth = self.scopes.depth().saturating_sub(1);
        let just = Justification::Close(closing);
        let line = self.proof.push(String::new(), just, references, depth);
        if let Some(show) = self.scopes.pop() {
            self.proof.seal(show..line);
        }
        line
    }

    /// Close the innermost subproof by citing a derived line that asserts `goal`.
    pub(super) fn direct(&mut self, goal: &str) -> Result<usize, Failure> {
        let line = {
            let mut candidates = self.proof.accessible().filter(|st| !st.is_premise());
            let found = candidates.find(|st| same(&st.expression, goal));
            found.ok_or(Failure::PatternMismatch)?.line
        };
        Ok(self.end_subproof(Closing::Dd, vec![line]))
    }

    /// Derive an implication by assuming its antecedent and
    /// deriving its consequent, returning the line of the implication.
    ///
    /// If the consequent cannot be derived,
    /// the lines of the attempt are removed from the proof.
    pub(super) fn conditional(&mut self, implication: &str, depth: usize) -> Result<usize, Failure> {
        let (antecedent, consequent) = split(implication, Op::Impl).ok_or(Failure::PatternMismatch)?;
        if depth >= self.limits.cd_depth {
            return Err(Failure::RecursionLimitExceeded);
        }
        if !self.derivations.insert(implication.into()) {
            return Err(Failure::AlreadyAttempted);
        }
        if self.proof.len() + 3 > self.limits.lines {
            return Err(Failure::LineCountExceeded);
        }
        debug!("conditional derivation (depth {}): {}", depth, implication);
        self.stats.cd_attempts += 1;

        let checkpoint = Checkpoint::from(&*self);
        self.start_subproof(antecedent);
        match self.derive(consequent, depth) {
            Ok(closing) => {
                let depth = self.scopes.depth();
                let just = Justification::Close(Closing::Cd);
                Ok(self.proof.push(implication.into(), just, vec![closing], depth))
            }
            Err(failure) => {
                warn!("abandon conditional derivation of {}: {}", implication, failure);
                self.stats.abandoned += 1;
                self.rewind(checkpoint);
                Err(failure)
            }
        }
    }

    /// Derive `consequent` in the innermost subproof and close it.
    fn derive(&mut self, consequent: &str, depth: usize) -> Result<usize, Failure> {
        if let Ok(closing) = self.direct(consequent) {
            return Ok(closing);
        }
        if split(consequent, Op::Impl).is_some() {
            match self.conditional(consequent, depth + 1) {
                Ok(line) => return Ok(self.end_subproof(Closing::Dd, vec![line])),
                Err(failure) => debug!("nested conditional derivation failed: {}", failure),
            }
        }
        let stall = self.limits.stall;
        let line = self.saturate(consequent, stall, Failure::StallLimitExceeded)?;
        Ok(self.end_subproof(Closing::Dd, vec![line]))
    }
}
