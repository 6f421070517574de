//! Proof search combining conditional derivation, direct derivation,
//! goal-directed backward proving, and forward saturation.
//!
//! A [`Search`] owns the proof log of one problem.
//! [`Search::solve`] seeds the log with the conclusion to be shown
//! and the premises, then tries its strategies in a fixed order,
//! stopping at the first one that succeeds.

mod backward;
mod saturate;
mod subproof;

use crate::proof::{self, Justification, ProofLog};
use crate::scope::Scopes;
use crate::{Failure, Limits, Problem, Rewind, Stats};
use alloc::{string::String, vec::Vec};
use hashbrown::HashSet;
use log::info;

pub struct Search<'p> {
    problem: &'p Problem,
    proof: ProofLog,
    scopes: Scopes,
    /// keys of the formulas asserted during the current saturation run
    seen: HashSet<String>,
    /// keys of the goals attempted by the backward prover
    attempted: HashSet<String>,
    /// keys of the implications attempted by conditional derivation
    derivations: HashSet<String>,
    limits: Limits,
    /// longest formula considered, at least as long as every formula of the problem
    formula_len: usize,
    stats: Stats,
}

#[derive(Copy, Clone, Debug)]
enum Strategy {
    Conditional,
    Direct,
    Backward,
    Saturation,
}

impl Strategy {
    const ORDER: [Self; 4] = [
        Self::Conditional,
        Self::Direct,
        Self::Backward,
        Self::Saturation,
    ];
}

/// State of the proof log and the open subproofs.
#[derive(Copy, Clone)]
struct Checkpoint {
    proof: proof::Ptr,
    depth: usize,
}

impl From<&Search<'_>> for Checkpoint {
    fn from(search: &Search) -> Self {
        Self {
            proof: proof::Ptr::from(&search.proof),
            depth: search.scopes.depth(),
        }
    }
}

impl Rewind<Checkpoint> for Search<'_> {
    fn rewind(&mut self, cp: Checkpoint) {
        self.proof.rewind(cp.proof);
        self.scopes.rewind(cp.depth);
    }
}

impl<'p> Search<'p> {
    pub fn new(problem: &'p Problem, limits: Limits) -> Self {
        let formulas = problem.premises().iter().map(|p| p.as_str());
        let longest = formulas.chain([problem.conclusion()]).map(|fm| fm.chars().count());
        let formula_len = longest.fold(limits.formula_len, usize::max);
        Self {
            problem,
            proof: ProofLog::new(),
            scopes: Scopes::default(),
            seen: HashSet::new(),
            attempted: HashSet::new(),
            derivations: HashSet::new(),
            limits,
            formula_len,
            stats: Stats::default(),
        }
    }

    /// Is the formula short enough to be a goal or a derived line?
    fn fits(&self, fm: &str) -> bool {
        fm.chars().count() <= self.formula_len
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The proof log in its current state.
    ///
    /// After a failed search, this contains the lines derived before giving up.
    pub fn proof(&self) -> &ProofLog {
        &self.proof
    }

    /// Search for a proof of the problem.
    ///
    /// ~~~
    /// use natded::{Limits, Problem, Search};
    /// let problem = Problem::new(["~Q", "P->Q"], "~P");
    /// let mut search = Search::new(&problem, Limits::default());
    /// let proof = search.solve().unwrap();
    /// assert!(proof.to_string().ends_with("~P    :MT 2 3\n"));
    /// ~~~
    pub fn solve(&mut self) -> Result<&ProofLog, Failure> {
        self.reset();
        let problem = self.problem;
        let conclusion = problem.conclusion();
        if conclusion.is_empty() {
            return Err(Failure::PatternMismatch);
        }
        info!("solve {}", problem);
        self.seed();

        // direct derivation never cites premises, so at the top level,
        // where the log holds only the conclusion and the premises, it fails
        for strategy in Strategy::ORDER.iter().copied() {
            let result = match strategy {
                Strategy::Conditional => self.conditional(conclusion, 0),
                Strategy::Direct => self.direct(conclusion),
                Strategy::Backward => self.prove(conclusion, 0).ok_or(Failure::Unprovable),
                Strategy::Saturation => {
                    let passes = self.limits.passes;
                    self.saturate(conclusion, passes, Failure::IterationLimitExceeded)
                }
            };
            match result {
                Ok(line) => {
                    info!("{:?} strategy proved the conclusion at line {}", strategy, line);
                    return Ok(&self.proof);
                }
                Err(failure) => info!("{:?} strategy failed: {}", strategy, failure),
            }
        }
        Err(Failure::Unprovable)
    }

    fn reset(&mut self) {
        self.proof = ProofLog::new();
        self.scopes.clear();
        self.seen.clear();
        self.attempted.clear();
        self.derivations.clear();
        self.stats = Stats::default();
    }

    /// Announce the conclusion and state the premises.
    fn seed(&mut self) {
        let problem = self.problem;
        let show = Justification::Show;
        self.proof.push(problem.conclusion().into(), show, Vec::new(), 0);
        for premise in problem.premises() {
            let pr = Justification::Premise;
            self.proof.push(premise.clone(), pr, Vec::new(), 0);
        }
    }
}
