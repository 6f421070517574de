/// Bounds that guarantee termination of proof search.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    /// maximal nesting of conditional derivations
    pub cd_depth: usize,
    /// saturation passes inside one conditional derivation
    pub stall: usize,
    /// maximal number of lines in the proof log
    pub lines: usize,
    /// saturation passes of the fallback strategy
    pub passes: usize,
    /// maximal recursion depth of the backward prover
    pub goal_depth: usize,
    /// maximal number of characters of goals and derived formulas
    pub formula_len: usize,
    /// rule applications per saturation run
    pub budget: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            cd_depth: 10,
            stall: 100,
            lines: 5000,
            passes: 1000,
            goal_depth: 4,
            formula_len: 48,
            budget: 250_000,
        }
    }
}
