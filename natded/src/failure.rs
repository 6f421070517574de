use core::fmt::{self, Display};

/// Reason why a proof strategy did not succeed.
///
/// Failures are recovered by trying the next strategy;
/// only [`Failure::Unprovable`] is reported when all strategies fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    /// the formula does not have the shape the strategy requires
    PatternMismatch,
    /// the goal is already being attempted
    CycleDetected,
    /// conditional derivations are nested too deeply
    RecursionLimitExceeded,
    /// saturation inside a conditional derivation did not reach its target
    StallLimitExceeded,
    /// the proof log has reached its maximal length
    LineCountExceeded,
    /// fallback saturation did not reach its target
    IterationLimitExceeded,
    /// a saturation run has used up its rule applications
    BudgetExhausted,
    /// the conditional derivation has already been attempted
    AlreadyAttempted,
    /// a saturation pass derived nothing new
    Saturated,
    /// no strategy found a proof
    Unprovable,
}

impl Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Failure::*;
        let msg = match self {
            PatternMismatch => "pattern mismatch",
            CycleDetected => "cycle detected",
            RecursionLimitExceeded => "recursion limit exceeded",
            StallLimitExceeded => "stall limit exceeded",
            LineCountExceeded => "line count exceeded",
            IterationLimitExceeded => "iteration limit exceeded",
            BudgetExhausted => "budget exhausted",
            AlreadyAttempted => "already attempted",
            Saturated => "saturated",
            Unprovable => "unprovable",
        };
        msg.fmt(f)
    }
}
