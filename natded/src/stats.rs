#[cfg(feature = "serde")]
use serde::Serialize;

/// Search statistics.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// goals expanded by the backward prover
    pub goals: usize,
    /// goals rejected because they were already attempted
    pub cycles: usize,
    /// proved premise tuples that did not license their goal
    pub unlicensed: usize,
    /// rule applications during saturation
    pub applications: usize,
    /// saturation passes
    pub passes: usize,
    /// conditional derivations started
    pub cd_attempts: usize,
    /// conditional derivations abandoned and rewound
    pub abandoned: usize,
}
