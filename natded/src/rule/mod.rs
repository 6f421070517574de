//! Inference rules of the natural-deduction calculus.
//!
//! Every rule can be used in two directions:
//! forward, deriving a conclusion from premises ([`Rule::apply`]),
//! and backward, guessing premises for a goal ([`Rule::guess`]).
//! Backward guesses are only committed to a proof if
//! [`Rule::licenses`] confirms that the premises really yield the goal.

mod apply;
mod guess;
mod identity;

pub use apply::contradicts;
pub use identity::Identity;

use crate::form::{same, split, unneg, Formula, Op};
use alloc::{vec, vec::Vec};
use core::fmt::{self, Display};
use core::str::FromStr;

/// Inference rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// modus ponens
    Mp,
    /// modus tollens
    Mt,
    /// double negation elimination
    Dne,
    /// double negation introduction
    Dni,
    /// simplification
    S,
    /// adjunction
    Adj,
    /// modus tollendo ponens
    Mtp,
    /// addition
    Add,
    /// biconditional to conditional
    Bc,
    /// conditionals to biconditional
    Cb,
    /// hypothetical syllogism
    Hs,
    /// conditional with true consequent
    Mcc,
    /// conditional with false antecedent
    Mcna,
    /// contraposition
    Cpo,
    /// transposition
    Cpt,
    /// dilemma
    Dil,
    /// consequentia mirabilis
    Cm,
    /// ex falso quodlibet
    Efq,
    /// conjunction as negated disjunction
    Sdmo,
    /// negated disjunction as conjunction
    Dmo,
    /// negated conjunction as disjunction
    Dmt,
    /// disjunction as negated conjunction
    Sdmt,
    /// proof by cases
    Pbc,
    /// negated conditional
    Nc,
}

impl Rule {
    /// All rules, in the order in which they are tried.
    pub const CATALOG: [Rule; 24] = [
        Rule::Mp,
        Rule::Mt,
        Rule::Dne,
        Rule::Dni,
        Rule::S,
        Rule::Adj,
        Rule::Mtp,
        Rule::Add,
        Rule::Bc,
        Rule::Cb,
        Rule::Hs,
        Rule::Mcc,
        Rule::Mcna,
        Rule::Cpo,
        Rule::Cpt,
        Rule::Dil,
        Rule::Cm,
        Rule::Efq,
        Rule::Sdmo,
        Rule::Dmo,
        Rule::Dmt,
        Rule::Sdmt,
        Rule::Pbc,
        Rule::Nc,
    ];

    /// Name of the rule as it appears in justifications.
    pub fn name(self) -> &'static str {
        use Rule::*;
        match self {
            Mp => "MP",
            Mt => "MT",
            Dne => "DNE",
            Dni => "DNI",
            S => "S",
            Adj => "ADJ",
            Mtp => "MTP",
            Add => "ADD",
            Bc => "BC",
            Cb => "CB",
            Hs => "D-HS",
            Mcc => "D-MCC",
            Mcna => "D-MCNA",
            Cpo => "D-CPO",
            Cpt => "D-CPT",
            Dil => "D-DIL",
            Cm => "D-CM",
            Efq => "D-EFQ",
            Sdmo => "D-SDMO",
            Dmo => "D-DMO",
            Dmt => "D-DMT",
            Sdmt => "D-SDMT",
            Pbc => "D-PBC",
            Nc => "D-NC",
        }
    }

    /// Number of premises.
    pub fn arity(self) -> usize {
        use Rule::*;
        match self {
            Mp | Mt | Adj | Mtp | Bc | Cb | Hs | Dil | Efq => 2,
            Pbc => 3,
            _ => 1,
        }
    }

    /// Identity underlying the rule, if any.
    fn identity(self) -> Option<Identity> {
        match self {
            Rule::Sdmo => Some(Identity::Sdmo),
            Rule::Dmo => Some(Identity::Dmo),
            Rule::Dmt => Some(Identity::Dmt),
            Rule::Sdmt => Some(Identity::Sdmt),
            Rule::Nc => Some(Identity::Nc),
            _ => None,
        }
    }

    /// All conclusions that forward application yields.
    ///
    /// This coincides with [`Rule::apply`] except for simplification,
    /// which yields both conjuncts.
    ///
    /// ~~~
    /// use natded::Rule;
    /// assert_eq!(Rule::S.conclusions(&["P^(QvR)"]), vec!["P", "QvR"]);
    /// assert_eq!(Rule::Mp.conclusions(&["P", "P->Q"]), vec!["Q"]);
    /// assert!(Rule::Mt.conclusions(&["P", "P->Q"]).is_empty());
    /// ~~~
    pub fn conclusions(self, premises: &[&str]) -> Vec<Formula> {
        match (self, premises) {
            (Rule::S, [fm]) => match split(fm, Op::Conj) {
                Some((l, r)) => vec![l.into(), r.into()],
                None => Vec::new(),
            },
            _ => self.apply(premises).into_iter().collect(),
        }
    }

    /// Do the premises, in the given order, yield `goal` by this rule?
    ///
    /// For rules whose conclusion contains an arbitrary subformula
    /// (addition, conditionals with true consequent or false antecedent,
    /// and ex falso quodlibet), any choice of that subformula is licensed.
    ///
    /// ~~~
    /// use natded::Rule;
    /// assert!(Rule::Add.licenses(&["P"], "Pv(Q^R)"));
    /// assert!(Rule::Efq.licenses(&["P", "~P"], "Q"));
    /// assert!(Rule::S.licenses(&["P^Q"], "Q"));
    /// assert!(!Rule::Mp.licenses(&["Q", "P->Q"], "P"));
    /// ~~~
    pub fn licenses(self, premises: &[&str], goal: &str) -> bool {
        if premises.len() != self.arity() {
            return false;
        }
        match (self, premises) {
            (Rule::Add, [fm]) => split(goal, Op::Disj).map_or(false, |(l, _)| same(l, fm)),
            (Rule::Mcc, [fm]) => split(goal, Op::Impl).map_or(false, |(_, cons)| same(cons, fm)),
            (Rule::Mcna, [fm]) => match (unneg(fm), split(goal, Op::Impl)) {
                (Some(phi), Some((ant, _))) => same(phi, ant),
                _ => false,
            },
            (Rule::Efq, [a, b]) => contradicts(a, b),
            _ => self.conclusions(premises).iter().any(|c| same(c, goal)),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

/// Unknown rule name.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownRule;

impl FromStr for Rule {
    type Err = UnknownRule;

    /// Look up a rule by its name.
    ///
    /// ~~~
    /// use natded::Rule;
    /// assert_eq!("D-HS".parse::<Rule>(), Ok(Rule::Hs));
    /// assert!("HS".parse::<Rule>().is_err());
    /// ~~~
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CATALOG
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or(UnknownRule)
    }
}
