//! Backward guessing of premises.

use super::Rule;
use crate::form::{bin, key, neg, same, split, unneg, Formula, Op, PLACEHOLDER};
use alloc::{vec, vec::Vec};

impl Rule {
    /// Propose premise tuples from which the rule might derive `goal`.
    ///
    /// Guesses may contain the placeholder atom where the rule
    /// leaves a premise undetermined, so a guess is not guaranteed to
    /// license the goal; see [`Rule::licenses`].
    ///
    /// ~~~
    /// use natded::Rule;
    /// assert_eq!(Rule::Mp.guess("Q"), vec![vec!["X", "X->Q"]]);
    /// assert_eq!(Rule::Cb.guess("P<->Q"), vec![vec!["P->Q", "Q->P"]]);
    /// assert!(Rule::Hs.guess("P->R").is_empty());
    /// ~~~
    pub fn guess(self, goal: &str) -> Vec<Vec<Formula>> {
        let g = key(goal);
        let x = PLACEHOLDER;
        let one = |fm: Formula| vec![vec![fm]];
        use Rule::*;
        match self {
            Mp if g == x => Vec::new(),
            Mp => vec![vec![x.into(), bin(x, Op::Impl, g)]],
            Mt => unneg(g).map_or_else(Vec::new, |phi| {
                vec![vec![neg(x), bin(phi, Op::Impl, x)]]
            }),
            Dne => one(neg(&neg(g))),
            Dni => unneg(g)
                .and_then(unneg)
                .map_or_else(Vec::new, |phi| one(phi.into())),
            S => vec![vec![bin(g, Op::Conj, x)], vec![bin(x, Op::Conj, g)]],
            Adj => match split(g, Op::Conj) {
                Some((l, r)) if !same(l, r) => vec![vec![l.into(), r.into()]],
                _ => Vec::new(),
            },
            Mtp => vec![
                vec![bin(x, Op::Disj, g), neg(x)],
                vec![bin(g, Op::Disj, x), neg(x)],
            ],
            Add => split(g, Op::Disj).map_or_else(Vec::new, |(l, _)| one(l.into())),
            Bc => split(g, Op::Impl).map_or_else(Vec::new, |(ant, cons)| {
                vec![
                    vec![bin(ant, Op::Iff, cons), g.into()],
                    vec![bin(cons, Op::Iff, ant), g.into()],
                ]
            }),
            Cb => split(g, Op::Iff).map_or_else(Vec::new, |(l, r)| {
                vec![vec![bin(l, Op::Impl, r), bin(r, Op::Impl, l)]]
            }),
            Hs | Pbc => Vec::new(),
            Mcc => split(g, Op::Impl).map_or_else(Vec::new, |(_, cons)| one(cons.into())),
            Mcna => split(g, Op::Impl).map_or_else(Vec::new, |(ant, _)| one(neg(ant))),
            Cpo => match split(g, Op::Impl) {
                Some((ant, cons)) => match (unneg(ant), unneg(cons)) {
                    (Some(psi), Some(phi)) => one(bin(phi, Op::Impl, psi)),
                    _ => Vec::new(),
                },
                None => Vec::new(),
            },
            Cpt => split(g, Op::Impl).map_or_else(Vec::new, |(ant, cons)| {
                one(bin(&neg(cons), Op::Impl, &neg(ant)))
            }),
            Dil => vec![vec![bin(&neg(x), Op::Impl, g), bin(x, Op::Impl, g)]],
            Cm => one(bin(&neg(g), Op::Impl, g)),
            Efq => vec![vec![g.into(), neg(g)], vec![neg(g), g.into()]],
            Sdmo | Dmo | Dmt | Sdmt | Nc => self
                .identity()
                .and_then(|id| id.counterpart(g))
                .map_or_else(Vec::new, one),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_license_goal() {
        let goals = ["~P", "P^Q", "PvQ", "P->Q", "~Q->~P", "~(PvQ)", "P^~Q"];
        for rule in Rule::CATALOG {
            for goal in goals {
                for tuple in rule.guess(goal) {
                    if tuple.iter().any(|fm| fm.contains(PLACEHOLDER)) {
                        continue;
                    }
                    let premises: Vec<&str> = tuple.iter().map(|fm| fm.as_str()).collect();
                    assert!(rule.licenses(&premises, goal), "{} {}", rule, goal);
                }
            }
        }
    }

    #[test]
    fn contraposition() {
        assert_eq!(Rule::Cpo.guess("~Q->~P"), vec![vec!["P->Q"]]);
        assert_eq!(Rule::Cpt.guess("P->Q"), vec![vec!["~Q->~P"]]);
        assert!(Rule::Cpo.guess("P->Q").is_empty());
    }
}
