//! Forward application of rules.

use super::Rule;
use crate::form::{bin, key, neg, same, split, unneg, Formula, Op, PLACEHOLDER};

/// Orders in which the three premises of proof by cases are tried.
const ORDERS: [[usize; 3]; 6] = [
    [0, 1, 2],
    [0, 2, 1],
    [1, 0, 2],
    [1, 2, 0],
    [2, 0, 1],
    [2, 1, 0],
];

/// Try a binary pattern with both orders of its premises.
fn either(a: &str, b: &str, f: impl Fn(&str, &str) -> Option<Formula>) -> Option<Formula> {
    f(a, b).or_else(|| f(b, a))
}

/// Are the two formulas a formula and its negation?
pub fn contradicts(a: &str, b: &str) -> bool {
    let negates = |x: &str, y: &str| unneg(x).map_or(false, |x| same(x, y));
    negates(a, b) || negates(b, a)
}

/// φ, φ → ψ ⊢ ψ
fn mp(phi: &str, imp: &str) -> Option<Formula> {
    let (ant, cons) = split(imp, Op::Impl)?;
    same(ant, phi).then(|| cons.into())
}

/// ¬ψ, φ → ψ ⊢ ¬φ
fn mt(not_psi: &str, imp: &str) -> Option<Formula> {
    let psi = unneg(not_psi)?;
    let (ant, cons) = split(imp, Op::Impl)?;
    same(cons, psi).then(|| neg(ant))
}

/// φ ∨ ψ, ¬φ ⊢ ψ and φ ∨ ψ, ¬ψ ⊢ φ
fn mtp(disj: &str, not: &str) -> Option<Formula> {
    let (l, r) = split(disj, Op::Disj)?;
    let denied = unneg(not)?;
    if same(denied, l) {
        Some(r.into())
    } else if same(denied, r) {
        Some(l.into())
    } else {
        None
    }
}

/// φ ↔ ψ, φ → ψ ⊢ φ → ψ
fn bc(iff: &str, imp: &str) -> Option<Formula> {
    let (l, r) = split(iff, Op::Iff)?;
    let (ant, cons) = split(imp, Op::Impl)?;
    let direction = (same(ant, l) && same(cons, r)) || (same(ant, r) && same(cons, l));
    direction.then(|| key(imp).into())
}

/// φ → ψ, ψ → φ ⊢ φ ↔ ψ
fn cb(imp1: &str, imp2: &str) -> Option<Formula> {
    let (ant1, cons1) = split(imp1, Op::Impl)?;
    let (ant2, cons2) = split(imp2, Op::Impl)?;
    (same(ant1, cons2) && same(cons1, ant2)).then(|| bin(ant1, Op::Iff, cons1))
}

/// ψ → χ, φ → ψ ⊢ φ → χ, in either order of premises
fn hs(imp1: &str, imp2: &str) -> Option<Formula> {
    let (ant1, cons1) = split(imp1, Op::Impl)?;
    let (ant2, cons2) = split(imp2, Op::Impl)?;
    if same(cons2, ant1) {
        Some(bin(ant2, Op::Impl, cons1))
    } else if same(cons1, ant2) {
        Some(bin(ant1, Op::Impl, cons2))
    } else {
        None
    }
}

/// φ → ψ ⊢ ¬ψ → ¬φ
fn cpo(imp: &str) -> Option<Formula> {
    let (ant, cons) = split(imp, Op::Impl)?;
    Some(bin(&neg(cons), Op::Impl, &neg(ant)))
}

/// ¬φ → ¬ψ ⊢ ψ → φ
fn cpt(imp: &str) -> Option<Formula> {
    let (ant, cons) = split(imp, Op::Impl)?;
    Some(bin(unneg(cons)?, Op::Impl, unneg(ant)?))
}

/// ¬φ → ψ, φ → ψ ⊢ ψ
fn dil(neg_imp: &str, imp: &str) -> Option<Formula> {
    let (ant1, cons1) = split(neg_imp, Op::Impl)?;
    let (ant2, cons2) = split(imp, Op::Impl)?;
    (same(unneg(ant1)?, ant2) && same(cons1, cons2)).then(|| cons1.into())
}

/// ¬φ → φ ⊢ φ
fn cm(imp: &str) -> Option<Formula> {
    let (ant, cons) = split(imp, Op::Impl)?;
    same(unneg(ant)?, cons).then(|| cons.into())
}

/// φ → χ, φ ∨ ψ, ψ → χ ⊢ χ
fn pbc(imp1: &str, disj: &str, imp2: &str) -> Option<Formula> {
    let (ant1, cons1) = split(imp1, Op::Impl)?;
    let (ant2, cons2) = split(imp2, Op::Impl)?;
    let (l, r) = split(disj, Op::Disj)?;
    let cases = (same(l, ant1) && same(r, ant2)) || (same(l, ant2) && same(r, ant1));
    (cases && same(cons1, cons2)).then(|| cons1.into())
}

impl Rule {
    /// Apply the rule to premises in the given order.
    ///
    /// Returns `None` if the premises do not match the rule's pattern
    /// or their number differs from the rule's arity.
    ///
    /// ~~~
    /// use natded::Rule;
    /// assert_eq!(Rule::Mp.apply(&["P", "P->Q"]), Some(String::from("Q")));
    /// assert_eq!(Rule::Mp.apply(&["Q", "P->Q"]), None);
    /// assert_eq!(Rule::Cpo.apply(&["P->Q"]), Some(String::from("~Q->~P")));
    /// assert_eq!(Rule::Add.apply(&["P"]), Some(String::from("PvX")));
    /// ~~~
    pub fn apply(self, premises: &[&str]) -> Option<Formula> {
        if premises.len() != self.arity() {
            return None;
        }
        use Rule::*;
        match (self, premises) {
            (Mp, [a, b]) => either(a, b, mp),
            (Mt, [a, b]) => either(a, b, mt),
            (Dne, [fm]) => unneg(unneg(fm)?).map(Formula::from),
            (Dni, [fm]) => Some(neg(&neg(fm))),
            (S, [fm]) => split(fm, Op::Conj).map(|(l, _)| l.into()),
            (Adj, [a, b]) => (!same(a, b)).then(|| bin(a, Op::Conj, b)),
            (Mtp, [a, b]) => either(a, b, mtp),
            (Add, [fm]) => Some(bin(fm, Op::Disj, PLACEHOLDER)),
            (Bc, [a, b]) => either(a, b, bc),
            (Cb, [a, b]) => cb(a, b),
            (Hs, [a, b]) => hs(a, b),
            (Mcc, [fm]) => Some(bin(PLACEHOLDER, Op::Impl, fm)),
            (Mcna, [fm]) => unneg(fm).map(|phi| bin(phi, Op::Impl, PLACEHOLDER)),
            (Cpo, [fm]) => cpo(fm),
            (Cpt, [fm]) => cpt(fm),
            (Dil, [a, b]) => either(a, b, dil),
            (Cm, [fm]) => cm(fm),
            (Efq, [a, b]) => contradicts(a, b).then(|| PLACEHOLDER.into()),
            (Pbc, [a, b, c]) => {
                let ps = [*a, *b, *c];
                ORDERS.iter().find_map(|o| pbc(ps[o[0]], ps[o[1]], ps[o[2]]))
            }
            (Sdmo | Dmo | Dmt | Sdmt | Nc, [fm]) => self.identity()?.apply(fm),
            _ => None,
        }
    }
}
