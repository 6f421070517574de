//! De Morgan and negated-conditional identities.
//!
//! Each identity relates two formula shapes with the same parameters φ and ψ.
//! A rule built on an identity converts an instance of one side
//! into the corresponding instance of the other side.

use crate::form::{bin, key, neg, same, split, unneg, Formula, Op};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    /// (φ ∧ ψ) ↔ ¬(¬φ ∨ ¬ψ)
    Sdmo,
    /// ¬(φ ∨ ψ) ↔ (¬φ ∧ ¬ψ)
    Dmo,
    /// ¬(φ ∧ ψ) ↔ (¬φ ∨ ¬ψ)
    Dmt,
    /// (φ ∨ ψ) ↔ ¬(¬φ ∧ ¬ψ)
    Sdmt,
    /// ¬(φ → ψ) ↔ (φ ∧ ¬ψ)
    Nc,
}

/// Decompose `fm` as `φ op ψ` and strip negations from both sides.
fn split_negs(fm: &str, op: Op) -> Option<(&str, &str)> {
    let (l, r) = split(fm, op)?;
    Some((unneg(l)?, unneg(r)?))
}

impl Identity {
    fn match_left(self, fm: &str) -> Option<(&str, &str)> {
        match self {
            Self::Sdmo => split(fm, Op::Conj),
            Self::Dmo => split(unneg(fm)?, Op::Disj),
            Self::Dmt => split(unneg(fm)?, Op::Conj),
            Self::Sdmt => split(fm, Op::Disj),
            Self::Nc => split(unneg(fm)?, Op::Impl),
        }
    }

    fn match_right(self, fm: &str) -> Option<(&str, &str)> {
        match self {
            Self::Sdmo => split_negs(unneg(fm)?, Op::Disj),
            Self::Dmo => split_negs(fm, Op::Conj),
            Self::Dmt => split_negs(fm, Op::Disj),
            Self::Sdmt => split_negs(unneg(fm)?, Op::Conj),
            Self::Nc => {
                let (phi, not_psi) = split(fm, Op::Conj)?;
                Some((phi, unneg(not_psi)?))
            }
        }
    }

    fn left(self, phi: &str, psi: &str) -> Formula {
        match self {
            Self::Sdmo => bin(phi, Op::Conj, psi),
            Self::Dmo => neg(&bin(phi, Op::Disj, psi)),
            Self::Dmt => neg(&bin(phi, Op::Conj, psi)),
            Self::Sdmt => bin(phi, Op::Disj, psi),
            Self::Nc => neg(&bin(phi, Op::Impl, psi)),
        }
    }

    fn right(self, phi: &str, psi: &str) -> Formula {
        match self {
            Self::Sdmo => neg(&bin(&neg(phi), Op::Disj, &neg(psi))),
            Self::Dmo => bin(&neg(phi), Op::Conj, &neg(psi)),
            Self::Dmt => bin(&neg(phi), Op::Disj, &neg(psi)),
            Self::Sdmt => neg(&bin(&neg(phi), Op::Conj, &neg(psi))),
            Self::Nc => bin(phi, Op::Conj, &neg(psi)),
        }
    }

    /// Convert an instance of one side into the other side.
    ///
    /// ~~~
    /// use natded::rule::Identity;
    /// assert_eq!(Identity::Dmo.counterpart("~(PvQ)"), Some(String::from("~P^~Q")));
    /// assert_eq!(Identity::Dmo.counterpart("~P^~Q"), Some(String::from("~(PvQ)")));
    /// assert_eq!(Identity::Nc.counterpart("P^~Q"), Some(String::from("~(P->Q)")));
    /// assert_eq!(Identity::Dmo.counterpart("PvQ"), None);
    /// ~~~
    pub fn counterpart(self, fm: &str) -> Option<Formula> {
        if let Some((phi, psi)) = self.match_left(fm) {
            return Some(self.right(phi, psi));
        }
        let (phi, psi) = self.match_right(fm)?;
        Some(self.left(phi, psi))
    }

    /// Is `fm` a biconditional between the two sides of the identity?
    pub fn instance(self, fm: &str) -> bool {
        let pairs = |l: &str, r: &str| {
            self.match_left(l)
                .map_or(false, |(phi, psi)| same(&self.right(phi, psi), r))
        };
        split(fm, Op::Iff).map_or(false, |(l, r)| pairs(l, r) || pairs(r, l))
    }

    /// Return `fm` if it is an instance of the identity, else its counterpart.
    pub fn apply(self, fm: &str) -> Option<Formula> {
        if self.instance(fm) {
            Some(key(fm).into())
        } else {
            self.counterpart(fm)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances() {
        assert!(Identity::Sdmo.instance("(P^Q)<->~(~Pv~Q)"));
        assert!(Identity::Dmo.instance("~(PvQ)<->(~P^~Q)"));
        assert!(Identity::Dmt.instance("(~Pv~Q)<->~(P^Q)"));
        assert!(Identity::Sdmt.instance("(PvQ)<->~(~P^~Q)"));
        assert!(Identity::Nc.instance("~(P->Q)<->(P^~Q)"));
        assert!(!Identity::Nc.instance("~(P->Q)<->(P^Q)"));
    }

    #[test]
    fn involutive() {
        for (id, fm) in [
            (Identity::Sdmo, "(P->Q)^R"),
            (Identity::Dmt, "~(P^~Q)"),
            (Identity::Sdmt, "~(~P^~Q)"),
        ] {
            let other = id.counterpart(fm).unwrap();
            assert_eq!(id.counterpart(&other).as_deref(), Some(key(fm)));
        }
    }
}
