//! Structure of canonical formulas.
//!
//! Formulas are stored as canonical text (see [`crate::canon`]).
//! This module finds the main connective of a formula,
//! decomposes formulas at their main connective, and
//! builds compound formulas, parenthesising operands where necessary.

use alloc::{format, string::String};

/// Canonical formula text.
pub type Formula = String;

/// Negation prefix.
pub const NEG: char = '~';

/// Atom standing for an arbitrary formula in guessed premises and
/// in the conclusions of rules that introduce arbitrary subformulas.
pub const PLACEHOLDER: &str = "X";

/// Binary connectives, from loosest to tightest binding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Iff,
    Impl,
    Disj,
    Conj,
}

impl Op {
    pub const ALL: [Op; 4] = [Op::Iff, Op::Impl, Op::Disj, Op::Conj];

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Iff => "<->",
            Op::Impl => "->",
            Op::Disj => "v",
            Op::Conj => "^",
        }
    }
}

/// Strip parentheses that enclose the whole formula.
///
/// The result is the key under which formulas are compared.
///
/// ~~~
/// use natded::form::key;
/// assert_eq!(key("((P^Q))"), "P^Q");
/// assert_eq!(key("(P)->(Q)"), "(P)->(Q)");
/// ~~~
pub fn key(fm: &str) -> &str {
    let mut fm = fm.trim();
    while let Some(inner) = enclosed(fm) {
        fm = inner.trim();
    }
    fm
}

/// Return the contents of `fm` if its first parenthesis closes at its end.
fn enclosed(fm: &str) -> Option<&str> {
    let inner = fm.strip_prefix('(')?.strip_suffix(')')?;
    let mut depth = 0usize;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            _ => (),
        }
    }
    (depth == 0).then(|| inner)
}

/// Do two formulas have the same key?
pub fn same(fm1: &str, fm2: &str) -> bool {
    key(fm1) == key(fm2)
}

/// Find the main connective of a key and its byte position.
///
/// The main connective is the first occurrence outside parentheses
/// of the loosest-binding connective present there.
fn main_op(fm: &str) -> Option<(Op, usize)> {
    let bytes = fm.as_bytes();
    let mut found: [Option<usize>; 4] = [None; 4];
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        let mut width = 1;
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            _ if depth > 0 => (),
            b'<' if fm[i..].starts_with("<->") => {
                found[0].get_or_insert(i);
                width = 3
            }
            b'-' if fm[i..].starts_with("->") => {
                found[1].get_or_insert(i);
                width = 2
            }
            b'v' => {
                found[2].get_or_insert(i);
            }
            b'^' => {
                found[3].get_or_insert(i);
            }
            _ => (),
        }
        i += width;
    }
    let idx = found.iter().position(Option::is_some)?;
    Some((Op::ALL[idx], found[idx]?))
}

/// Split a formula at its main connective if that connective is `op`.
///
/// ~~~
/// use natded::form::{split, Op};
/// assert_eq!(split("P->(Q->R)", Op::Impl), Some(("P", "Q->R")));
/// assert_eq!(split("(P<->Q)", Op::Iff), Some(("P", "Q")));
/// assert_eq!(split("P^Q->R", Op::Conj), None);
/// assert_eq!(split("~(P->Q)", Op::Impl), None);
/// ~~~
pub fn split(fm: &str, op: Op) -> Option<(&str, &str)> {
    let fm = key(fm);
    let (main, pos) = main_op(fm)?;
    if main != op {
        return None;
    }
    let (l, r) = (key(&fm[..pos]), key(&fm[pos + op.symbol().len()..]));
    (!l.is_empty() && !r.is_empty()).then(|| (l, r))
}

/// Return the negated formula if `fm` is a negation.
///
/// ~~~
/// use natded::form::unneg;
/// assert_eq!(unneg("~~P"), Some("~P"));
/// assert_eq!(unneg("~(P^Q)"), Some("P^Q"));
/// assert_eq!(unneg("~P->Q"), None);
/// ~~~
pub fn unneg(fm: &str) -> Option<&str> {
    let fm = key(fm);
    if main_op(fm).is_some() {
        return None;
    }
    let inner = key(fm.strip_prefix(NEG)?);
    (!inner.is_empty()).then(|| inner)
}

/// Parenthesise the key of `fm` if it has a main binary connective.
fn operand(fm: &str) -> String {
    let fm = key(fm);
    if main_op(fm).is_some() {
        format!("({})", fm)
    } else {
        fm.into()
    }
}

/// Negate a formula.
///
/// ~~~
/// use natded::form::neg;
/// assert_eq!(neg("P"), "~P");
/// assert_eq!(neg("(P->Q)"), "~(P->Q)");
/// ~~~
pub fn neg(fm: &str) -> Formula {
    format!("{}{}", NEG, operand(fm))
}

/// Join two formulas with a binary connective.
///
/// ~~~
/// use natded::form::{bin, Op};
/// assert_eq!(bin("~Q", Op::Impl, "~P"), "~Q->~P");
/// assert_eq!(bin("P^Q", Op::Disj, "X"), "(P^Q)vX");
/// ~~~
pub fn bin(l: &str, op: Op, r: &str) -> Formula {
    format!("{}{}{}", operand(l), op.symbol(), operand(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert_eq!(split("P<->Q->R", Op::Iff), Some(("P", "Q->R")));
        assert_eq!(split("PvQ->R", Op::Impl), Some(("PvQ", "R")));
        assert_eq!(split("P^QvR", Op::Disj), Some(("P^Q", "R")));
        assert_eq!(split("~P^Q", Op::Conj), Some(("~P", "Q")));
    }

    #[test]
    fn first_occurrence() {
        assert_eq!(split("P->Q->R", Op::Impl), Some(("P", "Q->R")));
    }

    #[test]
    fn biconditional_is_not_implication() {
        assert_eq!(split("P<->Q", Op::Impl), None);
        assert_eq!(split("(P->Q)<->R", Op::Iff), Some(("P->Q", "R")));
    }

    #[test]
    fn malformed() {
        assert_eq!(split("->Q", Op::Impl), None);
        assert_eq!(unneg("~"), None);
        assert_eq!(key("(P"), "(P");
    }
}
