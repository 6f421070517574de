//! Proof logs in the style of Kalish–Montague natural deduction.

use crate::canon::beautify;
use crate::form::{same, Formula};
use crate::{Rewind, Rule};
use alloc::{string::String, vec, vec::Vec};
use core::fmt::{self, Display};
use core::ops::Range;
use log::debug;

/// How a subproof is closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Closing {
    /// conditional derivation
    Cd,
    /// direct derivation
    Dd,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Justification {
    /// announcement of a formula to be shown
    Show,
    /// premise of the problem
    Premise,
    /// assumption of a subproof
    Assumption,
    Rule(Rule),
    Close(Closing),
}

impl Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => Ok(()),
            Self::Premise => "PR".fmt(f),
            Self::Assumption => "AS".fmt(f),
            Self::Rule(rule) => rule.fmt(f),
            Self::Close(Closing::Cd) => "CD".fmt(f),
            Self::Close(Closing::Dd) => "DD".fmt(f),
        }
    }
}

/// Line of a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    /// line number, starting from 1
    pub line: usize,
    /// formula of the line, empty for lines closing a subproof
    pub expression: Formula,
    pub justification: Justification,
    /// line numbers of the cited statements
    pub references: Vec<usize>,
    /// nesting depth of subproofs
    pub depth: usize,
}

impl Statement {
    pub fn is_show(&self) -> bool {
        self.justification == Justification::Show
    }

    pub fn is_premise(&self) -> bool {
        self.justification == Justification::Premise
    }

    /// Does the statement assert a formula that later lines may cite?
    pub fn is_asserted(&self) -> bool {
        !self.is_show() && !self.expression.is_empty()
    }
}

/// Violation of proof log well-formedness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    /// line number does not match the position in the log
    Numbering(usize),
    /// reference to a line that does not precede the citing line
    Reference { line: usize, reference: usize },
    /// rule-justified line not licensed by its rule and cited lines
    Unlicensed(usize),
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numbering(line) => write!(f, "line {} is misnumbered", line),
            Self::Reference { line, reference } => {
                write!(f, "line {} cites line {}", line, reference)
            }
            Self::Unlicensed(line) => write!(f, "line {} is not licensed by its rule", line),
        }
    }
}

/// Growable sequence of statements, numbered from 1.
#[derive(Clone, Debug, Default)]
pub struct ProofLog {
    lines: Vec<Statement>,
    /// line numbers of closed subproofs, from `Show` line up to the closing line
    sealed: Vec<Range<usize>>,
}

/// Characterisation of a proof log state, see [`Rewind`].
#[derive(Copy, Clone, Debug)]
pub struct Ptr {
    lines: usize,
    sealed: usize,
}

impl From<&ProofLog> for Ptr {
    fn from(proof: &ProofLog) -> Self {
        Self {
            lines: proof.lines.len(),
            sealed: proof.sealed.len(),
        }
    }
}

impl Rewind<Ptr> for ProofLog {
    fn rewind(&mut self, ptr: Ptr) {
        assert!(self.lines.len() >= ptr.lines);
        assert!(self.sealed.len() >= ptr.sealed);
        self.lines.truncate(ptr.lines);
        self.sealed.truncate(ptr.sealed);
    }
}

impl ProofLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Statement> {
        self.lines.iter()
    }

    /// Return the statement with the given line number.
    pub fn get(&self, line: usize) -> Option<&Statement> {
        self.lines.get(line.checked_sub(1)?)
    }

    /// Formula of an existing line.
    ///
    /// Panics if the line does not exist.
    pub fn expression(&self, line: usize) -> &str {
        &self.lines[line - 1].expression
    }

    /// Append a statement and return its line number.
    pub fn push(
        &mut self,
        expression: Formula,
        justification: Justification,
        references: Vec<usize>,
        depth: usize,
    ) -> usize {
        let line = self.lines.len() + 1;
        debug_assert!(references.iter().all(|r| (1..line).contains(r)));
        debug!("{}. {} :{} {:?}", line, expression, justification, references);
        self.lines.push(Statement {
            line,
            expression,
            justification,
            references,
            depth,
        });
        line
    }

    /// Make the lines of a closed subproof inaccessible.
    pub fn seal(&mut self, lines: Range<usize>) {
        self.sealed.push(lines)
    }

    /// Is the line outside of every closed subproof?
    pub fn is_accessible(&self, line: usize) -> bool {
        !self.sealed.iter().any(|r| r.contains(&line))
    }

    /// Statements that may be cited by new lines.
    pub fn accessible(&self) -> impl Iterator<Item = &Statement> {
        self.lines
            .iter()
            .filter(move |st| st.is_asserted() && self.is_accessible(st.line))
    }

    /// Return the first accessible line that asserts the formula.
    pub fn find(&self, fm: &str) -> Option<usize> {
        let mut accessible = self.accessible();
        Some(accessible.find(|st| same(&st.expression, fm))?.line)
    }

    /// Verify that every reference points to a preceding line and
    /// that every rule-justified line is licensed by its rule.
    pub fn check(&self) -> Result<(), Violation> {
        for (i, st) in self.lines.iter().enumerate() {
            if st.line != i + 1 {
                return Err(Violation::Numbering(st.line));
            }
            let line = st.line;
            if let Some(reference) = st.references.iter().find(|r| !(1..line).contains(*r)) {
                let reference = *reference;
                return Err(Violation::Reference { line, reference });
            }
            if let Justification::Rule(rule) = st.justification {
                let premises: Vec<&str> = st.references.iter().map(|r| self.expression(*r)).collect();
                if !rule.licenses(&premises, &st.expression) {
                    return Err(Violation::Unlicensed(line));
                }
            }
        }
        Ok(())
    }

    /// Return a renumbered log with only the lines that `line` depends on.
    ///
    /// The root line and all premises are always kept.
    /// Keeping a closing line keeps the `Show` and assumption lines
    /// of the subproof it closes.
    pub fn compact(&self, line: usize) -> ProofLog {
        let mut keep = vec![false; self.lines.len() + 1];
        for st in self.lines.iter().filter(|st| st.line == 1 || st.is_premise()) {
            keep[st.line] = true;
        }
        let mut todo = vec![line];
        while let Some(l) = todo.pop() {
            let st = match self.get(l) {
                Some(st) if !keep[l] => st,
                _ => continue,
            };
            keep[l] = true;
            todo.extend(st.references.iter().copied());
            if let Justification::Close(_) = st.justification {
                let opened = self.sealed.iter().find(|r| r.end == l);
                if let Some(show) = opened.map(|r| r.start) {
                    keep[show] = true;
                    keep[show + 1] = true;
                }
            }
        }

        let mut renumber = vec![0; self.lines.len() + 1];
        let mut compact = ProofLog::new();
        for st in self.lines.iter().filter(|st| keep[st.line]) {
            let references = st.references.iter().map(|r| renumber[*r]).collect();
            let expression = st.expression.clone();
            renumber[st.line] = compact.push(expression, st.justification, references, st.depth);
        }
        for r in self.sealed.iter().filter(|r| keep[r.start] && keep[r.end]) {
            compact.seal(renumber[r.start]..renumber[r.end])
        }
        compact
    }

    /// Render the proof, optionally with logical glyphs.
    pub fn display(&self, pretty: bool) -> Disp<'_> {
        Disp {
            proof: self,
            pretty,
        }
    }
}

impl Display for ProofLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display(false).fmt(f)
    }
}

pub struct Disp<'p> {
    proof: &'p ProofLog,
    pretty: bool,
}

impl<'p> Display for Disp<'p> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for st in self.proof.iter() {
            let expression = if self.pretty {
                beautify(&st.expression)
            } else {
                String::from(&st.expression)
            };
            if st.line == 1 {
                writeln!(f, "1. Show: {}", expression)?;
                continue;
            }
            write!(f, "{: <1$}", "", st.depth * 3)?;
            write!(f, "{}.  ", st.line)?;
            if st.is_show() {
                write!(f, "Show: {}", expression)?;
            } else {
                write!(f, "{}    :{}", expression, st.justification)?;
            }
            for r in &st.references {
                write!(f, " {}", r)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn modus_ponens() -> ProofLog {
        let mut proof = ProofLog::new();
        proof.push("Q".into(), Justification::Show, Vec::new(), 0);
        proof.push("P".into(), Justification::Premise, Vec::new(), 0);
        proof.push("P->Q".into(), Justification::Premise, Vec::new(), 0);
        proof.push("Q".into(), Justification::Rule(Rule::Mp), vec![2, 3], 0);
        proof
    }

    #[test]
    fn render() {
        let expected = "1. Show: Q\n2.  P    :PR\n3.  P->Q    :PR\n4.  Q    :MP 2 3\n";
        assert_eq!(modus_ponens().to_string(), expected);
        let pretty = modus_ponens().display(true).to_string();
        assert!(pretty.contains("3.  P→Q    :PR"));
    }

    #[test]
    fn check() {
        let mut proof = modus_ponens();
        assert_eq!(proof.check(), Ok(()));
        proof.push("R".into(), Justification::Rule(Rule::Mp), vec![2, 3], 0);
        assert_eq!(proof.check(), Err(Violation::Unlicensed(5)));
    }

    #[test]
    fn sealed_lines() {
        let mut proof = modus_ponens();
        let show = proof.push("R".into(), Justification::Show, Vec::new(), 1);
        let assumption = proof.push("R".into(), Justification::Assumption, Vec::new(), 1);
        assert_eq!(proof.find("R"), Some(assumption));
        let closing = proof.push(String::new(), Justification::Close(Closing::Dd), vec![6], 0);
        proof.seal(show..closing);
        assert_eq!(proof.find("R"), None);
        assert_eq!(proof.find("(Q)"), Some(4));
    }

    #[test]
    fn rewind() {
        let mut proof = modus_ponens();
        let ptr = Ptr::from(&proof);
        proof.push("R".into(), Justification::Show, Vec::new(), 1);
        proof.seal(5..6);
        proof.rewind(ptr);
        assert_eq!(proof.len(), 4);
        assert!(proof.is_accessible(5));
    }
}
