use crate::canon::normalise;
use crate::form::Formula;
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// Premises and a conclusion, in canonical form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    premises: Vec<Formula>,
    conclusion: Formula,
}

impl Problem {
    /// Normalise premises and conclusion, dropping empty premises.
    ///
    /// ~~~
    /// use natded::Problem;
    /// let problem = Problem::new(["P", " ", "P => Q"], "Q");
    /// assert_eq!(problem.premises(), ["P", "P->Q"]);
    /// assert_eq!(problem.to_string(), "P, P->Q ⊢ Q");
    /// ~~~
    pub fn new<S: AsRef<str>>(premises: impl IntoIterator<Item = S>, conclusion: &str) -> Self {
        let premises = premises.into_iter().map(|p| normalise(p.as_ref()));
        Self {
            premises: premises.filter(|p| !p.is_empty()).collect(),
            conclusion: normalise(conclusion),
        }
    }

    pub fn premises(&self) -> &[Formula] {
        &self.premises
    }

    pub fn conclusion(&self) -> &str {
        &self.conclusion
    }
}

impl Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut premises = self.premises.iter();
        if let Some(first) = premises.next() {
            write!(f, "{}", first)?;
            premises.try_for_each(|p| write!(f, ", {}", p))?;
            write!(f, " ")?;
        }
        write!(f, "⊢ {}", self.conclusion)
    }
}
