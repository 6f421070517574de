use core::fmt::{self, Display};
use natded::Failure;

/// Reason why the prover did not succeed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    /// reading or writing a file failed
    OsError,
    /// a problem could not be read
    InputError,
    /// proof search did not find a proof
    NoProof,
    /// a found proof failed the soundness check
    Unsound,
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OsError => "OS error".fmt(f),
            Self::InputError => "input error".fmt(f),
            Self::NoProof => "no proof".fmt(f),
            Self::Unsound => "unsound proof".fmt(f),
        }
    }
}

#[derive(Debug)]
pub struct Error(Kind, Option<Box<dyn std::error::Error>>);

impl Error {
    pub fn new(k: Kind, e: Box<dyn std::error::Error>) -> Self {
        Self(k, Some(e))
    }

    pub fn get_kind(&self) -> Kind {
        self.0
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)?;
        match &self.1 {
            Some(e) => write!(f, ": {}", e),
            None => Ok(()),
        }
    }
}

impl From<Kind> for Error {
    fn from(k: Kind) -> Self {
        Self(k, None)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(Kind::OsError, e.into())
    }
}

impl From<Failure> for Error {
    fn from(e: Failure) -> Self {
        Self::new(Kind::NoProof, e.to_string().into())
    }
}
