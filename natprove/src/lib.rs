//! Command-line front end for natural-deduction proof search.

pub mod cli;
mod error;
pub mod parse;

pub use error::{Error, Kind};
