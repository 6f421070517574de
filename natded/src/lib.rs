//! Natural-deduction proof search for propositional logic.
//!
//! Given premises and a conclusion, [`Search`] produces a
//! Kalish–Montague style [`ProofLog`]: a numbered sequence of statements,
//! each justified as premise, assumption, rule application, or
//! closing of a conditional or direct subproof.
//!
//! ~~~
//! use natded::{Limits, Problem, Search};
//! let problem = Problem::new(["P", "P->Q"], "Q");
//! let mut search = Search::new(&problem, Limits::default());
//! let proof = search.solve().unwrap();
//! assert!(proof.check().is_ok());
//! assert!(proof.to_string().contains("Q    :MP 2 3"));
//! ~~~
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod canon;
mod combos;
mod failure;
pub mod form;
mod limits;
mod problem;
pub mod proof;
mod rewind;
pub mod rule;
mod scope;
mod search;
mod stats;

pub use combos::Combinations;
pub use failure::Failure;
pub use limits::Limits;
pub use problem::Problem;
pub use proof::{ProofLog, Statement};
pub use rewind::Rewind;
pub use rule::Rule;
pub use search::Search;
pub use stats::Stats;
