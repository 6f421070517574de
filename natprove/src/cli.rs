use crate::{Error, Kind};
use natded::Limits;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Bounds that guarantee termination of proof search
#[derive(clap::Args)]
pub struct Bounds {
    /// Maximal nesting of conditional derivations
    #[arg(long, default_value_t = Limits::default().cd_depth)]
    cd_depth: usize,

    /// Saturation passes inside one conditional derivation
    #[arg(long, default_value_t = Limits::default().stall)]
    stall: usize,

    /// Maximal number of lines of a proof
    #[arg(long, default_value_t = Limits::default().lines)]
    max_lines: usize,

    /// Saturation passes when all other strategies failed
    #[arg(long, default_value_t = Limits::default().passes)]
    passes: usize,

    /// Maximal depth of goal-directed backward proving
    #[arg(long, default_value_t = Limits::default().goal_depth)]
    goal_depth: usize,

    /// Longest formula (in characters) considered as goal or derived
    #[arg(long, default_value_t = Limits::default().formula_len)]
    formula_len: usize,

    /// Rule applications per saturation run
    #[arg(long, default_value_t = Limits::default().budget)]
    budget: usize,
}

impl Bounds {
    pub fn get(&self) -> Limits {
        Limits {
            cd_depth: self.cd_depth,
            stall: self.stall,
            lines: self.max_lines,
            passes: self.passes,
            goal_depth: self.goal_depth,
            formula_len: self.formula_len,
            budget: self.budget,
        }
    }
}

#[derive(clap::Args)]
pub struct Paths {
    /// Write proofs to given file instead of standard output
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Write proof search statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Path of a problem file
    ///
    /// Every line of the file holds one problem, written as
    /// comma-separated premises, a semicolon, and the conclusion.
    /// Empty lines and lines starting with "#" are ignored.
    pub file: Option<PathBuf>,
}

impl Paths {
    /// Destination of rendered proofs.
    pub fn writer(&self) -> io::Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(o) => Box::new(File::create(o)?),
            None => Box::new(io::stdout()),
        })
    }

    /// Write statistics if requested.
    pub fn write_stats(&self, records: &[serde_json::Value]) -> Result<(), Error> {
        if let Some(file) = &self.stats {
            let mut f = File::create(file)?;
            serde_json::to_writer_pretty(&mut f, records)
                .map_err(|e| Error::new(Kind::OsError, e.into()))?;
            writeln!(f)?;
        }
        Ok(())
    }
}
