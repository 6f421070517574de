use clap::Parser;
use log::info;
use natded::proof::Violation;
use natded::{Problem, Search};
use natprove::{cli, parse, Error, Kind};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

/// Natural-deduction prover for propositional logic
///
/// Formulas are built from atoms with "~" (negation), "^" (conjunction),
/// "v" (disjunction), "->" (implication), and "<->" (biconditional).
/// Without a conclusion or a problem file,
/// problems are read interactively from standard input.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
struct Cli {
    /// Comma-separated premises
    #[arg(short, long)]
    premises: Option<String>,

    /// Conclusion to prove from the premises
    #[arg(short, long)]
    conclusion: Option<String>,

    /// Render proofs with logical symbols
    #[arg(long)]
    pretty: bool,

    /// Render only the lines that the conclusion depends on
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    bounds: cli::Bounds,

    #[command(flatten)]
    paths: cli::Paths,
}

fn main() {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut out = cli.paths.writer()?;
    let mut records = Vec::new();

    let result = match (&cli.conclusion, &cli.paths.file) {
        (Some(conclusion), _) => {
            let premises = cli.premises.as_deref().unwrap_or_default();
            let problem = parse::problem(premises, conclusion)?;
            let proved = prove(cli, &problem, &mut out, &mut records)?;
            if proved {
                Ok(())
            } else {
                Err(Error::from(Kind::NoProof))
            }
        }
        (None, _) if cli.premises.is_some() => {
            let e = "premises given without conclusion";
            Err(Error::new(Kind::InputError, e.into()))
        }
        (None, Some(file)) => {
            let problems = parse::parse_file(file)?;
            let mut failed = 0;
            for problem in &problems {
                if !prove(cli, problem, &mut out, &mut records)? {
                    failed += 1
                }
            }
            info!("{} of {} problems proved", problems.len() - failed, problems.len());
            if failed == 0 {
                Ok(())
            } else {
                let e = format!("{} of {} problems", failed, problems.len());
                Err(Error::new(Kind::NoProof, e.into()))
            }
        }
        (None, None) => interactive(cli, &mut out, &mut records),
    };

    cli.paths.write_stats(&records)?;
    result
}

/// Prompt for problems until the end of input.
fn interactive(cli: &Cli, out: &mut impl Write, records: &mut Vec<Value>) -> Result<(), Error> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut ask = |prompt: &str| -> io::Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;
        lines.next().transpose()
    };
    loop {
        let premises = match ask("Enter premises separated by commas: ")? {
            Some(premises) => premises,
            None => return Ok(()),
        };
        let conclusion = match ask("Enter the conclusion: ")? {
            Some(conclusion) => conclusion,
            None => return Ok(()),
        };
        match parse::problem(&premises, &conclusion) {
            Ok(problem) => {
                prove(cli, &problem, &mut *out, records)?;
            }
            Err(e) => eprintln!("{}", e),
        }
        out.flush()?;
    }
}

/// Search for a proof, write it, and record statistics.
///
/// Returns whether a proof was found.
fn prove(
    cli: &Cli,
    problem: &Problem,
    out: &mut impl Write,
    records: &mut Vec<Value>,
) -> Result<bool, Error> {
    info!("problem: {}", problem);
    let mut search = Search::new(problem, cli.bounds.get());
    let proved = match search.solve() {
        Ok(proof) => {
            let unsound = |v: Violation| Error::new(Kind::Unsound, v.to_string().into());
            proof.check().map_err(unsound)?;
            let compact;
            let proof = match proof.find(problem.conclusion()) {
                Some(line) if cli.compact => {
                    compact = proof.compact(line);
                    &compact
                }
                _ => proof,
            };
            info!("proof found with {} lines", proof.len());
            write!(out, "{}", proof.display(cli.pretty))?;
            true
        }
        Err(e) => {
            info!("{}: {}", problem, e);
            writeln!(out, "no proof found for: {}", problem.conclusion())?;
            false
        }
    };
    let stats = search.stats();
    let problem = problem.to_string();
    records.push(json!({ "problem": problem, "proved": proved, "stats": stats }));
    Ok(proved)
}
