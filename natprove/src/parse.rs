use crate::{Error, Kind};
use log::info;
use natded::Problem;
use std::path::Path;

/// Build a problem from comma-separated premises and a conclusion.
///
/// ~~~
/// let problem = natprove::parse::problem("P, P -> Q", "Q").unwrap();
/// assert_eq!(problem.premises(), ["P", "P->Q"]);
/// assert!(natprove::parse::problem("P", " ").is_err());
/// ~~~
pub fn problem(premises: &str, conclusion: &str) -> Result<Problem, Error> {
    let problem = Problem::new(premises.split(','), conclusion);
    if problem.conclusion().is_empty() {
        return Err(Error::new(Kind::InputError, "empty conclusion".into()));
    }
    Ok(problem)
}

/// Parse one problem per line, written `premises ; conclusion`.
pub fn parse_str(s: &str) -> Result<Vec<Problem>, Error> {
    let lines = s.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));
    let lines = lines.filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));
    lines
        .map(|(i, line)| {
            let (premises, conclusion) = line.split_once(';').ok_or_else(|| {
                let msg = format!("line {}: expected `premises ; conclusion`", i);
                Error::new(Kind::InputError, msg.into())
            })?;
            problem(premises, conclusion)
        })
        .collect()
}

pub fn parse_file(filename: &Path) -> Result<Vec<Problem>, Error> {
    info!("loading {:?}", filename);
    parse_str(&std::fs::read_to_string(filename)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problems() {
        let s = "# modus ponens\nP, P->Q ; Q\n\n ; P -> P\n";
        let problems = parse_str(s).unwrap();
        assert_eq!(problems.len(), 2);
        assert_eq!(problems[0].to_string(), "P, P->Q ⊢ Q");
        assert!(problems[1].premises().is_empty());
        assert_eq!(problems[1].conclusion(), "P->P");
    }

    #[test]
    fn malformed() {
        let e = parse_str("P, Q\n").unwrap_err();
        assert_eq!(e.get_kind(), Kind::InputError);
        let e = parse_str("P ; \n").unwrap_err();
        assert_eq!(e.get_kind(), Kind::InputError);
    }
}
