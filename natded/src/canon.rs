//! Canonical spelling of formulas.
//!
//! Input formulas may use several spellings of each connective,
//! such as `=>`, `→`, or the word `and`.
//! [`normalise`] maps them to the ASCII connectives
//! `<->`, `->`, `v`, `^`, and `~`, and removes all whitespace.
//! [`beautify`] maps canonical text to logical glyphs for display.

use alloc::{boxed::Box, string::String};

/// Rewriting step that returns whether it changed its input.
type Step = dyn Fn(String) -> (bool, String);

/// Symbolic aliases of connectives, longest alias first for every connective.
const SYMBOLS: [(&str, &str); 20] = [
    ("<=>", "<->"),
    ("↔\u{fe0e}", "<->"),
    ("↔", "<->"),
    ("⇔", "<->"),
    ("≡", "<->"),
    ("=>", "->"),
    ("→", "->"),
    ("⇒", "->"),
    ("⊃", "->"),
    ("\\/", "v"),
    ("||", "v"),
    ("|", "v"),
    ("∨", "v"),
    ("/\\", "^"),
    ("&&", "^"),
    ("&", "^"),
    ("∧", "^"),
    ("·", "^"),
    ("¬", "~"),
    ("!", "~"),
];

/// Word aliases of connectives, replaced only as whole words.
const WORDS: [(&str, &str); 3] = [("or", "v"), ("and", "^"), ("not", "~")];

/// Display glyphs of canonical connectives.
const GLYPHS: [(&str, &str); 5] = [
    ("<->", "↔"),
    ("->", "→"),
    ("^", "∧"),
    ("v", "∨"),
    ("~", "¬"),
];

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace whole-word aliases.
fn words(s: String) -> (bool, String) {
    let mut out = String::with_capacity(s.len());
    let mut change = false;
    let mut rest = s.as_str();
    while let Some(start) = rest.find(is_word_char) {
        out.push_str(&rest[..start]);
        rest = &rest[start..];
        let end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
        let word = &rest[..end];
        match WORDS.iter().find(|(alias, _)| alias.eq_ignore_ascii_case(word)) {
            Some((_, symbol)) => {
                out.push_str(symbol);
                change = true
            }
            None => out.push_str(word),
        }
        rest = &rest[end..];
    }
    out.push_str(rest);
    (change, out)
}

/// Replace symbolic aliases in order.
fn symbols(s: String) -> (bool, String) {
    let out = SYMBOLS
        .iter()
        .fold(s.clone(), |acc, (alias, symbol)| acc.replace(alias, symbol));
    (out != s, out)
}

fn spaces(s: String) -> (bool, String) {
    let out: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    (out.len() != s.len(), out)
}

/// Apply `f` until it reports no change.
fn fix(mut s: String, f: impl Fn(String) -> (bool, String)) -> String {
    loop {
        let (change, t) = f(s);
        s = t;
        if !change {
            return s;
        }
    }
}

/// Apply several steps in sequence, reporting whether any of them changed the input.
fn fold(s: String, steps: &[Box<Step>]) -> (bool, String) {
    steps.iter().fold((false, s), |(change, s), step| {
        let (change_t, t) = step(s);
        (change | change_t, t)
    })
}

/// Bring a formula into canonical form.
///
/// Removing whitespace may join tokens into new aliases,
/// so the steps are repeated until nothing changes.
/// This makes normalisation idempotent.
///
/// ~~~
/// use natded::canon::normalise;
/// assert_eq!(normalise(" P and not Q => R "), "P^~Q->R");
/// assert_eq!(normalise("(P ∨ Q) ⇔ ¬R"), "(PvQ)<->~R");
/// assert_eq!(normalise("P <=> Q"), "P<->Q");
/// ~~~
pub fn normalise(raw: &str) -> String {
    let steps: [Box<Step>; 3] = [Box::new(words), Box::new(symbols), Box::new(spaces)];
    fix(String::from(raw.trim()), |s| fold(s, &steps))
}

/// Replace canonical connectives by logical glyphs.
///
/// ~~~
/// use natded::canon::beautify;
/// assert_eq!(beautify("~P^Q->(RvS)<->T"), "¬P∧Q→(R∨S)↔T");
/// ~~~
pub fn beautify(fm: &str) -> String {
    GLYPHS
        .iter()
        .fold(String::from(fm), |acc, (symbol, glyph)| acc.replace(symbol, glyph))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idempotent() {
        for raw in ["o r", "< = >", "P | | Q", "not not P", "P→Q", "~P^Q", ""] {
            let once = normalise(raw);
            assert_eq!(normalise(&once), once, "{}", raw);
        }
    }

    #[test]
    fn whole_words() {
        assert_eq!(normalise("Portland or Andover"), "PortlandvAndover");
        assert_eq!(normalise("NOT P"), "~P");
    }

    #[test]
    fn beautified_is_normalised() {
        let fm = "~(PvQ)<->(~P^~Q)";
        assert_eq!(normalise(&beautify(fm)), fm);
    }
}
