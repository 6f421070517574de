use natded::canon::{beautify, normalise};
use natded::{Failure, Limits, Problem, ProofLog, Search, Stats};

fn quick() -> Limits {
    Limits {
        budget: 20_000,
        ..Limits::default()
    }
}

fn no_cd() -> Limits {
    Limits {
        cd_depth: 0,
        ..quick()
    }
}

fn solve_with(premises: &[&str], conclusion: &str, limits: Limits) -> (Result<ProofLog, Failure>, Stats) {
    let problem = Problem::new(premises, conclusion);
    let mut search = Search::new(&problem, limits);
    let proof = search.solve().map(|proof| proof.clone());
    (proof, search.stats().clone())
}

fn proved(premises: &[&str], conclusion: &str, limits: Limits) -> String {
    let (proof, _) = solve_with(premises, conclusion, limits);
    let proof = proof.unwrap();
    assert_eq!(proof.check(), Ok(()));
    proof.to_string()
}

#[test]
fn modus_ponens() {
    let proof = proved(&["P", "P->Q"], "Q", quick());
    assert_eq!(proof, "1. Show: Q\n2.  P    :PR\n3.  P->Q    :PR\n4.  Q    :MP 2 3\n");
}

#[test]
fn modus_tollens() {
    let proof = proved(&["~Q", "P->Q"], "~P", quick());
    assert_eq!(proof, "1. Show: ~P\n2.  ~Q    :PR\n3.  P->Q    :PR\n4.  ~P    :MT 2 3\n");
}

#[test]
fn syllogism() {
    let proof = proved(&["P->Q", "Q->R"], "P->R", no_cd());
    assert!(proof.ends_with("P->R    :D-HS 2 3\n"));

    let proof = proved(&["P->Q", "Q->R"], "P->R", Limits::default());
    assert!(proof.contains("P->R    :D-HS 2 3") || proof.contains("P->R    :CD"));
}

#[test]
fn unprovable() {
    let problem = Problem::new(["P"], "Q");
    let mut search = Search::new(&problem, quick());
    assert_eq!(search.solve().err(), Some(Failure::Unprovable));
    let mut derived = search.proof().iter().skip(1);
    assert!(!derived.any(|st| st.expression == "Q"));
}

#[test]
fn contraposition_cycle() {
    let (proof, stats) = solve_with(&[], "P->Q", quick());
    assert_eq!(proof.err(), Some(Failure::Unprovable));
    assert!(stats.cycles > 0);
    assert_eq!(stats.abandoned, 1);
}

#[test]
fn double_negation() {
    assert!(proved(&["~~P"], "P", quick()).ends_with("3.  P    :DNE 2\n"));
    assert!(proved(&["P"], "~~P", quick()).ends_with("~~P    :DNI 2\n"));
}

#[test]
fn conjunction() {
    assert!(proved(&["P^Q"], "P", quick()).contains("P    :S 2\n"));
    assert!(proved(&["P^Q"], "Q", quick()).contains("Q    :S 2\n"));
    assert!(proved(&["P", "Q"], "P^Q", quick()).ends_with("P^Q    :ADJ 2 3\n"));
}

#[test]
fn disjunction() {
    assert!(proved(&["PvQ", "~P"], "Q", quick()).ends_with("Q    :MTP 2 3\n"));
    assert!(proved(&["P"], "Pv(Q^R)", quick()).ends_with("Pv(Q^R)    :ADD 2\n"));
}

#[test]
fn biconditional() {
    assert!(proved(&["P->Q", "Q->P"], "P<->Q", quick()).ends_with("P<->Q    :CB 2 3\n"));
    assert!(proved(&["Q->P", "P->Q"], "P<->Q", quick()).ends_with("P<->Q    :CB 3 2\n"));
}

#[test]
fn conditionals() {
    assert!(proved(&["Q"], "P->Q", quick()).ends_with("P->Q    :D-MCC 2\n"));
    assert!(proved(&["~P"], "P->Q", no_cd()).ends_with("P->Q    :D-MCNA 2\n"));
    assert!(proved(&["P->Q"], "~Q->~P", no_cd()).ends_with("~Q->~P    :D-CPO 2\n"));
    assert!(proved(&["~P->~Q"], "Q->P", no_cd()).ends_with("Q->P    :D-CPT 2\n"));
    assert!(proved(&["~Q->~P"], "P->Q", no_cd()).ends_with("P->Q    :D-CPT 2\n"));
}

#[test]
fn cases() {
    assert!(proved(&["~P->Q", "P->Q"], "Q", quick()).ends_with("Q    :D-DIL 2 3\n"));
    assert!(proved(&["P->Q", "~P->Q"], "Q", quick()).ends_with("Q    :D-DIL 2 3\n"));
    let cm = proved(&["~P->P"], "P", quick());
    assert!(cm.contains("~~P    :D-CM 4\n"));
    assert!(cm.ends_with("P    :DNE 5\n"));
    let pbc = proved(&["P->R", "PvQ", "Q->R"], "R", Limits::default());
    assert!(pbc.ends_with("R    :D-PBC 2 3 4\n"));
}

#[test]
fn chains() {
    let proof = proved(&["P", "P->Q", "Q->R"], "R", Limits::default());
    assert!(proof.lines().last().unwrap().contains("R    :MP "));

    let proof = proved(&["P", "P->Q", "Q->R", "R->S"], "S", Limits::default());
    assert!(proof.lines().last().unwrap().contains("S    :MP "));

    let conditionals: [(&[&str], &str); 2] = [
        (&["P->Q", "Q->R", "R->S"], "P->S"),
        (&["P->(Q->R)"], "(P^Q)->R"),
    ];
    for (premises, conclusion) in conditionals {
        let proof = proved(premises, conclusion, Limits::default());
        let last = proof.lines().last().unwrap();
        assert!(last.ends_with(&format!("{}    :CD {}", conclusion, proof.lines().count() - 1)));
    }
}

#[test]
fn long_formulas() {
    let q = "Q".repeat(49);
    let imp = format!("P->{}", q);
    let proof = proved(&["P", imp.as_str()], &q, Limits::default());
    assert!(proof.ends_with(&format!("{}    :MP 2 3\n", q)));

    let (a, b) = ("A".repeat(25), "B".repeat(25));
    let conj = format!("{}^{}", a, b);
    let proof = proved(&[a.as_str(), b.as_str()], &conj, Limits::default());
    assert!(proof.ends_with(&format!("{}    :ADJ 2 3\n", conj)));
}

#[test]
fn ex_falso() {
    assert!(proved(&["P", "~P"], "R", quick()).ends_with("R    :D-EFQ 2 3\n"));
}

#[test]
fn de_morgan() {
    let proof = proved(&["~(PvQ)"], "~P^~Q", quick());
    assert!(proof.ends_with("~P^~Q    :D-DMO 2\n"));
}

#[test]
fn identity() {
    let proof = proved(&[], "P->P", quick());
    let expected = "1. Show: P->P\n   2.  Show: P\n   3.  P    :AS\n4.      :DD 3\n5.  P->P    :CD 4\n";
    assert_eq!(proof, expected);
}

#[test]
fn nested_conditional() {
    let proof = proved(&[], "P->(Q->P)", quick());
    let expected = [
        "1. Show: P->(Q->P)",
        "   2.  Show: P",
        "   3.  P    :AS",
        "      4.  Show: Q",
        "      5.  Q    :AS",
        "   6.      :DD 3",
        "   7.  Q->P    :CD 6",
        "8.      :DD 7",
        "9.  P->(Q->P)    :CD 8",
    ];
    assert_eq!(proof.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn conditional_with_saturation() {
    let proof = proved(&["P->Q"], "~Q->~P", quick());
    let expected = [
        "1. Show: ~Q->~P",
        "2.  P->Q    :PR",
        "   3.  Show: ~Q",
        "   4.  ~Q    :AS",
        "   5.  ~P    :MT 2 4",
        "6.      :DD 5",
        "7.  ~Q->~P    :CD 6",
    ];
    assert_eq!(proof.lines().collect::<Vec<_>>(), expected);
}

#[test]
fn conditional_with_contradiction() {
    let proof = proved(&["~P"], "P->Q", quick());
    assert!(proof.contains("Q    :D-EFQ 2 4\n"));
    let last = proof.lines().last().unwrap();
    assert!(last.contains(".  P->Q    :CD "));
}

#[test]
fn conditional_depth_limit() {
    let (proof, stats) = solve_with(&[], "P->P", no_cd());
    assert_eq!(proof.err(), Some(Failure::Unprovable));
    assert_eq!(stats.cd_attempts, 0);
}

#[test]
fn budget() {
    let limits = Limits {
        budget: 10,
        ..no_cd()
    };
    let (proof, stats) = solve_with(&["P->Q", "Q->R"], "P->R", limits);
    assert_eq!(proof.err(), Some(Failure::Unprovable));
    assert_eq!(stats.applications, 10);
}

#[test]
fn premise_as_conclusion() {
    let proof = proved(&["P", "Q"], "Q", quick());
    assert_eq!(proof, "1. Show: Q\n2.  P    :PR\n3.  Q    :PR\n");
}

#[test]
fn deterministic() {
    let problems: [(&[&str], &str); 3] = [
        (&["P->Q", "Q->R"], "P->R"),
        (&["PvQ", "~P"], "Q"),
        (&["P^Q"], "Q^P"),
    ];
    for (premises, conclusion) in problems.iter() {
        let (proof1, _) = solve_with(premises, conclusion, quick());
        let (proof2, _) = solve_with(premises, conclusion, quick());
        let render = |p: Result<ProofLog, Failure>| p.map(|p| p.to_string());
        assert_eq!(render(proof1), render(proof2));
    }
}

#[test]
fn sound_and_referenced() {
    let problems: [(&[&str], &str); 5] = [
        (&["P", "P->Q", "Q->R"], "R"),
        (&["P->Q", "~Q"], "~P"),
        (&["P"], "Q->(P^Q)"),
        (&["PvQ", "~Q"], "P"),
        (&["P->Q"], "(Q->R)->(P->R)"),
    ];
    for (premises, conclusion) in problems.iter() {
        let (proof, _) = solve_with(premises, conclusion, quick());
        let proof = proof.unwrap();
        assert_eq!(proof.check(), Ok(()));
        for st in proof.iter() {
            assert!(st.references.iter().all(|r| *r >= 1 && *r < st.line));
        }
    }
}

#[test]
fn compact() {
    let problem = Problem::new(["P->Q", "Q->R"], "P->R");
    let mut search = Search::new(&problem, no_cd());
    let proof = search.solve().unwrap();
    assert!(proof.len() > 4);
    let compact = proof.compact(proof.find("P->R").unwrap());
    let expected = "1. Show: P->R\n2.  P->Q    :PR\n3.  Q->R    :PR\n4.  P->R    :D-HS 2 3\n";
    assert_eq!(compact.to_string(), expected);
    assert_eq!(compact.check(), Ok(()));
}

#[test]
fn compact_keeps_subproofs() {
    let problem = Problem::new(Vec::<&str>::new(), "P->(Q->P)");
    let mut search = Search::new(&problem, quick());
    let proof = search.solve().unwrap();
    let compact = proof.compact(proof.len());
    assert_eq!(compact.to_string(), proof.to_string());
}

#[test]
fn pretty() {
    let problem = Problem::new(["P", "P -> Q"], "Q");
    let mut search = Search::new(&problem, quick());
    let proof = search.solve().unwrap().display(true).to_string();
    assert!(proof.contains("3.  P→Q    :PR"));
}

#[test]
fn canonical() {
    for raw in ["P and Q => R", "¬(P ∨ Q) ↔ (¬P ∧ ¬Q)", "P || Q", " ~ ~ P "] {
        let canon = normalise(raw);
        assert_eq!(normalise(&canon), canon);
        assert_eq!(normalise(&beautify(&canon)), canon);
    }
}
