use tern_sat::{
    config::Config,
    context::Context,
    reports::Report,
    types::err::{BuildError, ErrorKind, ParseError},
};

fn solved(dimacs: &str) -> (Context, Result<Report, ErrorKind>) {
    let mut ctx = Context::from_config(Config::default());
    match ctx.read_dimacs(dimacs.as_bytes()) {
        Ok(_) => {}
        Err(e) => return (ctx, Err(e)),
    }
    let report = ctx.solve();
    (ctx, report)
}

#[test]
fn single_unit() {
    let (ctx, report) = solved("p cnf 1 1\n1 0\n");
    assert_eq!(report, Ok(Report::Satisfiable));
    assert_eq!(ctx.atom_db.value_of(1), Some(true));
    assert!(ctx.validate_assignment().is_ok());
}

#[test]
fn conflicting_units() {
    let mut ctx = Context::from_config(Config::default());
    let result = ctx.read_dimacs("p cnf 1 2\n1 0\n-1 0\n".as_bytes());

    // Conflicting unaries are identified at ingestion.
    assert_eq!(result, Err(ErrorKind::Build(BuildError::Unsatisfiable)));
    assert_eq!(ctx.report(), Report::Unsatisfiable);
}

#[test]
fn three_variable_chain() {
    let (ctx, report) = solved("p cnf 3 3\n1 2 0\n-1 2 0\n-2 3 0\n");
    assert_eq!(report, Ok(Report::Satisfiable));
    assert_eq!(ctx.atom_db.value_of(2), Some(true));
    assert_eq!(ctx.atom_db.value_of(3), Some(true));
    assert!(ctx.validate_assignment().is_ok());
}

#[test]
fn two_variable_contradiction() {
    let (ctx, report) = solved("p cnf 3 4\n1 2 0\n-1 2 0\n1 -2 0\n-1 -2 0\n");
    assert_eq!(report, Ok(Report::Unsatisfiable));
    assert!(ctx.counters.learned >= 1);
}

#[test]
fn comments_and_varied_whitespace() {
    let dimacs = "c comment line\nc another comment\np cnf 2 2\n 1\t2 0\nc between clauses\n-1\t 2  0\n";
    let (ctx, report) = solved(dimacs);
    assert_eq!(report, Ok(Report::Satisfiable));
    assert_eq!(ctx.atom_db.value_of(2), Some(true));
}

#[test]
fn empty_clause_rejected() {
    let mut ctx = Context::from_config(Config::default());
    let result = ctx.read_dimacs("p cnf 2 2\n1 2 0\n0\n".as_bytes());
    assert_eq!(result, Err(ErrorKind::Parse(ParseError::EmptyClause(2))));
}

#[test]
fn oversized_literal_rejected() {
    let mut ctx = Context::from_config(Config::default());
    let result = ctx.read_dimacs("p cnf 2 1\n1 3 0\n".as_bytes());
    assert_eq!(result, Err(ErrorKind::Parse(ParseError::LiteralOutOfRange(3))));
}

#[test]
fn junk_token_rejected() {
    let mut ctx = Context::from_config(Config::default());
    let result = ctx.read_dimacs("p cnf 2 1\n1 x 0\n".as_bytes());
    assert_eq!(
        result,
        Err(ErrorKind::Parse(ParseError::UnexpectedToken("x".to_owned())))
    );
}

#[test]
fn assignment_string_round_trips() {
    let (ctx, report) = solved("p cnf 2 2\n1 0\n-2 0\n");
    assert_eq!(report, Ok(Report::Satisfiable));

    // One signed integer per variable, parseable back to the same units.
    let assignment = ctx.atom_db.assignment_string();
    let ints: Vec<i32> = assignment
        .split_whitespace()
        .map(|token| token.parse().unwrap())
        .collect();
    assert_eq!(ints, vec![1, -2]);
}
