use rand::{rngs::SmallRng, Rng, SeedableRng};

use tern_sat::{config::Config, context::Context, reports::Report};

/// A uniform random 3-SAT instance over `variables` variables.
fn uniform_random_3sat(rng: &mut SmallRng, variables: i32, clauses: usize) -> Vec<Vec<i32>> {
    let mut formula = Vec::with_capacity(clauses);

    while formula.len() < clauses {
        let mut atoms = Vec::with_capacity(3);
        while atoms.len() < 3 {
            let atom = rng.random_range(1..=variables);
            if !atoms.contains(&atom) {
                atoms.push(atom);
            }
        }

        formula.push(
            atoms
                .iter()
                .map(|atom| if rng.random_bool(0.5) { *atom } else { -*atom })
                .collect(),
        );
    }

    formula
}

/// As [uniform_random_3sat], with every clause patched to satisfy a hidden assignment.
/// The instance is satisfiable by construction.
fn planted_random_3sat(rng: &mut SmallRng, variables: i32, clauses: usize) -> Vec<Vec<i32>> {
    let plant: Vec<bool> = (0..=variables).map(|_| rng.random_bool(0.5)).collect();

    let mut formula = uniform_random_3sat(rng, variables, clauses);
    for clause in formula.iter_mut() {
        let satisfied = clause
            .iter()
            .any(|literal| plant[literal.unsigned_abs() as usize] == literal.is_positive());

        if !satisfied {
            let position = rng.random_range(0..clause.len());
            clause[position] = -clause[position];
        }
    }

    formula
}

fn context_over(clauses: &[Vec<i32>], config: Config) -> Context {
    let variables = clauses
        .iter()
        .flatten()
        .map(|int| int.unsigned_abs() as usize)
        .max()
        .unwrap_or(0);

    let mut ctx = Context::from_config(config);
    ctx.initialise(variables, clauses.len());
    for clause in clauses {
        let _ = ctx.add_clause(clause.iter().map(|int| (*int).into()).collect());
    }
    ctx
}

fn chronological_config() -> Config {
    let mut config = Config::default();
    config.chronological_backtracking.value = true;
    config
}

#[test]
fn planted_ratio_three_fifty_variables() {
    // Ratio 3.0: 150 clauses over 50 variables.
    let mut rng = SmallRng::seed_from_u64(0x3A7);
    let formula = planted_random_3sat(&mut rng, 50, 150);

    let mut ncb = context_over(&formula, Config::default());
    assert_eq!(ncb.solve(), Ok(Report::Satisfiable));
    assert!(ncb.validate_assignment().is_ok());
    assert!(ncb.watches_consistent());

    let mut cb = context_over(&formula, chronological_config());
    assert_eq!(cb.solve(), Ok(Report::Satisfiable));
    assert!(cb.validate_assignment().is_ok());
    assert!(cb.watches_consistent());
}

#[test]
fn uniform_instances_verdicts_agree() {
    let mut rng = SmallRng::seed_from_u64(0xF0E1);

    for trial in 0..8 {
        // Spread around the satisfiability threshold so both verdicts occur.
        let clauses = 100 + 30 * trial;
        let formula = uniform_random_3sat(&mut rng, 30, clauses);

        let mut ncb = context_over(&formula, Config::default());
        let mut cb = context_over(&formula, chronological_config());

        let ncb_report = ncb.solve().expect("solve failed");
        let cb_report = cb.solve().expect("solve failed");

        assert_eq!(ncb_report, cb_report, "verdicts differ on trial {trial}");

        if ncb_report == Report::Satisfiable {
            assert!(ncb.validate_assignment().is_ok());
            assert!(cb.validate_assignment().is_ok());
        }
    }
}
