use tern_sat::{config::Config, context::Context, reports::Report};

/// Clauses for placing `pigeons` pigeons into `holes` holes, no two sharing.
/// Unsatisfiable whenever `pigeons > holes`.
fn pigeonhole(pigeons: i32, holes: i32) -> Vec<Vec<i32>> {
    let var = |pigeon: i32, hole: i32| (pigeon - 1) * holes + hole;
    let mut clauses = Vec::new();

    for pigeon in 1..=pigeons {
        clauses.push((1..=holes).map(|hole| var(pigeon, hole)).collect());
    }

    for hole in 1..=holes {
        for first in 1..=pigeons {
            for second in (first + 1)..=pigeons {
                clauses.push(vec![-var(first, hole), -var(second, hole)]);
            }
        }
    }

    clauses
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

mod pigeonhole_tests {
    use super::*;

    #[test]
    fn three_into_two() {
        let clauses = pigeonhole(3, 2);
        assert_eq!(clauses.len(), 9);

        let mut ctx = context_over(&clauses, Config::default());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn three_into_two_small_restart_threshold() {
        let mut config = Config::default();
        config.restart_lower.value = 1;
        config.restart_upper.value = 4;

        let mut ctx = context_over(&pigeonhole(3, 2), config);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn four_into_three_restarts() {
        let mut config = Config::default();
        config.restart_lower.value = 1;
        config.restart_upper.value = 4;

        let mut ctx = context_over(&pigeonhole(4, 3), config);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.counters.restarts >= 1);
    }

    #[test]
    fn four_into_five_satisfiable() {
        let mut ctx = context_over(&pigeonhole(4, 5), Config::default());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.validate_assignment().is_ok());
    }
}

mod chronological {
    use super::*;

    fn chronological_config() -> Config {
        let mut config = Config::default();
        config.chronological_backtracking.value = true;
        config
    }

    #[test]
    fn agrees_with_ncb_on_pigeonhole() {
        let clauses = pigeonhole(3, 2);

        let mut ncb = context_over(&clauses, Config::default());
        let mut cb = context_over(&clauses, chronological_config());

        assert_eq!(ncb.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(cb.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn agrees_with_ncb_on_satisfiable_chains() {
        let clauses: Vec<Vec<i32>> = vec![
            vec![1, 2, 3],
            vec![-1, 4],
            vec![-2, 5],
            vec![-4, -5, 6],
            vec![-3, -6],
            vec![2, -6, 7],
            vec![-7, 1],
        ];

        let mut ncb = context_over(&clauses, Config::default());
        let mut cb = context_over(&clauses, chronological_config());

        let ncb_report = ncb.solve();
        let cb_report = cb.solve();
        assert_eq!(ncb_report, cb_report);
        assert_eq!(ncb_report, Ok(Report::Satisfiable));

        assert!(ncb.validate_assignment().is_ok());
        assert!(cb.validate_assignment().is_ok());
    }

    #[test]
    fn watches_survive_chronological_backtracks() {
        let mut ctx = context_over(&pigeonhole(4, 3), chronological_config());
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.watches_consistent());
    }

    #[test]
    fn restarts_under_chronological_backtracking() {
        let mut config = chronological_config();
        config.restart_lower.value = 1;
        config.restart_upper.value = 4;

        let mut ctx = context_over(&pigeonhole(4, 3), config);
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }
}
