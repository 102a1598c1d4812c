use tern_sat::{
    builder::ClauseOk,
    config::{Config, ValueHeuristic},
    context::Context,
    reports::Report,
};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        ctx.initialise(1, 1);

        assert_eq!(Ok(ClauseOk::Unit), ctx.add_clause(vec![1.into()]));

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.atom_db.value_of(1), Some(true));
    }

    #[test]
    fn conflicting_units() {
        let mut ctx = Context::from_config(Config::default());
        ctx.initialise(1, 2);

        assert!(ctx.add_clause(vec![1.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-1).into()]).is_err());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn implication_chain() {
        let mut ctx = Context::from_config(Config::default());
        ctx.initialise(3, 3);

        assert!(ctx.add_clause(vec![1.into(), 2.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-1).into(), 2.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-2).into(), 3.into()]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.atom_db.value_of(2), Some(true));
        assert_eq!(ctx.atom_db.value_of(3), Some(true));
        assert!(ctx.validate_assignment().is_ok());
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());
        ctx.initialise(2, 4);

        assert!(ctx.add_clause(vec![1.into(), 2.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-1).into(), 2.into()]).is_ok());
        assert!(ctx.add_clause(vec![1.into(), (-2).into()]).is_ok());
        assert!(ctx.add_clause(vec![(-1).into(), (-2).into()]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));

        // A first-UIP clause of size at most two was learned on the way.
        assert!(ctx.counters.learned >= 1);
        let stored_learned_ok = ctx
            .clause_db
            .all_clauses()
            .skip(ctx.clause_db.original_count())
            .all(|(_, clause)| clause.size() <= 2);
        assert!(stored_learned_ok);
    }

    #[test]
    fn duplicates_removed() {
        let mut ctx = Context::from_config(Config::default());
        ctx.initialise(2, 1);

        assert!(ctx
            .add_clause(vec![1.into(), 1.into(), 2.into(), 2.into()])
            .is_ok());

        let (_, clause) = ctx.clause_db.all_clauses().next().unwrap();
        assert_eq!(clause.size(), 2);
    }

    #[test]
    fn phase_saving_defaults_false() {
        let mut ctx = Context::from_config(Config::default());
        ctx.initialise(2, 1);

        assert!(ctx.add_clause(vec![(-1).into(), (-2).into()]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert_eq!(ctx.atom_db.value_of(1), Some(false));
        assert_eq!(ctx.atom_db.value_of(2), Some(false));
    }

    #[test]
    fn litscore_follows_occurrences() {
        let mut config = Config::default();
        config.value_heuristic = ValueHeuristic::LitScore;
        let mut ctx = Context::from_config(config);
        ctx.initialise(3, 3);

        assert!(ctx.add_clause(vec![1.into(), 2.into()]).is_ok());
        assert!(ctx.add_clause(vec![1.into(), 3.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-1).into(), 2.into()]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        // Variable 1 has the highest activity and literal 1 outscores -1.
        assert_eq!(ctx.atom_db.value_of(1), Some(true));
        assert_eq!(ctx.atom_db.value_of(2), Some(true));
        assert!(ctx.validate_assignment().is_ok());
    }
}

mod propagation {
    use super::*;

    #[test]
    fn bcp_is_idempotent() {
        let mut ctx = Context::from_config(Config::default());
        ctx.initialise(3, 3);

        assert!(ctx.add_clause(vec![1.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-1).into(), 2.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-2).into(), 3.into()]).is_ok());

        assert!(ctx.bcp().is_ok());
        let trail_length = ctx.trail.literals.len();
        let head = ctx.trail.q_head;
        assert_eq!(trail_length, 3);

        assert!(ctx.bcp().is_ok());
        assert_eq!(ctx.trail.literals.len(), trail_length);
        assert_eq!(ctx.trail.q_head, head);
    }

    #[test]
    fn watches_consistent_after_propagation() {
        let mut ctx = Context::from_config(Config::default());
        ctx.initialise(4, 4);

        assert!(ctx.add_clause(vec![1.into(), 2.into(), 3.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-1).into(), 2.into(), 4.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-2).into(), 3.into(), 4.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-3).into(), (-4).into()]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
        assert!(ctx.watches_consistent());
        assert!(ctx.validate_assignment().is_ok());
    }
}

mod determinism {
    use super::*;

    fn hard_instance(ctx: &mut Context) {
        ctx.initialise(6, 9);
        let clauses: [[i32; 2]; 9] = [
            [1, 2],
            [3, 4],
            [5, 6],
            [-1, -3],
            [-1, -5],
            [-3, -5],
            [-2, -4],
            [-2, -6],
            [-4, -6],
        ];
        for clause in clauses {
            let _ = ctx.add_clause(clause.iter().map(|int| (*int).into()).collect());
        }
    }

    #[test]
    fn repeat_solves_agree() {
        let mut first = Context::from_config(Config::default());
        hard_instance(&mut first);
        let first_report = first.solve();

        let mut second = Context::from_config(Config::default());
        hard_instance(&mut second);
        let second_report = second.solve();

        assert_eq!(first_report, second_report);
        assert_eq!(first.counters.decisions, second.counters.decisions);
        assert_eq!(first.counters.learned, second.counters.learned);
    }
}

mod resources {
    use super::*;

    #[test]
    fn timeout_is_reported() {
        let mut config = Config::default();
        config.time_limit.value = std::time::Duration::from_nanos(1);
        let mut ctx = Context::from_config(config);
        ctx.initialise(2, 2);

        assert!(ctx.add_clause(vec![1.into(), 2.into()]).is_ok());
        assert!(ctx.add_clause(vec![(-1).into(), 2.into()]).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Timeout));
    }
}
