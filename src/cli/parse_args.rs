use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};

use tern_sat::config::{Config, ValueHeuristic, VariableHeuristic};

/// Options which concern the CLI rather than the solver.
pub struct CliOptions {
    /// The level to which progress is reported on stdout.
    pub verbosity: u8,

    /// Where to write the assignment on finding the formula satisfiable.
    pub assignment_path: PathBuf,

    /// The DIMACS CNF file to solve.
    pub path: PathBuf,
}

pub fn cli() -> Command {
    Command::new("tern_sat")
        .about("Determines whether a DIMACS CNF formula is satisfiable")

        .arg(Arg::new("path")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("The DIMACS CNF file to solve (optionally xz compressed)."))

        .arg(Arg::new("var_decision")
            .long("var-decision")
            .value_name("HEURISTIC")
            .value_parser(clap::builder::ValueParser::new(variable_heuristic_parser))
            .required(false)
            .num_args(1)
            .help("The variable decision heuristic.
Default: MINISAT

  - MINISAT: branch on the unassigned variable of highest activity."))

        .arg(Arg::new("val_decision")
            .long("val-decision")
            .value_name("HEURISTIC")
            .value_parser(clap::builder::ValueParser::new(value_heuristic_parser))
            .required(false)
            .num_args(1)
            .help("The value decision heuristic.
Default: PHASESAVING

  - PHASESAVING: value the chosen variable as it was most recently valued.
  - LITSCORE   : value the chosen variable by literal occurrence counts."))

        .arg(Arg::new("chronological")
            .long("chronological")
            .short('c')
            .value_name("BOOL")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0..=1)
            .default_missing_value("true")
            .help("Enable chronological backtracking.
Default: false"))

        .arg(Arg::new("verbosity")
            .long("verbosity")
            .short('v')
            .value_name("LEVEL")
            .value_parser(value_parser!(u8))
            .required(false)
            .num_args(1)
            .help("The level to which progress is reported during a solve.
Default: 0"))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .short('t')
            .value_name("SECONDS")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Time limit for the solve in seconds.
Default: 0 (no limit)"))

        .arg(Arg::new("assignment")
            .long("assignment")
            .short('a')
            .value_name("PATH")
            .value_parser(value_parser!(PathBuf))
            .required(false)
            .num_args(1)
            .help("The path to write the assignment to, on finding the formula satisfiable.
Default: assignment.txt"))
}

/// Settles the parsed arguments into a solver [Config] and the [CliOptions].
pub fn settle(matches: &ArgMatches) -> (Config, CliOptions) {
    let mut config = Config::default();

    if let Some(heuristic) = matches.get_one::<VariableHeuristic>("var_decision") {
        config.variable_heuristic = *heuristic;
    }

    if let Some(heuristic) = matches.get_one::<ValueHeuristic>("val_decision") {
        config.value_heuristic = *heuristic;
    }

    if let Some(chronological) = matches.get_one::<bool>("chronological") {
        config.chronological_backtracking.value = *chronological;
    }

    if let Some(seconds) = matches.get_one::<u64>("time_limit") {
        config.time_limit.value = std::time::Duration::from_secs(*seconds);
    }

    let options = CliOptions {
        verbosity: matches.get_one::<u8>("verbosity").copied().unwrap_or(0),
        assignment_path: matches
            .get_one::<PathBuf>("assignment")
            .cloned()
            .unwrap_or_else(|| PathBuf::from("assignment.txt")),
        path: matches
            .get_one::<PathBuf>("path")
            .cloned()
            .expect("path is required"),
    };

    (config, options)
}

fn variable_heuristic_parser(arg: &str) -> Result<VariableHeuristic, std::io::Error> {
    arg.parse().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown variable heuristic")
    })
}

fn value_heuristic_parser(arg: &str) -> Result<ValueHeuristic, std::io::Error> {
    arg.parse().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown value heuristic")
    })
}
