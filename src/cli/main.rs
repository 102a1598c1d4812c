#![allow(clippy::collapsible_else_if)]

use std::io::BufReader;

use tern_sat::{
    context::Context,
    reports::Report,
    types::err::{BuildError, ErrorKind},
};

mod parse_args;

fn main() {
    env_logger::init();

    let matches = parse_args::cli().get_matches();
    let (config, options) = parse_args::settle(&matches);

    let mut ctx = Context::from_config(config);

    let file = match std::fs::File::open(&options.path) {
        Ok(file) => file,
        Err(_) => {
            eprintln!("Cannot read input file {:?}", options.path);
            std::process::exit(1);
        }
    };

    let read_start = std::time::Instant::now();
    let read_result = match options.path.extension() {
        Some(extension) if extension == "xz" => {
            ctx.read_dimacs(BufReader::new(xz2::read::XzDecoder::new(&file)))
        }
        _ => ctx.read_dimacs(BufReader::new(&file)),
    };

    match read_result {
        Ok(info) => {
            if options.verbosity > 0 {
                println!("c vars: {} clauses: {}", info.expected_atoms, info.expected_clauses);
                println!(
                    "c Read {} clauses in {:.2?}.",
                    info.added_clauses,
                    read_start.elapsed()
                );
                println!("c Solving...");
            }
        }

        // Conflicting unit clauses: the formula is well-formed, and unsatisfiable.
        Err(ErrorKind::Build(BuildError::Unsatisfiable)) => {
            print_stats(&ctx);
            println!("UNSAT");
            std::process::exit(0);
        }

        Err(e) => {
            eprintln!("Error reading {:?}: {e:?}", options.path);
            std::process::exit(1);
        }
    }

    let report = match ctx.solve() {
        Ok(report) => report,
        Err(e) => panic!("Internal error during solve: {e:?}"),
    };

    print_stats(&ctx);

    match report {
        Report::Satisfiable => {
            if let Err(e) = ctx.validate_assignment() {
                eprintln!("Assignment validation failed: {e:?}");
                std::process::exit(3);
            }
            if options.verbosity > 0 {
                println!("c Assignment validated");
            }

            match std::fs::write(&options.assignment_path, ctx.atom_db.assignment_string()) {
                Ok(()) => println!("c solution in {:?}", options.assignment_path),
                Err(_) => eprintln!("Failed to write assignment to {:?}", options.assignment_path),
            }

            println!("{report}");
        }

        Report::Unsatisfiable | Report::Timeout | Report::Unknown => println!("{report}"),
    }
}

fn print_stats(ctx: &Context) {
    let counters = &ctx.counters;
    println!("c statistics:");
    println!("c   learned clauses: {}", counters.learned);
    println!("c   decisions:       {}", counters.decisions);
    println!("c   assignments:     {}", counters.assignments);
    println!("c   restarts:        {}", counters.restarts);
    println!("c   max level:       {}", ctx.trail.max_level);
    println!("c   time:            {:.2?}", counters.time);
}
