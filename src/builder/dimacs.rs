/*!
Reading a DIMACS CNF formula into a context.

Lines starting with `c` are comments.
A header `p cnf V C` declares *V* variables and *C* clauses; the variable count sizes every
database and the clause count is an advisory capacity hint.
Thereafter each clause is a whitespace-separated list of non-zero signed integers terminated by
`0`, with magnitudes at most *V* (variable 0 is reserved).

The reader aborts on malformed input --- a bad header, an unexpected token, a literal out of
range, or an empty clause --- before any search starts.
Conflicting unit clauses are not a parse error: the formula is well-formed and unsatisfiable, and
the [Unsatisfiable](crate::types::err::BuildError::Unsatisfiable) error from addition carries that
verdict to the caller.
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{clause::CClause, literal::CLiteral},
    types::err::{self, ParseError},
};

use std::io::BufRead;

/// Details of a parsed formula.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParserInfo {
    /// The variable count declared by the header.
    pub expected_atoms: usize,

    /// The clause count declared by the header.
    pub expected_clauses: usize,

    /// A count of the clauses read.
    pub added_clauses: usize,
}

impl Context {
    /// Reads a DIMACS file into the context.
    ///
    /// ```rust
    /// # use tern_sat::context::Context;
    /// # use tern_sat::config::Config;
    /// # use std::io::Write;
    /// let mut ctx = Context::from_config(Config::default());
    ///
    /// let mut dimacs = vec![];
    /// let _ = dimacs.write(b"
    /// c A pair of clauses over a pair of variables.
    /// p cnf 2 2
    ///  1 -2 0
    /// -1  2 0
    /// ");
    ///
    /// assert!(ctx.read_dimacs(dimacs.as_slice()).is_ok());
    /// ```
    pub fn read_dimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut buffer = String::default();
        let mut clause_buffer: CClause = Vec::default();
        let mut info = ParserInfo::default();

        let mut lines = 0;

        // First phase: read until the formula begins.
        'preamble_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => return Ok(info),
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'preamble_loop,

                Some('p') => {
                    let mut details = buffer.split_whitespace();
                    if details.next() != Some("p") || details.next() != Some("cnf") {
                        return Err(err::ErrorKind::from(ParseError::ProblemSpecification));
                    }

                    let atoms: usize = match details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                    };

                    let clauses: usize = match details.next().map(str::parse) {
                        Some(Ok(count)) => count,
                        _ => return Err(err::ErrorKind::from(ParseError::ProblemSpecification)),
                    };

                    if atoms == 0 || clauses == 0 {
                        return Err(err::ErrorKind::from(ParseError::ProblemSpecification));
                    }

                    log::info!(target: targets::PARSE, "Expecting {atoms} atoms and {clauses} clauses");

                    self.initialise(atoms, clauses);
                    info.expected_atoms = atoms;
                    info.expected_clauses = clauses;

                    break 'preamble_loop;
                }

                Some(_) => return Err(err::ErrorKind::from(ParseError::MissingProblem)),
            }
        }

        // Second phase: read until the formula ends.
        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break 'formula_loop,
                Ok(_) => lines += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(lines))),
            }

            match buffer.trim_start().chars().next() {
                None | Some('c') => continue 'formula_loop,
                Some('%') => break 'formula_loop,
                _ => {}
            }

            for item in buffer.split_whitespace() {
                match item {
                    "0" => {
                        let clause = std::mem::take(&mut clause_buffer);
                        if clause.is_empty() {
                            return Err(err::ErrorKind::from(ParseError::EmptyClause(
                                info.added_clauses + 1,
                            )));
                        }
                        self.add_clause(clause)?;
                        info.added_clauses += 1;
                    }

                    _ => {
                        let int: i32 = match item.parse() {
                            Ok(int) => int,
                            Err(_) => {
                                return Err(err::ErrorKind::from(ParseError::UnexpectedToken(
                                    item.to_owned(),
                                )))
                            }
                        };

                        if int.unsigned_abs() as usize > info.expected_atoms {
                            return Err(err::ErrorKind::from(ParseError::LiteralOutOfRange(
                                int as isize,
                            )));
                        }

                        clause_buffer.push(CLiteral::from(int));
                    }
                }
            }
        }

        if !clause_buffer.is_empty() {
            return Err(err::ErrorKind::from(ParseError::MissingDelimiter));
        }

        self.clause_db.seal_originals();
        self.activity_db.request_reset();

        Ok(info)
    }
}

#[cfg(test)]
mod dimacs_parser_tests {
    use std::io::Write;

    use super::*;
    use crate::{config::Config, types::err::ErrorKind};

    #[test]
    fn bad_delimiter() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 2 1\n1  2");

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::MissingDelimiter))
        );
    }

    #[test]
    fn bad_problem_spec() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(
            b"
p cnf
  1  2 0",
        );

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::ProblemSpecification))
        );
    }

    #[test]
    fn missing_problem() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"1 2 0\n");

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::MissingProblem))
        );
    }

    #[test]
    fn empty_clause() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 2 2\n1 2 0\n0\n");

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::EmptyClause(2)))
        );
    }

    #[test]
    fn literal_out_of_range() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"p cnf 2 1\n1 -3 0\n");

        assert_eq!(
            ctx.read_dimacs(dimacs.as_slice()),
            Err(ErrorKind::Parse(ParseError::LiteralOutOfRange(-3)))
        );
    }

    #[test]
    fn comments_and_whitespace() {
        let mut ctx = Context::from_config(Config::default());

        let mut dimacs = vec![];
        let _ = dimacs.write(b"c a comment\nc another\np cnf 3 2\n\t 1 \t2 0\nc mid-formula\n -2  3 0\n");

        let info = ctx.read_dimacs(dimacs.as_slice());
        assert_eq!(
            info,
            Ok(ParserInfo {
                expected_atoms: 3,
                expected_clauses: 2,
                added_clauses: 2,
            })
        );
    }
}
