/*!
Error types used in the library.

- Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve.
- Others are external --- e.g. a parse error is returned when a DIMACS input is malformed, and a
  validation error indicates a solver bug which a caller should surface rather than mask.

Names of the error enums --- for the most part --- overlap with the corresponding modules.
*/

use crate::db::ClauseIdx;

/// A union of varied error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error during conflict analysis.
    Analysis(AnalysisError),

    /// An error when building a context.
    Build(BuildError),

    /// An error related to parsing.
    Parse(ParseError),

    /// An error related to BCP.
    BCP(BCPError),

    /// An error from validating an assignment against the formula.
    Validation(ValidationError),
}

/// An error during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// A variable to be resolved on had no antecedent clause.
    MissingAntecedent,

    /// The trail was exhausted without finding a unique implication point.
    Exhausted,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found above decision level zero.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseIdx),

    /// A conflict was found at decision level zero, so the formula is unsatisfiable.
    FundamentalConflict,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clear instance of an unsatisfiable clause, e.g. a pair of conflicting unit clauses.
    Unsatisfiable,

    /// An atom outside the declared variable count of the formula.
    AtomOutOfBounds,

    /// An empty clause was given.
    EmptyClause,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification of a DIMACS input.
    ProblemSpecification,

    /// The problem specification was missing where the formula was expected to begin.
    MissingProblem,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token which is not a (non-zero) literal or clause terminator.
    UnexpectedToken(String),

    /// A literal whose magnitude exceeds the declared variable count.
    LiteralOutOfRange(isize),

    /// The empty clause, identified by its count in the input.
    EmptyClause(usize),

    /// A clause was left unterminated at the end of the input.
    MissingDelimiter,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from validating an assignment against the formula of a context.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationError {
    /// A stored clause with no satisfied literal, identified by index.
    UnsatisfiedClause(ClauseIdx),

    /// A unit clause whose literal is not satisfied.
    UnsatisfiedUnit,
}

impl From<ValidationError> for ErrorKind {
    fn from(e: ValidationError) -> Self {
        ErrorKind::Validation(e)
    }
}
