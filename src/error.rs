/// Parsing errors.
///
/// Defines the errors raised while scanning an expression. Operand-level
/// errors wrap the number-level error that caused them, so a failure always
/// carries its full cause chain.
pub mod parse_error;
/// Calculation errors.
///
/// Contains the errors raised while evaluating a successfully parsed
/// expression. Division by zero is the only one.
pub mod calc_error;

pub use calc_error::CalcError;
pub use parse_error::{DigitError, NumberError, NumberPart, ParseError};

/// Any failure of a full parse-then-calculate run.
///
/// Both `Display` and `source` pass through to the wrapped error, so reports
/// built from an `Error` look exactly like reports built from the inner one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The expression could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was parsed but could not be calculated.
    #[error(transparent)]
    Calc(#[from] CalcError),
}
