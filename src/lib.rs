//! # comma_calc
//!
//! comma_calc parses and calculates simple two-operand arithmetic expressions
//! such as `5,7 / -2`, written with `,` as the decimal separator.
//! Failures carry a chain of causes that can be rendered as a fixed,
//! human-readable report.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the value produced by a successful parse.
///
/// This module declares the `ParsedExpression` record and the `Operator` enum.
/// The record is built by the scanner and consumed by the evaluator.
pub mod ast;
/// Provides the error types for parsing and calculating.
///
/// Errors are plain enums. Each one carries a fixed message, and wrapping
/// errors expose their cause through [`std::error::Error::source`].
///
/// # Responsibilities
/// - Defines one variant per failure mode of the scanner and the evaluator.
/// - Keeps the cause of an operand failure attached to it.
/// - Records the byte offset where scanning stopped.
pub mod error;
/// Scans and evaluates expressions.
///
/// This module ties together the scanner, which turns text into a
/// [`ast::ParsedExpression`], and the evaluator, which calculates it.
pub mod interpreter;
/// Renders errors and results for display.
///
/// # Responsibilities
/// - Formats an error together with its causes as a multi-line report.
/// - Heads reports with the stage the failure happened in.
/// - Formats results independently of the user's locale.
pub mod report;

pub use crate::{
    ast::{Operator, ParsedExpression},
    error::{CalcError, DigitError, Error, NumberError, NumberPart, ParseError},
    interpreter::{evaluator::calculate, scanner::parse},
    report::format_with_causes,
};

/// Parses `text` and calculates its value in one step.
///
/// # Errors
/// Returns `Error::Parse` if the text is malformed, or `Error::Calc` if the
/// expression divides by zero.
///
/// # Examples
/// ```
/// use comma_calc::{CalcError, Error, evaluate};
///
/// let result = evaluate("1,5 * 4").unwrap();
/// assert!((result - 6.0).abs() < 0.001);
///
/// assert_eq!(evaluate("1 / 0"), Err(Error::Calc(CalcError::DivisionByZero)));
/// assert!(matches!(evaluate("1 x 2"), Err(Error::Parse(_))));
/// ```
pub fn evaluate(text: &str) -> Result<f64, Error> {
    let expr = parse(text)?;
    Ok(calculate(&expr)?)
}
