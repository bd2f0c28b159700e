/// The evaluator module computes the value of a parsed expression.
///
/// It applies the operator of a [`crate::ast::ParsedExpression`] to its two
/// operands. Division by zero is the only failure it can report, since a
/// parsed expression is always well formed.
pub mod evaluator;
/// The scanner module turns raw expression text into a parsed expression.
///
/// Scanning is done by hand, one character at a time, over a cursor that
/// never leaves this module.
///
/// # Responsibilities
/// - Skips blanks, scans signed numbers with a `,` decimal separator and
///   picks up the operator.
/// - Stops at the first failure and wraps it in an operand-level error so the
///   cause chain is preserved.
/// - Builds the immutable [`crate::ast::ParsedExpression`] once everything
///   was scanned.
pub mod scanner;
