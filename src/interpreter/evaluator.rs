use crate::{
    ast::{Operator, ParsedExpression},
    error::CalcError,
};

/// Result type used by the evaluator.
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculates the value of a parsed expression.
///
/// The operator is applied to the two operands in `f64` arithmetic. A division
/// whose right operand compares equal to zero (this includes `-0.0`) is
/// rejected rather than producing an infinity or NaN.
///
/// # Parameters
/// - `expr`: A successfully parsed expression.
///
/// # Returns
/// The numeric result.
///
/// # Errors
/// `CalcError::DivisionByZero` if `expr` divides by zero.
///
/// # Example
/// ```
/// use comma_calc::{calculate, error::CalcError, parse};
///
/// let expr = parse("-5,7 - 2").unwrap();
/// assert!((calculate(&expr).unwrap() - -7.7).abs() < 0.001);
///
/// let expr = parse("5,7 / 0").unwrap();
/// assert_eq!(calculate(&expr), Err(CalcError::DivisionByZero));
/// ```
pub fn calculate(expr: &ParsedExpression) -> CalcResult<f64> {
    let (left, right) = (expr.left(), expr.right());

    let result = match expr.operator() {
        Operator::Add => left + right,
        Operator::Sub => left - right,
        Operator::Mul => left * right,
        Operator::Div => {
            if right == 0.0 {
                tracing::debug!(left, "rejected division by zero");
                return Err(CalcError::DivisionByZero);
            }
            left / right
        },
    };

    tracing::debug!(left, operator = %expr.operator(), right, result, "calculated expression");
    Ok(result)
}
