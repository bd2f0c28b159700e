/// Forward-only read position over the expression text.
mod cursor;

use cursor::Cursor;

use crate::{
    ast::{Operator, ParsedExpression},
    error::{DigitError, NumberError, NumberPart, ParseError},
};

/// Result type used by the scanner.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses an expression of the form `left operator right`.
///
/// Grammar:
/// ```text
///     expression := blanks number blanks operator blanks number blanks
///     number     := ["-" blanks] digits ["," digits]
///     operator   := "+" | "-" | "*" | "/"
/// ```
/// Blanks are space characters only and the decimal separator is `,`.
///
/// Scanning runs left to right and stops at the first failure. The operator
/// character is taken as-is when it is reached and only validated once both
/// operands were scanned, so a malformed operand is reported before a bad
/// operator. Anything after the trailing blanks is not inspected.
///
/// # Parameters
/// - `text`: The raw expression.
///
/// # Returns
/// The parsed expression, holding a copy of `text`.
///
/// # Errors
/// - `EmptyExpression` if `text` is empty.
/// - `LeftOperandMalformed` or `RightOperandMalformed`, wrapping the
///   [`NumberError`] that stopped the scan.
/// - `InvalidOperator` if the operator is not one of `+ - * /`.
///
/// # Example
/// ```
/// use comma_calc::{ast::Operator, error::ParseError, parse};
///
/// let expr = parse(" 5,7 / 2,0 ").unwrap();
/// assert_eq!(expr.left(), 5.7);
/// assert_eq!(expr.operator(), Operator::Div);
/// assert_eq!(expr.right(), 2.0);
///
/// assert!(matches!(parse("5,7/"), Err(ParseError::RightOperandMalformed { .. })));
/// ```
pub fn parse(text: &str) -> ParseResult<ParsedExpression> {
    if text.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let mut cursor = Cursor::new(text);

    cursor.skip_blanks();
    let left =
        scan_number(&mut cursor).map_err(|source| ParseError::LeftOperandMalformed { source })?;

    cursor.skip_blanks();
    let operator_pos = cursor.pos();
    // Nothing after the left operand leaves no right operand to scan either.
    let Some(symbol) = cursor.bump_char() else {
        let source = NumberError::NumberMissing { position: operator_pos };
        return Err(ParseError::RightOperandMalformed { source });
    };
    tracing::trace!(position = operator_pos, %symbol, "operator candidate");

    cursor.skip_blanks();
    let right =
        scan_number(&mut cursor).map_err(|source| ParseError::RightOperandMalformed { source })?;
    cursor.skip_blanks();

    let operator = Operator::from_symbol(symbol).ok_or(ParseError::InvalidOperator { operator: symbol,
                                                                                     position: operator_pos, })?;

    tracing::debug!(left, %operator, right, "parsed expression");
    Ok(ParsedExpression::new(text, left, operator, right))
}

/// Scans one signed decimal number.
///
/// A leading `-` may be separated from the digits by blanks. The fractional
/// part, if the `,` separator is present, must start with a digit too. Its
/// value is `digits / 10^count`; a fractional run long enough to overflow
/// yields NaN. The sign applies to the combined magnitude.
///
/// # Errors
/// - `NumberMissing` if the cursor is already at the end of the text.
/// - `IntegerPartMalformed` if the integer or fractional part does not start
///   with a digit. The failing part is recorded and the digit-level error is
///   kept as its cause.
fn scan_number(cursor: &mut Cursor<'_>) -> Result<f64, NumberError> {
    if cursor.is_at_end() {
        return Err(NumberError::NumberMissing { position: cursor.pos() });
    }

    cursor.skip_blanks();
    let negative = cursor.eat(b'-');
    if negative {
        cursor.skip_blanks();
    }

    let (mut magnitude, _) = cursor.scan_integer().map_err(malformed(NumberPart::Integer))?;

    if cursor.eat(b',') {
        let (fraction, digits) = cursor.scan_integer().map_err(malformed(NumberPart::Fractional))?;
        magnitude += fraction / 10_f64.powi(digits);
    }

    Ok(if negative { -magnitude } else { magnitude })
}

fn malformed(part: NumberPart) -> impl FnOnce(DigitError) -> NumberError {
    move |source| NumberError::IntegerPartMalformed { part, source }
}
