use comma_calc::{DigitError, NumberError, NumberPart, Operator, ParseError, ParsedExpression, parse};

const TOLERANCE: f64 = 0.001;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}");
}

fn assert_parsed(src: &str, left: f64, operator: Operator, right: f64) -> ParsedExpression {
    let expr = parse(src).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"));
    assert_close(expr.left(), left);
    assert_eq!(expr.operator(), operator);
    assert_close(expr.right(), right);
    expr
}

fn right_cause(src: &str) -> NumberError {
    match parse(src) {
        Err(ParseError::RightOperandMalformed { source }) => source,
        other => panic!("Expected a malformed right operand for {src:?}, got {other:?}"),
    }
}

const fn malformed_at(part: NumberPart, position: usize) -> NumberError {
    NumberError::IntegerPartMalformed { part,
                                        source: DigitError::DigitsMissing { position } }
}

#[test]
fn empty_expression_is_error() {
    let err = parse("").unwrap_err();
    assert_eq!(err, ParseError::EmptyExpression);
    assert_eq!(err.to_string(), "expression is null or empty");
    assert_eq!(err.position(), None);
}

#[test]
fn source_text_is_preserved() {
    let expr = assert_parsed("5,7/3,5", 5.7, Operator::Div, 3.5);
    assert_eq!(expr.source_text(), "5,7/3,5");

    let expr = assert_parsed(" 5,7 / 2,0 ", 5.7, Operator::Div, 2.0);
    assert_eq!(expr.source_text(), " 5,7 / 2,0 ");
}

#[test]
fn all_operators() {
    assert_parsed("1+2", 1.0, Operator::Add, 2.0);
    assert_parsed("1-2", 1.0, Operator::Sub, 2.0);
    assert_parsed("1*2", 1.0, Operator::Mul, 2.0);
    assert_parsed("1/2", 1.0, Operator::Div, 2.0);
}

#[test]
fn signs_apply_to_the_whole_number() {
    assert_parsed("-5,7 - 2", -5.7, Operator::Sub, 2.0);
    assert_parsed("-5,5 * - 2", -5.5, Operator::Mul, -2.0);
    assert_parsed("- 0,25+-0,75", -0.25, Operator::Add, -0.75);
    assert_parsed("5--3", 5.0, Operator::Sub, -3.0);
}

#[test]
fn fractional_digits_keep_leading_zeros() {
    assert_parsed("1,05*2,005", 1.05, Operator::Mul, 2.005);
    assert_parsed("0,5 + 0,50", 0.5, Operator::Add, 0.5);
}

#[test]
fn long_digit_runs_are_accepted() {
    let expr = parse("12345678901234567890 + 1").unwrap();
    assert!((expr.left() - 1.234_567_890_123_456_8e19).abs() / 1e19 < 1e-12);
}

#[test]
fn overlong_digit_runs_overflow() {
    let digits = "9".repeat(400);

    let expr = parse(&format!("{digits} + 1")).unwrap();
    assert!(expr.left().is_infinite());

    let expr = parse(&format!("1,{digits} + 1")).unwrap();
    assert!(expr.left().is_nan());
}

#[test]
fn text_after_the_right_operand_is_ignored() {
    let expr = assert_parsed("5 + 3 abc", 5.0, Operator::Add, 3.0);
    assert_eq!(expr.to_string(), "5 + 3");
}

#[test]
fn missing_right_operand() {
    assert_eq!(right_cause("5,7/"), NumberError::NumberMissing { position: 4 });
}

#[test]
fn trailing_blank_is_never_skipped() {
    assert_eq!(right_cause("5,7/ "), malformed_at(NumberPart::Integer, 4));
    assert_eq!(right_cause("5 + "), malformed_at(NumberPart::Integer, 3));
    assert_eq!(right_cause("5,7 /  "), malformed_at(NumberPart::Integer, 6));
}

#[test]
fn missing_operator_reports_missing_right_operand() {
    assert_eq!(right_cause("5"), NumberError::NumberMissing { position: 1 });
    assert_eq!(right_cause("5 "), NumberError::NumberMissing { position: 2 });
}

#[test]
fn missing_right_fraction_digits() {
    let cause = right_cause("5,7/3,");
    assert_eq!(cause, malformed_at(NumberPart::Fractional, 6));
    assert_eq!(cause.to_string(), "fractional part is malformed");
    assert_eq!(cause.position(), 6);
}

#[test]
fn right_operand_without_integer_part() {
    let cause = right_cause("5,7/,3");
    assert_eq!(cause, malformed_at(NumberPart::Integer, 4));
    assert_eq!(cause.to_string(), "integer part is malformed");

    assert_eq!(right_cause("5,7/-"), malformed_at(NumberPart::Integer, 5));
    assert_eq!(right_cause("5,7/--3"), malformed_at(NumberPart::Integer, 5));
}

#[test]
fn integer_and_fraction_failures_differ() {
    assert_ne!(right_cause("5,7/3,"), right_cause("5,7/,3"));
    assert_ne!(parse("5,/3,5").unwrap_err(), parse(",5/3,5").unwrap_err());
}

#[test]
fn malformed_left_operand() {
    let err = parse("x+1").unwrap_err();
    assert_eq!(err.to_string(), "left operand is malformed");
    assert_eq!(err,
               ParseError::LeftOperandMalformed { source: malformed_at(NumberPart::Integer, 0) });

    let err = parse("5,/3,5").unwrap_err();
    assert_eq!(err,
               ParseError::LeftOperandMalformed { source: malformed_at(NumberPart::Fractional, 2) });
    assert_eq!(err.position(), Some(2));

    let err = parse("   ").unwrap_err();
    assert_eq!(err,
               ParseError::LeftOperandMalformed { source: malformed_at(NumberPart::Integer, 2) });
}

#[test]
fn malformed_operand_wins_over_invalid_operator() {
    assert!(matches!(parse("5 x "), Err(ParseError::RightOperandMalformed { .. })));
}

#[test]
fn invalid_operator_names_the_character() {
    let err = parse("5,7 x 2,3").unwrap_err();
    assert_eq!(err,
               ParseError::InvalidOperator { operator: 'x',
                                             position: 4, });
    assert_eq!(err.to_string(), "operator x is invalid");
    assert_eq!(err.position(), Some(4));
}

#[test]
fn blank_before_separator_ends_the_number() {
    let err = parse("- 5 , 5 * 2").unwrap_err();
    assert!(matches!(err, ParseError::InvalidOperator { operator: ',', .. }));
}

#[test]
fn non_ascii_operator_does_not_panic() {
    let err = parse("5 × 3").unwrap_err();
    assert!(matches!(err, ParseError::InvalidOperator { operator: '×', .. }));
}

#[test]
fn display_can_be_parsed_again() {
    for src in ["5,7/3,5", " -0,125 *  8", "1000 - -2,5", "0+0"] {
        let expr = parse(src).unwrap();
        let again = parse(&expr.to_string()).unwrap();
        assert_eq!(again.operator(), expr.operator());
        assert_close(again.left(), expr.left());
        assert_close(again.right(), expr.right());
    }
}
