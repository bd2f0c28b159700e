use std::fmt;

/// Represents one of the four binary operators an expression may use.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl Operator {
    /// Maps a source character onto its operator.
    ///
    /// # Returns
    /// - `Some(Operator)` for `+`, `-`, `*` and `/`.
    /// - `None` for every other character.
    ///
    /// # Example
    /// ```
    /// use comma_calc::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol('x'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The result of a successful parse.
///
/// A `ParsedExpression` is only ever built once both operands were scanned and
/// the operator was validated, so holding one is proof that the source text
/// was well formed. It is immutable; the fields are exposed through read-only
/// accessors so a presentation layer can display each part on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpression {
    source_text: String,
    left:        f64,
    operator:    Operator,
    right:       f64,
}

impl ParsedExpression {
    pub(crate) fn new(source_text: &str, left: f64, operator: Operator, right: f64) -> Self {
        Self { source_text: source_text.to_string(),
               left,
               operator,
               right }
    }

    /// The text that was parsed, preserved verbatim.
    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    /// The operand on the left of the operator.
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.left
    }

    /// The operand on the right of the operator.
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.right
    }

    /// The operator between the two operands.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }
}

/// Writes the expression back in the grammar the scanner accepts.
///
/// Operands are printed with Rust's locale-independent float formatting and the
/// decimal point is swapped for `,`, so the output can be fed to
/// [`crate::parse`] again.
///
/// # Example
/// ```
/// use comma_calc::parse;
///
/// let expr = parse("  -5,25*  2 ").unwrap();
/// assert_eq!(expr.to_string(), "-5,25 * 2");
/// ```
impl fmt::Display for ParsedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{} {} {}",
               with_decimal_comma(self.left),
               self.operator,
               with_decimal_comma(self.right))
    }
}

fn with_decimal_comma(value: f64) -> String {
    value.to_string().replace('.', ",")
}
