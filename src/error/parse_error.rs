/// Represents all errors that can occur while parsing an expression.
///
/// Operand failures never stand alone: they always wrap the [`NumberError`]
/// that stopped the scan, reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The expression text was empty.
    #[error("expression is null or empty")]
    EmptyExpression,
    /// The number left of the operator could not be scanned.
    #[error("left operand is malformed")]
    LeftOperandMalformed {
        /// Why the number could not be scanned.
        #[source]
        source: NumberError,
    },
    /// The number right of the operator could not be scanned.
    #[error("right operand is malformed")]
    RightOperandMalformed {
        /// Why the number could not be scanned.
        #[source]
        source: NumberError,
    },
    /// Both operands were scanned but the character between them is not
    /// `+`, `-`, `*` or `/`.
    #[error("operator {operator} is invalid")]
    InvalidOperator {
        /// The offending character.
        operator: char,
        /// Byte offset of the offending character.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset where scanning stopped, if the error is tied to one.
    ///
    /// Operand errors report the position of their cause. An empty
    /// expression has no position.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression => None,
            Self::LeftOperandMalformed { source } | Self::RightOperandMalformed { source } => {
                Some(source.position())
            },
            Self::InvalidOperator { position, .. } => Some(*position),
        }
    }
}

/// Represents the ways scanning a single number can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// Nothing was left to scan where a number was expected.
    #[error("number is missing entirely")]
    NumberMissing {
        /// Byte offset where the number was expected.
        position: usize,
    },
    /// The integer or fractional part of the number could not be scanned.
    #[error("{part} part is malformed")]
    IntegerPartMalformed {
        /// Which part of the number failed.
        part:   NumberPart,
        /// Why the digits could not be scanned.
        #[source]
        source: DigitError,
    },
}

impl NumberError {
    /// Byte offset where scanning stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NumberMissing { position } => *position,
            Self::IntegerPartMalformed { source, .. } => source.position(),
        }
    }
}

/// The two digit runs a number is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberPart {
    /// The digits before the `,` separator.
    Integer,
    /// The digits after the `,` separator.
    Fractional,
}

impl std::fmt::Display for NumberPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Fractional => write!(f, "fractional"),
        }
    }
}

/// Represents a failure to scan a run of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DigitError {
    /// The cursor was at the end of the text or not on a digit.
    #[error("integer part is missing or does not start with a digit")]
    DigitsMissing {
        /// Byte offset where a digit was expected.
        position: usize,
    },
}

impl DigitError {
    /// Byte offset where a digit was expected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DigitsMissing { position } => *position,
        }
    }
}
