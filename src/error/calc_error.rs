/// Represents all errors that can occur while calculating a parsed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// The right operand of a division was exactly zero.
    #[error("division by zero is not allowed")]
    DivisionByZero,
}
