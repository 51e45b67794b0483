use std::fmt;

/// Error taxonomy for failed calculations.
///
/// Every failure coming out of the evaluation engine is classified into one
/// of these categories; the evaluator's raw message never reaches the user.
/// Editing operations cannot fail at all, so this type only surfaces from
/// `calculate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Division by zero, or the evaluator produced an infinite value
    DivisionByZero,

    /// The expression references an unknown identifier
    UndefinedSymbol,

    /// Malformed token sequence
    Syntax,

    /// An operator or function is missing a required operand
    MissingValue,

    /// Parenthesis count mismatch
    UnbalancedParentheses,

    /// Fallback for any other evaluator failure
    Calculation,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "Division by zero"),
            CalcError::UndefinedSymbol => write!(f, "Undefined symbol"),
            CalcError::Syntax => write!(f, "Syntax error"),
            CalcError::MissingValue => write!(f, "Missing value"),
            CalcError::UnbalancedParentheses => write!(f, "Unbalanced parentheses"),
            CalcError::Calculation => write!(f, "Calculation error"),
        }
    }
}

impl std::error::Error for CalcError {}
