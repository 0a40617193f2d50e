use thiserror::Error;

/// Failure while turning raw input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A number contained more than one `.`.
    #[error("invalid decimal point")]
    InvalidDecimalPoint { position: usize },

    /// A number consisted of a lone `.`.
    #[error("invalid number")]
    InvalidNumber { position: usize },

    #[error("disallowed character: {character}")]
    DisallowedCharacter { character: char, position: usize },
}

impl LexError {
    /// Byte offset into the input where the offending text starts.
    pub fn position(&self) -> usize {
        match self {
            LexError::InvalidDecimalPoint { position }
            | LexError::InvalidNumber { position }
            | LexError::DisallowedCharacter { position, .. } => *position,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("mismatched parentheses")]
    MismatchedParentheses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Operand stack underflow/overflow or a non-finite operand.
    #[error("invalid expression")]
    InvalidExpression,

    #[error("division by zero")]
    DivisionByZero,
}

/// Error returned by [`crate::evaluate`], tagged with the stage that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Rejected edits to the calculator input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("input length limit ({max} characters)")]
    TooLong { max: usize },

    #[error("an operator needs a number in front of it")]
    MissingOperand,
}
