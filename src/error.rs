use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    EmptyInput,
    InvalidNumber,
    InsufficientTokens,
    InvalidLeftOperand,
    InvalidOperator,
    InvalidRightOperand,
    TooManyTokens,
}

impl Error {
    pub const fn description(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Input is empty",
            Self::InvalidNumber => "Invalid number",
            Self::InsufficientTokens => "Missing a number or an operator",
            Self::InvalidLeftOperand => "Invalid left operand",
            Self::InvalidOperator => "Invalid operator",
            Self::InvalidRightOperand => "Invalid right operand",
            Self::TooManyTokens => "Too many numbers or operators",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl std::error::Error for Error {}
