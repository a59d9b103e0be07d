use std::fmt::Display;

use thiserror::Error;

use crate::{parser::lookups::Arity, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptyInput => "EmptyInputError",
            ErrorImpl::Formatting => "FormattingError",
            ErrorImpl::UnclosedBlock => "UnclosedBlockError",
            ErrorImpl::EmptyBlock => "EmptyBlockError",
            ErrorImpl::UnrecognizedSymbol { .. } => "UnrecognizedSymbolError",
            ErrorImpl::Position { .. } => "PositionError",
            ErrorImpl::RecursionLimit { .. } => "RecursionLimitError",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptyInput => ErrorTip::None,
            ErrorImpl::Formatting => ErrorTip::Suggestion(String::from(
                "statements must be separated by a line break",
            )),
            ErrorImpl::UnclosedBlock => {
                ErrorTip::Suggestion(String::from("every `start` needs a matching `end`"))
            }
            ErrorImpl::EmptyBlock => ErrorTip::Suggestion(String::from(
                "the body between `start` and `end` has no statements",
            )),
            ErrorImpl::UnrecognizedSymbol { token } => ErrorTip::Suggestion(format!(
                "`{}` does not start an expression, is an operator missing?",
                token
            )),
            ErrorImpl::Position { arity: Arity::Unary } => ErrorTip::Suggestion(String::from(
                "unary operators must come first in their expression",
            )),
            ErrorImpl::Position {
                arity: Arity::Binary,
            } => ErrorTip::Suggestion(String::from(
                "binary operators need an operand on both sides",
            )),
            ErrorImpl::RecursionLimit { limit } => {
                ErrorTip::Suggestion(format!("nesting is limited to {} levels", limit))
            }
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on line {}", self.internal_error, self.position.line())
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("parsing error")]
    EmptyInput,
    #[error("invalid formatting")]
    Formatting,
    #[error("unclosed block")]
    UnclosedBlock,
    #[error("empty block")]
    EmptyBlock,
    #[error("unrecognized symbol in expression")]
    UnrecognizedSymbol { token: String },
    #[error("{arity} operator in incorrect position")]
    Position { arity: Arity },
    #[error("nesting exceeds the limit of {limit} levels")]
    RecursionLimit { limit: usize },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
}
