use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A diagnostic recorded while scanning, tied to the position it refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
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
            ErrorImpl::UnknownCharacter { .. } => "UnknownCharacter",
            ErrorImpl::UnclosedMultilineComment => "UnclosedMultilineComment",
            ErrorImpl::UnclosedPragma => "UnclosedPragma",
        }
    }

    pub fn get_tip(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnknownCharacter { character } => format!(
                "Character `{}` is not part of any token, it was skipped",
                character
            ),
            ErrorImpl::UnclosedMultilineComment => String::from(
                "Close the comment with `-}`, the rest of the input was ignored",
            ),
            ErrorImpl::UnclosedPragma => String::from(
                "Close the pragma with `#-}`, the rest of the input was ignored",
            ),
        }
    }

    /// Whether scanning stopped at this diagnostic.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.internal_error, ErrorImpl::UnknownCharacter { .. })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error: {} at position {}:{}",
            self.internal_error, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unknown character")]
    UnknownCharacter { character: char },
    #[error("unclosed multiline comment")]
    UnclosedMultilineComment,
    #[error("unclosed pragma")]
    UnclosedPragma,
}
