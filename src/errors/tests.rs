//! Unit tests for scanner diagnostics.

use crate::errors::errors::{Error, ErrorImpl};
use crate::Position;

#[test]
fn test_unknown_character_message() {
    let error = Error::new(
        ErrorImpl::UnknownCharacter { character: '€' },
        Position::new(3, 7),
    );

    assert_eq!(error.get_error_name(), "UnknownCharacter");
    assert_eq!(
        error.to_string(),
        "Error: unknown character at position 3:7"
    );
    assert!(!error.is_terminal());
}

#[test]
fn test_unclosed_comment_message() {
    let error = Error::new(ErrorImpl::UnclosedMultilineComment, Position::new(1, 1));

    assert_eq!(error.get_error_name(), "UnclosedMultilineComment");
    assert_eq!(
        error.to_string(),
        "Error: unclosed multiline comment at position 1:1"
    );
    assert!(error.is_terminal());
}

#[test]
fn test_unclosed_pragma_message() {
    let error = Error::new(ErrorImpl::UnclosedPragma, Position::new(2, 5));

    assert_eq!(error.get_error_name(), "UnclosedPragma");
    assert_eq!(error.to_string(), "Error: unclosed pragma at position 2:5");
    assert!(error.is_terminal());
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnclosedPragma, Position::new(4, 2));

    assert_eq!(error.get_position().line, 4);
    assert_eq!(error.get_position().column, 2);
    assert_eq!(error.get_kind(), &ErrorImpl::UnclosedPragma);
}

#[test]
fn test_error_tip_mentions_character() {
    let error = Error::new(
        ErrorImpl::UnknownCharacter { character: '§' },
        Position::new(1, 1),
    );

    assert!(error.get_tip().contains('§'));
}

#[test]
fn test_error_tip_for_terminal_errors() {
    let comment = Error::new(ErrorImpl::UnclosedMultilineComment, Position::new(1, 1));
    let pragma = Error::new(ErrorImpl::UnclosedPragma, Position::new(1, 1));

    assert!(comment.get_tip().contains("-}"));
    assert!(pragma.get_tip().contains("#-}"));
}
