#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod report;

extern crate regex;

pub use lexer::lexer::{tokenize, Lexer, ScanOutput};

/// A 1-based line and column. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

/// Byte range of a match in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Converts a byte offset into a line and column by counting newlines from
/// the start of `source`.
///
/// Returns `None` when `offset` is outside `[0, source.len())` or does not
/// fall on a character boundary.
pub fn position_of(source: &str, offset: usize) -> Option<Position> {
    if offset >= source.len() || !source.is_char_boundary(offset) {
        return None;
    }

    let before = &source[..offset];
    let line = 1 + before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |newline| newline + 1);
    let column = 1 + before[line_start..].chars().count();

    Some(Position { line, column })
}

#[cfg(test)]
mod tests {
    use super::{position_of, Position};

    #[test]
    fn test_position_of_first_line() {
        assert_eq!(position_of("let x = 1", 0), Some(Position::new(1, 1)));
        assert_eq!(position_of("let x = 1", 4), Some(Position::new(1, 5)));
    }

    #[test]
    fn test_position_of_after_newlines() {
        let source = "a\nbc\n\ndef";
        assert_eq!(position_of(source, 1), Some(Position::new(1, 2)));
        assert_eq!(position_of(source, 2), Some(Position::new(2, 1)));
        assert_eq!(position_of(source, 5), Some(Position::new(3, 1)));
        assert_eq!(position_of(source, 8), Some(Position::new(4, 3)));
    }

    #[test]
    fn test_position_of_counts_characters() {
        let source = "é x";
        // 'é' is two bytes wide
        assert_eq!(position_of(source, 3), Some(Position::new(1, 3)));
        assert_eq!(position_of(source, 1), None);
    }

    #[test]
    fn test_position_of_out_of_range() {
        assert_eq!(position_of("abc", 3), None);
        assert_eq!(position_of("", 0), None);
    }
}
