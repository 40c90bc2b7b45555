use pretty_assertions::assert_eq;

use super::report::format_table;
use crate::tokenize;

#[test]
fn test_format_empty_table() {
    let table = format_table(&[]);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        format!(
            "{:<25} {:<15} {:<5} {:<5} {:<5}",
            "Lexeme", "Token type", "Row", "Column", "Id"
        )
    );
    assert_eq!(lines[1], "=".repeat(57));
}

#[test]
fn test_format_token_rows() {
    let output = tokenize("let x =\n  1");
    let table = format_table(&output.tokens);
    let lines: Vec<&str> = table.lines().skip(2).collect();

    assert_eq!(
        lines,
        vec![
            format!("{:<25} {:<15} {:<5} {:<5} {:<5}", "let", "let", 1, 1, "K:0"),
            format!("{:<25} {:<15} {:<5} {:<5} {:<5}", "x", "ident", 1, 5, "N:0"),
            format!("{:<25} {:<15} {:<5} {:<5} {:<5}", "=", "ASSIGN", 1, 7, "O:0"),
            format!("{:<25} {:<15} {:<5} {:<5} {:<5}", "1", "integer", 2, 3, "N:1"),
        ]
    );
    assert!(table.ends_with('\n'));
}

#[test]
fn test_format_pragma_row() {
    let output = tokenize("{-# INLINE f #-}");
    let table = format_table(&output.tokens);

    assert!(table.lines().nth(2).unwrap().contains("PREPROCESSOR"));
}
