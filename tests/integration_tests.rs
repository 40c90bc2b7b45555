//! Integration tests for the public scanning API.
//!
//! These tests drive a whole module through `tokenize` and check the token
//! stream, the per-class lists, the diagnostics and the written reports.

use std::fs;

use hslex::{
    lexer::tokens::TokenId,
    report::report::{
        format_table, write_reports, KEYWORDS_FILE, NAMES_FILE, OPERATORS_FILE,
        PUNCTUATIONS_FILE, RESULT_FILE,
    },
    tokenize, Lexer,
};

const PROGRAM: &str = r#"{-# LANGUAGE ScopedTypeVariables #-}
module Main where

import qualified Data.Map as M

-- | Entry point
main :: IO ()
main = do
  let xs = [1, 2, 3]
  {- print the
     total -}
  print (sum xs >>= pure)
  putStrLn "done"
"#;

#[test]
fn test_scan_full_module() {
    let output = tokenize(PROGRAM);

    assert!(output.diagnostics.is_empty());
    assert_eq!(output.tokens[0].id, TokenId::Preprocessor);
    assert_eq!(output.tokens[0].line, 1);

    let keywords: Vec<&str> = output.keywords.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        keywords,
        vec!["module", "where", "import", "qualified", "as", "do", "let"]
    );

    let main_ids: Vec<String> = output
        .names
        .iter()
        .filter(|t| t.value == "main")
        .map(|t| t.id.to_string())
        .collect();
    assert_eq!(main_ids.len(), 2);
    assert_eq!(main_ids[0], main_ids[1]);

    let print = output.tokens.iter().find(|t| t.value == "print").unwrap();
    assert_eq!((print.line, print.column), (12, 3));

    let done = output.tokens.iter().find(|t| t.kind == "string").unwrap();
    assert_eq!(done.value, "\"done\"");
    assert_eq!((done.line, done.column), (13, 12));
}

#[test]
fn test_fresh_lexer_restarts_ids() {
    let first = Lexer::new("b a").scan_all();
    let second = Lexer::new("a b").scan_all();

    assert_eq!(first.tokens[0].id, TokenId::Name(0));
    assert_eq!(first.tokens[1].id, TokenId::Name(1));
    assert_eq!(second.tokens[0].value, "a");
    assert_eq!(second.tokens[0].id, TokenId::Name(0));
}

#[test]
fn test_diagnostics_do_not_stop_scan() {
    let output = tokenize("x € y\n{- open");

    assert_eq!(output.tokens.len(), 2);
    assert_eq!(
        output
            .diagnostics
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>(),
        vec![
            "Error: unknown character at position 1:3".to_string(),
            "Error: unclosed multiline comment at position 2:1".to_string(),
        ]
    );
}

#[test]
fn test_write_reports() {
    let output = tokenize(PROGRAM);
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("results");

    write_reports(&output, &out_dir).unwrap();

    let result = fs::read_to_string(out_dir.join(RESULT_FILE)).unwrap();
    assert_eq!(result, format_table(&output.tokens));
    assert_eq!(result.lines().count(), output.tokens.len() + 2);

    for (file, tokens) in [
        (KEYWORDS_FILE, &output.keywords),
        (OPERATORS_FILE, &output.operators),
        (NAMES_FILE, &output.names),
        (PUNCTUATIONS_FILE, &output.punctuations),
    ] {
        let written = fs::read_to_string(out_dir.join(file)).unwrap();
        assert_eq!(written, format_table(tokens));
    }
}
