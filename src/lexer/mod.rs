//! Lexical analysis module.
//!
//! This module contains the scanner that converts Haskell-like source text
//! into a stream of classified tokens. It handles:
//!
//! - The ordered token catalog, matched first-rule-wins
//! - Skipping of line comments, block comments and whitespace
//! - Pragma blocks, emitted as preprocessor tokens
//! - Per-class interning of keywords, operators, names and punctuation
//! - Line/column tracking and recovery from unknown characters

pub mod lexer;
pub mod symbols;
pub mod tokens;
