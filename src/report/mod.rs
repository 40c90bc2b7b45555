//! Plain-text token reports.
//!
//! This module renders token lists as fixed-width tables (lexeme, token
//! type, row, column, id) and writes one report file per token list.

pub mod report;

#[cfg(test)]
mod tests;
