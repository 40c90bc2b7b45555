use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

use crate::lexer::{lexer::ScanOutput, tokens::Token};

pub const RESULT_FILE: &str = "result.txt";
pub const KEYWORDS_FILE: &str = "keywords.txt";
pub const OPERATORS_FILE: &str = "operators.txt";
pub const NAMES_FILE: &str = "names.txt";
pub const PUNCTUATIONS_FILE: &str = "punctuations.txt";

const RULE_WIDTH: usize = 57;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("could not create report directory {path:?}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not write report {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Renders tokens as a fixed-width table with a header and a rule line.
pub fn format_table(tokens: &[Token]) -> String {
    let mut table = String::new();

    table.push_str(&format!(
        "{:<25} {:<15} {:<5} {:<5} {:<5}\n",
        "Lexeme", "Token type", "Row", "Column", "Id"
    ));
    table.push_str(&"=".repeat(RULE_WIDTH));
    table.push('\n');

    for token in tokens {
        table.push_str(&format!(
            "{:<25} {:<15} {:<5} {:<5} {:<5}\n",
            token.value,
            token.kind,
            token.line,
            token.column,
            token.id.to_string()
        ));
    }

    table
}

fn write_table(dir: &Path, file_name: &str, tokens: &[Token]) -> Result<(), ReportError> {
    let path = dir.join(file_name);
    fs::write(&path, format_table(tokens)).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), tokens = tokens.len(), "report written");
    Ok(())
}

/// Writes the full token stream and the four per-class lists into `dir`,
/// creating it first if needed.
pub fn write_reports(output: &ScanOutput, dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    write_table(dir, RESULT_FILE, &output.tokens)?;
    write_table(dir, KEYWORDS_FILE, &output.keywords)?;
    write_table(dir, OPERATORS_FILE, &output.operators)?;
    write_table(dir, NAMES_FILE, &output.names)?;
    write_table(dir, PUNCTUATIONS_FILE, &output.punctuations)?;

    Ok(())
}
