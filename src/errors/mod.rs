//! Diagnostics produced by the scanner.
//!
//! This module defines the error values collected during a scan. It includes:
//!
//! - Error structures with source position information
//! - The diagnostic kinds (unknown character, unclosed comment, unclosed pragma)
//! - Error formatting and display functionality
//! - Helpful suggestions for each kind

pub mod errors;

#[cfg(test)]
mod tests;
