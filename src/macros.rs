//! Utility macros for the scanner.
//!
//! This module defines helper macros used by the token catalog and the lexer:
//!
//! - `MK_RULE!` - Creates a catalog `TokenRule` with an anchored, compiled pattern
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the catalog table and the scan loop.

/// Creates a catalog rule whose pattern only matches at the start of the
/// remaining input.
///
/// The pattern is wrapped in `^(?:...)` before compilation, so alternations
/// inside it stay anchored as a whole.
///
/// # Arguments
///
/// * `$name` - The rule name reported as the token type
/// * `$pattern` - The regex source, as a string literal
/// * `$class` - The `TokenClass` of the rule
///
/// # Example
///
/// ```ignore
/// let rule = MK_RULE!("ARROW", r"->", TokenClass::Operator);
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($name:literal, $pattern:literal, $class:expr) => {
        $crate::lexer::tokens::TokenRule {
            name: $name,
            regex: ::regex::Regex::new(concat!("^(?:", $pattern, ")"))
                .expect(concat!("invalid pattern for catalog rule ", $name)),
            class: $class,
        }
    };
}

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$rule` - The catalog rule that matched
/// * `$value` - The matched text
/// * `$id` - The class-qualified `TokenId`
/// * `$span` - The byte span of the match
/// * `$position` - The 1-based position of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(rule, "let", TokenId::Keyword(0), span, position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($rule:expr, $value:expr, $id:expr, $span:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $rule.name,
            class: $rule.class,
            value: String::from($value),
            line: $position.line,
            column: $position.column,
            id: $id,
            span: $span,
        }
    };
}
