use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::{Span, MK_RULE};

/// Opening marker of a pragma block.
pub const PRAGMA_OPEN: &str = "{-#";
/// Opening marker of a nested-style block comment.
pub const BLOCK_COMMENT_OPEN: &str = "{-";
/// Closing marker of a block comment.
pub const BLOCK_COMMENT_CLOSE: &str = "-}";
/// Marker starting a comment that runs to the end of the line.
pub const LINE_COMMENT: &str = "--";

lazy_static! {
    /// Pragma rule, also consulted directly by the lexer when it sees `{-#`.
    pub static ref PRAGMA_RULE: TokenRule =
        MK_RULE!("PRAGMA", r"\{-#[\s\S]*?#-\}", TokenClass::Preprocessor);

    /// The token catalog. Order is priority: the first rule that matches a
    /// non-empty prefix wins, so longer literals sit before their prefixes.
    pub static ref TOKEN_RULES: Vec<TokenRule> = vec![
        // Keywords. Word boundaries are ASCII, like the identifier rules.
        MK_RULE!("let", r"(?-u:\b)let(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("in", r"(?-u:\b)in(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("where", r"(?-u:\b)where(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("if", r"(?-u:\b)if(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("then", r"(?-u:\b)then(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("else", r"(?-u:\b)else(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("case", r"(?-u:\b)case(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("of", r"(?-u:\b)of(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("data", r"(?-u:\b)data(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("type", r"(?-u:\b)type(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("class", r"(?-u:\b)class(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("instance", r"(?-u:\b)instance(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("deriving", r"(?-u:\b)deriving(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("do", r"(?-u:\b)do(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("module", r"(?-u:\b)module(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("import", r"(?-u:\b)import(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("as", r"(?-u:\b)as(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("hiding", r"(?-u:\b)hiding(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("qualified", r"(?-u:\b)qualified(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("infix", r"(?-u:\b)infix(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("infixl", r"(?-u:\b)infixl(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("infixr", r"(?-u:\b)infixr(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("foreign", r"(?-u:\b)foreign(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("export", r"(?-u:\b)export(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("safe", r"(?-u:\b)safe(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("unsafe", r"(?-u:\b)unsafe(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("mdo", r"(?-u:\b)mdo(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("family", r"(?-u:\b)family(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("role", r"(?-u:\b)role(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("group", r"(?-u:\b)group(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("pattern", r"(?-u:\b)pattern(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("static", r"(?-u:\b)static(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("stock", r"(?-u:\b)stock(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("anyclass", r"(?-u:\b)anyclass(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("via", r"(?-u:\b)via(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("default", r"(?-u:\b)default(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("forall", r"(?-u:\b)forall(?-u:\b)", TokenClass::Keyword),
        MK_RULE!("newtype", r"(?-u:\b)newtype(?-u:\b)", TokenClass::Keyword),

        // Operators
        MK_RULE!("DOUBLE_COLON", r"::", TokenClass::Operator),
        MK_RULE!("ARROW", r"->", TokenClass::Operator),
        MK_RULE!("FAT_ARROW", r"=>", TokenClass::Operator),
        MK_RULE!("EQUALS", r"==", TokenClass::Operator),
        MK_RULE!("NOT_EQUALS", r"/=", TokenClass::Operator),
        MK_RULE!("BIND", r">>=", TokenClass::Operator),
        MK_RULE!("RIGHT_SHIFT", r">>", TokenClass::Operator),
        MK_RULE!("LEFT_SHIFT", r"<<", TokenClass::Operator),
        MK_RULE!("REVERSE_BIND", r"=<<", TokenClass::Operator),
        MK_RULE!("FUNCTOR_APPLY", r"<\$>", TokenClass::Operator),
        MK_RULE!("APPLICATIVE_APPLY", r"<\*>", TokenClass::Operator),
        MK_RULE!("ALTERNATIVE", r"<\|>", TokenClass::Operator),
        MK_RULE!("CONCAT", r"\+\+", TokenClass::Operator),
        MK_RULE!("INDEX", r"!!", TokenClass::Operator),
        MK_RULE!("COLON", r":", TokenClass::Operator),
        MK_RULE!("ASSIGN", r"=", TokenClass::Operator),
        MK_RULE!("PLUS", r"\+", TokenClass::Operator),
        MK_RULE!("MINUS", r"-", TokenClass::Operator),
        MK_RULE!("MULTIPLY", r"\*", TokenClass::Operator),
        MK_RULE!("DIVIDE", r"/", TokenClass::Operator),
        MK_RULE!("LESS", r"<", TokenClass::Operator),
        MK_RULE!("GREATER", r">", TokenClass::Operator),
        MK_RULE!("AND", r"&&", TokenClass::Operator),
        MK_RULE!("OR", r"\|\|", TokenClass::Operator),
        MK_RULE!("NOT", r"!", TokenClass::Operator),

        // Variables and constructors
        MK_RULE!("ident", r"[a-z_][a-zA-Z0-9_']*", TokenClass::Variable),
        MK_RULE!("constructor", r"[A-Z][a-zA-Z0-9_']*", TokenClass::Constructor),

        // Constants. Float before integer and triple quotes before double
        // quotes, or the longer literal would be split by the shorter rule.
        MK_RULE!("float", r"[0-9]+\.[0-9]+", TokenClass::Constant),
        MK_RULE!("integer", r"[0-9]+", TokenClass::Constant),
        MK_RULE!("multiline_string", r#""""[\s\S]*?""""#, TokenClass::Constant),
        MK_RULE!("string", r#""[^"]*""#, TokenClass::Constant),
        MK_RULE!("char", r"'[^']'", TokenClass::Constant),

        // Punctuation
        MK_RULE!("DOT", r"\.", TokenClass::Punctuation),
        MK_RULE!("COMMA", r",", TokenClass::Punctuation),
        MK_RULE!("SEMICOLON", r";", TokenClass::Punctuation),
        MK_RULE!("LPAREN", r"\(", TokenClass::Punctuation),
        MK_RULE!("RPAREN", r"\)", TokenClass::Punctuation),
        MK_RULE!("LBRACE", r"\{", TokenClass::Punctuation),
        MK_RULE!("RBRACE", r"\}", TokenClass::Punctuation),
        MK_RULE!("LBRACKET", r"\[", TokenClass::Punctuation),
        MK_RULE!("RBRACKET", r"\]", TokenClass::Punctuation),
        MK_RULE!("BACKTICK", r"`", TokenClass::Punctuation),
        MK_RULE!("BACKSLASH", r"\\", TokenClass::Punctuation),
        MK_RULE!("AT", r"@", TokenClass::Punctuation),
        MK_RULE!("HASH", r"#", TokenClass::Punctuation),
        MK_RULE!("DOLLAR", r"\$", TokenClass::Punctuation),
        MK_RULE!("PERCENT", r"%", TokenClass::Punctuation),
        MK_RULE!("CARET", r"\^", TokenClass::Punctuation),
        MK_RULE!("AMPERSAND", r"&", TokenClass::Punctuation),
        MK_RULE!("PIPE", r"\|", TokenClass::Punctuation),
        MK_RULE!("QUESTION", r"\?", TokenClass::Punctuation),
        MK_RULE!("TILDE", r"~", TokenClass::Punctuation),

        // Skipped. Comments are stripped by the lexer before the catalog is
        // consulted, so in practice only whitespace reaches these.
        MK_RULE!("SPACE", r"[\t\n\f\r ]", TokenClass::Skip),
        MK_RULE!("COMMENT", r"--.*|\{-[\s\S]*?-\}", TokenClass::Skip),

        // Preprocessor
        PRAGMA_RULE.clone(),
    ];
}

/// Classification of a catalog rule.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenClass {
    Keyword,
    Operator,
    Variable,
    Constructor,
    Constant,
    Punctuation,
    Skip,
    Preprocessor,
}

impl TokenClass {
    /// The interning namespace for this class, if tokens of the class are
    /// interned at all. Variables, constructors and constants share `Name`.
    pub fn symbol_kind(&self) -> Option<SymbolKind> {
        match self {
            TokenClass::Keyword => Some(SymbolKind::Keyword),
            TokenClass::Operator => Some(SymbolKind::Operator),
            TokenClass::Variable | TokenClass::Constructor | TokenClass::Constant => {
                Some(SymbolKind::Name)
            }
            TokenClass::Punctuation => Some(SymbolKind::Punctuation),
            TokenClass::Skip | TokenClass::Preprocessor => None,
        }
    }
}

impl Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The four interning namespaces.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SymbolKind {
    Keyword,
    Operator,
    Name,
    Punctuation,
}

#[derive(Debug, Clone)]
pub struct TokenRule {
    pub name: &'static str,
    pub regex: Regex,
    pub class: TokenClass,
}

impl TokenRule {
    /// Returns the non-empty prefix of `text` this rule matches, if any.
    pub fn try_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex
            .find(text)
            .filter(|m| m.start() == 0 && !m.as_str().is_empty())
            .map(|m| m.as_str())
    }
}

/// Consults the catalog in order against `text` and returns the first rule
/// that matches, together with the matched prefix.
pub fn match_at(text: &str) -> Option<(&'static TokenRule, &str)> {
    TOKEN_RULES
        .iter()
        .find_map(|rule| rule.try_match(text).map(|matched| (rule, matched)))
}

/// Class-qualified token identifier.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenId {
    Keyword(usize),
    Operator(usize),
    Name(usize),
    Punctuation(usize),
    Preprocessor,
}

impl TokenId {
    pub fn new(kind: SymbolKind, index: usize) -> Self {
        match kind {
            SymbolKind::Keyword => TokenId::Keyword(index),
            SymbolKind::Operator => TokenId::Operator(index),
            SymbolKind::Name => TokenId::Name(index),
            SymbolKind::Punctuation => TokenId::Punctuation(index),
        }
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenId::Keyword(n) => write!(f, "K:{}", n),
            TokenId::Operator(n) => write!(f, "O:{}", n),
            TokenId::Name(n) => write!(f, "N:{}", n),
            TokenId::Punctuation(n) => write!(f, "P:{}", n),
            TokenId::Preprocessor => write!(f, "PREPROCESSOR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Name of the catalog rule that produced this token.
    pub kind: &'static str,
    pub class: TokenClass,
    pub value: String,
    pub line: usize,
    pub column: usize,
    pub id: TokenId,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) at {}:{} [{}]",
            self.kind, self.value, self.line, self.column, self.id
        )
    }
}
