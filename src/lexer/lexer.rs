use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_TOKEN,
};

use super::{
    symbols::SymbolTables,
    tokens::{
        match_at, SymbolKind, Token, TokenClass, TokenId, TokenRule, BLOCK_COMMENT_CLOSE,
        BLOCK_COMMENT_OPEN, LINE_COMMENT, PRAGMA_OPEN, PRAGMA_RULE,
    },
};

/// Running line/column counter. Gives the same answer as
/// [`crate::position_of`] as long as offsets never move backwards.
#[derive(Debug, Clone)]
struct LineTracker {
    offset: usize,
    line: usize,
    column: usize,
}

impl LineTracker {
    fn new() -> Self {
        LineTracker {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    fn advance_to(&mut self, source: &str, offset: usize) -> Position {
        debug_assert!(offset >= self.offset, "line tracker moved backwards");

        for ch in source[self.offset..offset].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = offset;

        Position::new(self.line, self.column)
    }
}

/// Everything a finished scan produced.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub names: Vec<Token>,
    pub keywords: Vec<Token>,
    pub operators: Vec<Token>,
    pub punctuations: Vec<Token>,
    pub diagnostics: Vec<Error>,
    pub symbols: SymbolTables,
}

impl ScanOutput {
    pub fn tokens_of(&self, kind: SymbolKind) -> &[Token] {
        match kind {
            SymbolKind::Keyword => &self.keywords,
            SymbolKind::Operator => &self.operators,
            SymbolKind::Name => &self.names,
            SymbolKind::Punctuation => &self.punctuations,
        }
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Single-use scanner over one source text.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    tracker: LineTracker,
    symbols: SymbolTables,
    tokens: Vec<Token>,
    names: Vec<Token>,
    keywords: Vec<Token>,
    operators: Vec<Token>,
    punctuations: Vec<Token>,
    diagnostics: Vec<Error>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            tracker: LineTracker::new(),
            symbols: SymbolTables::new(),
            tokens: vec![],
            names: vec![],
            keywords: vec![],
            operators: vec![],
            punctuations: vec![],
            diagnostics: vec![],
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn position(&mut self) -> Position {
        self.tracker.advance_to(self.source, self.pos)
    }

    fn skip_to_end(&mut self) {
        self.pos = self.source.len();
    }

    fn record(&mut self, error_impl: ErrorImpl) {
        let position = self.position();
        let error = Error::new(error_impl, position);
        debug!(%error, "scan diagnostic");
        self.diagnostics.push(error);
    }

    fn list_mut(&mut self, kind: SymbolKind) -> &mut Vec<Token> {
        match kind {
            SymbolKind::Keyword => &mut self.keywords,
            SymbolKind::Operator => &mut self.operators,
            SymbolKind::Name => &mut self.names,
            SymbolKind::Punctuation => &mut self.punctuations,
        }
    }

    fn commit(&mut self, rule: &TokenRule, matched: &str) {
        let position = self.position();
        let span = Span {
            start: self.pos,
            end: self.pos + matched.len(),
        };

        match rule.class.symbol_kind() {
            Some(kind) => {
                let id = self.symbols.intern(kind, matched);
                let token = MK_TOKEN!(rule, matched, id, span, position);
                trace!(%token, "token");
                self.list_mut(kind).push(token.clone());
                self.tokens.push(token);
            }
            None if rule.class == TokenClass::Preprocessor => {
                let token = MK_TOKEN!(rule, matched, TokenId::Preprocessor, span, position);
                trace!(%token, "token");
                self.tokens.push(token);
            }
            None => {}
        }

        self.advance_n(matched.len());
    }

    /// Performs one step of the scan loop.
    fn next_token(&mut self) {
        let text = self.remainder();

        if text.starts_with(PRAGMA_OPEN) {
            match PRAGMA_RULE.try_match(text) {
                Some(matched) => self.commit(&PRAGMA_RULE, matched),
                None => {
                    self.record(ErrorImpl::UnclosedPragma);
                    self.skip_to_end();
                }
            }
            return;
        }

        if text.starts_with(BLOCK_COMMENT_OPEN) {
            // `{-}` closes itself: the close marker may overlap the opener.
            match text.find(BLOCK_COMMENT_CLOSE) {
                Some(end) => self.advance_n(end + BLOCK_COMMENT_CLOSE.len()),
                None => {
                    self.record(ErrorImpl::UnclosedMultilineComment);
                    self.skip_to_end();
                }
            }
            return;
        }

        if text.starts_with(LINE_COMMENT) {
            match text.find('\n') {
                Some(newline) => self.advance_n(newline + 1),
                None => self.skip_to_end(),
            }
            return;
        }

        if let Some((rule, matched)) = match_at(text) {
            self.commit(rule, matched);
            return;
        }

        if let Some(character) = text.chars().next() {
            self.record(ErrorImpl::UnknownCharacter { character });
            self.advance_n(character.len_utf8());
        }
    }

    /// Scans the whole source and hands back the collected tokens, per-class
    /// lists and diagnostics.
    pub fn scan_all(mut self) -> ScanOutput {
        debug!(bytes = self.source.len(), "scan started");

        while !self.at_eof() {
            self.next_token();
        }

        debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );

        ScanOutput {
            tokens: self.tokens,
            names: self.names,
            keywords: self.keywords,
            operators: self.operators,
            punctuations: self.punctuations,
            diagnostics: self.diagnostics,
            symbols: self.symbols,
        }
    }
}

pub fn tokenize(source: &str) -> ScanOutput {
    Lexer::new(source).scan_all()
}
