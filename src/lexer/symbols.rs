use std::collections::HashMap;

use super::tokens::{SymbolKind, TokenId};

/// Maps each distinct text to a sequential id, assigned on first sight.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    lookup: HashMap<String, usize>,
    entries: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// Returns the id of `text`, inserting it with the next free id if it
    /// has not been seen before.
    pub fn intern(&mut self, text: &str) -> usize {
        if let Some(id) = self.lookup.get(text) {
            return *id;
        }

        let id = self.entries.len();
        self.lookup.insert(text.to_string(), id);
        self.entries.push(text.to_string());
        id
    }

    pub fn get(&self, text: &str) -> Option<usize> {
        self.lookup.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Interned texts in first-seen order; the index of each entry is its id.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// The four per-class tables owned by one scan.
#[derive(Debug, Clone, Default)]
pub struct SymbolTables {
    pub keywords: SymbolTable,
    pub operators: SymbolTable,
    pub names: SymbolTable,
    pub punctuations: SymbolTable,
}

impl SymbolTables {
    pub fn new() -> SymbolTables {
        SymbolTables::default()
    }

    fn table_mut(&mut self, kind: SymbolKind) -> &mut SymbolTable {
        match kind {
            SymbolKind::Keyword => &mut self.keywords,
            SymbolKind::Operator => &mut self.operators,
            SymbolKind::Name => &mut self.names,
            SymbolKind::Punctuation => &mut self.punctuations,
        }
    }

    pub fn intern(&mut self, kind: SymbolKind, text: &str) -> TokenId {
        let index = self.table_mut(kind).intern(text);
        TokenId::new(kind, index)
    }
}
