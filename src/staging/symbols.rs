// ABOUTME: Literal symbol replacement table for the other-symbols pass
// ABOUTME: Builds an ordered map from scenario rows and applies it to template lines

use indexmap::IndexMap;

use crate::scenario::OtherSymbolRow;

/// Flat symbol-to-literal-value table, rebuilt from the scenario rows on
/// every substitution pass. Duplicate symbols in the rows resolve
/// last-read-wins, scan order = table order. That contract is inherited
/// and ambiguous, not a designed tie-break.
#[derive(Debug, Clone, Default)]
pub struct OtherSymbolTable {
    entries: IndexMap<String, String>,
}

impl OtherSymbolTable {
    pub fn from_rows(rows: &[OtherSymbolRow]) -> Self {
        let mut entries = IndexMap::new();
        for row in rows {
            entries.insert(row.symbol.clone(), row.value.clone());
        }
        Self { entries }
    }

    /// Replace every `%symbol%` occurrence in the line with its literal
    /// value. Tokens with no table entry pass through untouched, so a
    /// template may contain literal `%...%` text as output.
    pub fn apply(&self, line: &str) -> String {
        let mut line = line.to_string();

        for (symbol, value) in &self.entries {
            let token = format!("%{}%", symbol);
            if line.contains(&token) {
                line = line.replace(&token, value);
            }
        }

        line
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.entries.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
