// ABOUTME: Row types for the scenario's tabular symbol configuration
// ABOUTME: Defines input file bindings, other symbol rows, and the symbol source trait

use serde::{Deserialize, Serialize};

use super::error::Result;

/// One input-file binding row. A row without an iteration applies to
/// every iteration unless an iteration-specific row defines the same
/// symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputFileRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration: Option<i32>,
    pub symbol: String,
    pub filename: String,
}

/// One literal symbol-to-value row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherSymbolRow {
    pub symbol: String,
    pub value: String,
}

/// Read-only source of the current other-symbol rows, in table order.
///
/// The renderer consults this on every substitution pass instead of
/// caching a table, so replacements always reflect the configuration
/// state at render time.
pub trait OtherSymbolSource {
    fn other_symbols(&self) -> Result<Vec<OtherSymbolRow>>;
}
