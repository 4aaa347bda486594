// ABOUTME: Iteration-scoped index of input file bindings
// ABOUTME: Maps symbols to source files with a global fallback tier per iteration

use crate::scenario::InputFileRow;

/// One input-file binding. `iteration == None` marks a global record
/// that applies to every iteration unless an iteration-specific record
/// defines the same symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFileRecord {
    pub iteration: Option<i32>,
    pub symbol: String,
    pub filename: String,
}

/// Ordered collection of input-file bindings, built once at startup
/// from the scenario table and immutable afterwards. Duplicate symbols
/// across scopes are stored as-is; precedence is decided at lookup
/// time, not at insert time.
#[derive(Debug, Clone, Default)]
pub struct InputFileMap {
    records: Vec<InputFileRecord>,
}

impl InputFileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from scenario rows, preserving table order.
    pub fn from_rows(rows: &[InputFileRow]) -> Self {
        let mut map = Self::new();
        for row in rows {
            map.add_record(row.iteration, &row.symbol, &row.filename);
        }
        map
    }

    /// Append a record. No uniqueness or file-existence validation
    /// happens here.
    pub fn add_record(&mut self, iteration: Option<i32>, symbol: &str, filename: &str) {
        self.records.push(InputFileRecord {
            iteration,
            symbol: symbol.to_string(),
            filename: filename.to_string(),
        });
    }

    /// Records applicable to an iteration: iteration-specific records in
    /// insertion order, followed by global records in insertion order.
    ///
    /// Substitution scans this sequence and consumes the first match
    /// for a symbol token, so an iteration-specific record shadows a
    /// global record for the same symbol.
    pub fn records_for(&self, iteration: i32) -> Vec<&InputFileRecord> {
        let specific = self
            .records
            .iter()
            .filter(|r| r.iteration == Some(iteration));
        let global = self.records.iter().filter(|r| r.iteration.is_none());

        specific.chain(global).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> InputFileMap {
        let mut map = InputFileMap::new();
        map.add_record(Some(1), "HABITAT", "habitat-1.asc");
        map.add_record(None, "HABITAT", "habitat.asc");
        map.add_record(None, "CLIMATE", "climate.csv");
        map.add_record(Some(2), "CLIMATE", "climate-2.csv");
        map
    }

    #[test]
    fn test_specific_records_precede_global_records() {
        let map = sample_map();
        let records = map.records_for(1);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].filename, "habitat-1.asc");
        assert_eq!(records[1].filename, "habitat.asc");
        assert_eq!(records[2].filename, "climate.csv");
    }

    #[test]
    fn test_global_tier_preserves_insertion_order() {
        let map = sample_map();
        let records = map.records_for(2);

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].filename, "climate-2.csv");
        assert_eq!(records[1].filename, "habitat.asc");
        assert_eq!(records[2].filename, "climate.csv");
    }

    #[test]
    fn test_only_global_records_match_other_iterations() {
        let map = sample_map();
        let records = map.records_for(99);

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.iteration.is_none()));
    }

    #[test]
    fn test_empty_map_returns_empty_sequence() {
        let map = InputFileMap::new();
        assert!(map.records_for(1).is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn test_from_rows_preserves_table_order() {
        let rows = vec![
            InputFileRow {
                iteration: None,
                symbol: "A".to_string(),
                filename: "a.asc".to_string(),
            },
            InputFileRow {
                iteration: None,
                symbol: "B".to_string(),
                filename: "b.asc".to_string(),
            },
        ];

        let map = InputFileMap::from_rows(&rows);
        let records = map.records_for(1);

        assert_eq!(records[0].symbol, "A");
        assert_eq!(records[1].symbol, "B");
    }

    #[test]
    fn test_duplicate_records_are_kept() {
        let mut map = InputFileMap::new();
        map.add_record(None, "HABITAT", "first.asc");
        map.add_record(None, "HABITAT", "second.asc");

        assert_eq!(map.len(), 2);
        assert_eq!(map.records_for(1).len(), 2);
    }
}
