//! The authoritative in-memory record sequence.
//!
//! The store is append-only until an import replaces it wholesale; individual
//! records are never mutated or deleted.

use crate::amount::format_amount;
use crate::model::TransactionRecord;

/// Area selection for filtered reads. `All` is the sentinel the selector
/// sends as `"all"` (or the localized `"todas"`); anything else is an exact
/// area-name match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AreaFilter {
    #[default]
    All,
    Area(String),
}

impl AreaFilter {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" | "todas" => AreaFilter::All,
            other => AreaFilter::Area(other.to_string()),
        }
    }

    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            AreaFilter::All => true,
            AreaFilter::Area(area) => record.area == *area,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<TransactionRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a full record set, normalizing as `replace_all`.
    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        let mut store = Self::new();
        store.replace_all(records);
        store
    }

    /// Appends one record. The caller has already parsed and normalized the
    /// field values, so nothing can fail here.
    pub fn append(&mut self, record: TransactionRecord) {
        tracing::debug!(area = %record.area, kind = ?record.kind, "record appended");
        self.records.push(record);
    }

    /// Replaces the whole store (the import path). A record whose display
    /// amount is missing gets it re-derived from the canonical value, so the
    /// display string stays derivable from `amount_value` even for
    /// externally-authored data.
    pub fn replace_all(&mut self, records: Vec<TransactionRecord>) {
        self.records = records;
        for record in &mut self.records {
            if record.amount_display.is_empty() {
                record.amount_display = format_amount(record.amount_value);
            }
        }
        tracing::debug!(count = self.records.len(), "store replaced");
    }

    /// Filtered read in insertion order. Recomputed from the full store on
    /// every call; never caches and never mutates.
    pub fn filter<'a>(
        &'a self,
        selector: &'a AreaFilter,
    ) -> impl Iterator<Item = &'a TransactionRecord> + 'a {
        self.records.iter().filter(move |r| selector.matches(r))
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
