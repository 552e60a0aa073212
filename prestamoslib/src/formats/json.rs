//! JSON interchange: the round-trippable base format.

use crate::{
    amount::parse_amount,
    error::Result,
    model::{OperationKind, TransactionRecord},
    traits::{ReadFormat, WriteFormat},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::{BufRead, Write};

/// Conventional base file name.
pub const BASE_FILE_NAME: &str = "basePrestamos.json";

/// Incoming row, tolerant of externally-authored files: the canonical amount
/// may be absent and is then recovered from the display string.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonRow {
    kind: OperationKind,
    #[serde(default)]
    date: String,
    #[serde(default)]
    company: String,
    #[serde(default)]
    area: String,
    #[serde(default)]
    currency: String,
    #[serde(default)]
    amount_display: String,
    #[serde(default)]
    amount_value: Option<Decimal>,
    #[serde(default)]
    approved_by: String,
    #[serde(default)]
    responsible: String,
    #[serde(default)]
    reference: String,
}

pub struct Json;

impl ReadFormat for Json {
    /// Parses the whole document before returning anything, so a malformed
    /// file can never leave the caller with a partially-replaced store.
    fn read<R: BufRead>(r: R) -> Result<Vec<TransactionRecord>> {
        let rows: Vec<JsonRow> = serde_json::from_reader(r)?;
        tracing::debug!(count = rows.len(), "json base parsed");
        Ok(rows
            .into_iter()
            .map(|row| {
                let amount_value = row
                    .amount_value
                    .unwrap_or_else(|| parse_amount(&row.amount_display));
                TransactionRecord {
                    kind: row.kind,
                    date: row.date,
                    company: row.company,
                    area: row.area,
                    currency: row.currency,
                    amount_display: row.amount_display,
                    amount_value,
                    approved_by: row.approved_by,
                    responsible: row.responsible,
                    reference: row.reference,
                }
            })
            .collect())
    }
}

impl WriteFormat for Json {
    fn write<W: Write>(w: W, records: &[TransactionRecord]) -> Result<()> {
        serde_json::to_writer_pretty(w, records)?;
        Ok(())
    }
}
