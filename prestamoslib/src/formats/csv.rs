//! CSV export, write-only. Fixed column set:
//! Tipo,Fecha,Compañía,Área,Moneda,Monto,Aprobado,Responsable,Referencia
//! with every data field quoted so spreadsheets open it directly.

use crate::{
    error::{LedgerError, Result},
    model::TransactionRecord,
    traits::{ReadFormat, WriteFormat},
};
use csv::{QuoteStyle, WriterBuilder};
use std::io::{BufRead, Write};

const HEADER: [&str; 9] = [
    "Tipo",
    "Fecha",
    "Compañía",
    "Área",
    "Moneda",
    "Monto",
    "Aprobado",
    "Responsable",
    "Referencia",
];

/// Conventional export file name.
pub const EXPORT_FILE_NAME: &str = "PrestamosInternos.csv";

pub struct Csv;

impl ReadFormat for Csv {
    fn read<R: BufRead>(_r: R) -> Result<Vec<TransactionRecord>> {
        Err(LedgerError::Unsupported("CSV es solo de exportación; la importación usa JSON"))
    }
}

impl WriteFormat for Csv {
    fn write<W: Write>(mut w: W, records: &[TransactionRecord]) -> Result<()> {
        if records.is_empty() {
            return Err(LedgerError::EmptyStore);
        }

        // Header stays unquoted; data fields are always quoted, embedded
        // quotes doubled.
        writeln!(w, "{}", HEADER.join(","))?;
        let mut wrt = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .has_headers(false)
            .from_writer(w);

        for r in records {
            wrt.write_record([
                r.kind.label(),
                r.date.as_str(),
                r.company.as_str(),
                r.area.as_str(),
                r.currency.as_str(),
                r.amount_display.as_str(),
                r.approved_by.as_str(),
                r.responsible.as_str(),
                r.reference.as_str(),
            ])?;
        }
        wrt.flush()?;
        Ok(())
    }
}
