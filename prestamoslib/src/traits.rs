//! Unified read/write seams for the interchange formats, over std::io.

use crate::{error::Result, model::TransactionRecord};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<TransactionRecord>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, records: &[TransactionRecord]) -> Result<()>;
}
