//! prestamoslib — core of the internal loans ledger: record store, KPI
//! balance engine, CSV/JSON interchange and the persisted theme flag.

pub mod amount;
pub mod balance;
pub mod error;
pub mod model;
pub mod store;
pub mod theme;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod json;
}
