//! Balance engine: derives the KPI balances from the full record history.
//!
//! Convention: for each area, balance = returns − requests. An area with many
//! outstanding requests trends negative (it owes); one with many returns
//! trends positive. Reversing the sign would silently invert the meaning of
//! every displayed balance.

use rust_decimal::Decimal;

use crate::amount::format_amount;
use crate::store::RecordStore;

/// The two areas with named KPI buckets (exact, case-sensitive match).
/// Records in any other area stay in the store but do not feed these sums.
pub const TREASURY: &str = "Treasury";
pub const INVESTMENTS: &str = "Investments";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Balances {
    pub treasury: Decimal,
    pub investments: Decimal,
}

impl Balances {
    /// Total over the two named buckets only, not a sum over all areas.
    pub fn total(&self) -> Decimal {
        self.treasury + self.investments
    }

    pub fn report(&self) -> BalanceReport {
        BalanceReport {
            treasury: format_amount(self.treasury),
            investments: format_amount(self.investments),
            total: format_amount(self.total()),
        }
    }
}

/// The KPI triple formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    pub treasury: String,
    pub investments: String,
    pub total: String,
}

/// Computes per-area and total balances over the full, unfiltered store.
/// Order-independent: a plain sum of signed contributions.
pub fn compute_balances(store: &RecordStore) -> Balances {
    let mut balances = Balances::default();
    for record in store.records() {
        let contribution = record.signed_contribution();
        match record.area.as_str() {
            TREASURY => balances.treasury += contribution,
            INVESTMENTS => balances.investments += contribution,
            _ => {}
        }
    }
    balances
}
