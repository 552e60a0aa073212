//! Domain model: one logged loan operation between areas.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amount::{format_amount, parse_amount};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OperationKind {
    Request,
    Return,
}

impl OperationKind {
    /// Localized label shown in the table and the CSV `Tipo` column.
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Request => "Solicitud",
            OperationKind::Return => "Devolución",
        }
    }

    /// Balance contribution factor: a return adds, a request subtracts.
    pub fn factor(self) -> Decimal {
        match self {
            OperationKind::Request => Decimal::NEGATIVE_ONE,
            OperationKind::Return => Decimal::ONE,
        }
    }
}

/// One logged operation. `amount_value` is the authoritative number;
/// `amount_display` is always derivable from it via [`format_amount`] and is
/// never fed back into arithmetic. Every other field is an opaque string kept
/// for display and export. Records are never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub kind: OperationKind,
    pub date: String,
    pub company: String,
    pub area: String,
    pub currency: String,
    pub amount_display: String,
    pub amount_value: Decimal,
    pub approved_by: String,
    pub responsible: String,
    pub reference: String,
}

impl TransactionRecord {
    /// Builds one record from already-extracted form field values. The raw
    /// amount input goes through the fail-to-zero parse; the canonical value
    /// is then formatted back for display.
    pub fn from_input(
        kind: OperationKind,
        date: &str,
        company: &str,
        area: &str,
        currency: &str,
        amount_input: &str,
        approved_by: &str,
        responsible: &str,
        reference: &str,
    ) -> Self {
        let amount_value = parse_amount(amount_input);
        Self {
            kind,
            date: date.to_string(),
            company: company.to_string(),
            area: area.to_string(),
            currency: currency.to_string(),
            amount_display: format_amount(amount_value),
            amount_value,
            approved_by: approved_by.to_string(),
            responsible: responsible.to_string(),
            reference: reference.to_string(),
        }
    }

    /// Signed balance contribution of this record.
    pub fn signed_contribution(&self) -> Decimal {
        self.kind.factor() * self.amount_value
    }
}
