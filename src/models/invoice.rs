//! Invoice header fields entered during ASN creation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Operator-entered invoice details for a new ASN.
///
/// Ephemeral: lives for one ASN-creation session and is discarded on
/// navigation away. The per-SKU invoiced quantities live in the
/// reconciliation engine's quantity map, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceInput {
    #[validate(length(min = 1, message = "invoice number is required"))]
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    #[validate(custom = "non_negative_amount")]
    pub taxable_amount: Decimal,
    #[validate(custom = "non_negative_amount")]
    pub grand_total_amount: Decimal,
    pub shipping_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub due_date: NaiveDate,
}

fn non_negative_amount(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() {
        return Err(ValidationError::new("amount must be non-negative"));
    }
    Ok(())
}
