//! Amendment batch validation and grouping.
//!
//! Turns the flat list of operator-entered amendment records into the
//! per-product / per-order structure the backend expects. Each record
//! produces exactly one submission entry and entries keep the order in
//! which the operator added them, so the audit trail between what was
//! typed and what was submitted stays 1:1.

use tracing::warn;

use crate::dto::amendment_payload::{AmendmentDescription, AmendmentItemDetail};
use crate::errors::PortalError;
use crate::models::amendment::AmendmentRecord;
use crate::models::purchase_order::PurchaseOrderDetails;

/// Checks that every record in the batch is fully filled in.
///
/// All-or-nothing: the first missing field on any record blocks the whole
/// batch. The error names the offending record (1-based) and field.
pub fn validate_batch(records: &[AmendmentRecord]) -> Result<(), PortalError> {
    if records.is_empty() {
        return Err(PortalError::Validation(
            "add at least one amendment before submitting".to_string(),
        ));
    }

    for (idx, record) in records.iter().enumerate() {
        let position = idx + 1;
        let attribute = record.attribute.ok_or_else(|| {
            PortalError::Validation(format!("amendment {}: no issue selected", position))
        })?;
        if !attribute.is_order_scoped() && record.sku_index.is_none() {
            return Err(PortalError::Validation(format!(
                "amendment {}: no product selected",
                position
            )));
        }
        if record.previous_value.trim().is_empty() {
            return Err(PortalError::Validation(format!(
                "amendment {}: previous value is empty",
                position
            )));
        }
        if record.recommended_value.trim().is_empty() {
            return Err(PortalError::Validation(format!(
                "amendment {}: recommended value is empty",
                position
            )));
        }
        if record.reason_for_amendment.trim().is_empty() {
            return Err(PortalError::Validation(format!(
                "amendment {}: reason for amendment is empty",
                position
            )));
        }
    }

    Ok(())
}

/// Groups a validated batch into submission entries.
///
/// Order-scoped records emit an entry carrying only the amendment fields.
/// Product-scoped records resolve their positional SKU reference against
/// the PO's line items; a reference that no longer resolves is dropped
/// with a warning rather than failing the batch.
pub fn group_for_submission(
    records: &[AmendmentRecord],
    po: &PurchaseOrderDetails,
) -> Vec<AmendmentItemDetail> {
    let mut item_details = Vec::with_capacity(records.len());

    for record in records {
        let Some(attribute) = record.attribute else {
            continue;
        };
        let description = AmendmentDescription {
            attribute_name: attribute,
            previous_value: record.previous_value.clone(),
            recommended_value: record.recommended_value.clone(),
            reason_for_amendment: record.reason_for_amendment.clone(),
        };

        if attribute.is_order_scoped() {
            item_details.push(AmendmentItemDetail::order_scoped(description));
        } else {
            match record.sku_index.and_then(|i| po.po_line_items.get(i)) {
                Some(line) => {
                    item_details.push(AmendmentItemDetail::product_scoped(line, description));
                }
                None => {
                    warn!(
                        po_code = %po.code,
                        sku_index = ?record.sku_index,
                        "dropping amendment with unresolved product reference"
                    );
                }
            }
        }
    }

    item_details
}
