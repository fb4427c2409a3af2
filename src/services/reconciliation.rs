//! ASN quantity/total reconciliation engine.
//!
//! Keeps per-line invoiced quantities within the bounds set by the
//! originating purchase order, computes derived net amounts, and gates
//! submission on a grand-total check against the entered invoice total.
//!
//! Every operation is pure and synchronous. Updates never mutate the
//! caller's map in place; each successful `set_quantity` returns a fresh
//! map so a failed or replayed call cannot corrupt the session's view.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::errors::PortalError;
use crate::models::purchase_order::{PoLineItem, PurchaseOrderDetails};

/// Invoiced quantity per SKU code.
pub type QuantityMap = BTreeMap<String, i64>;

/// Allowed absolute divergence between the computed and the entered grand
/// total. A fixed amount rather than a percentage, so small-value POs do
/// not get a proportionally shrinking allowance.
pub const GRAND_TOTAL_TOLERANCE: Decimal = Decimal::TEN;

/// Seeds the invoiced quantity of every line item to its full PO quantity.
///
/// Called once when the ASN-creation workflow is entered for a PO.
pub fn initialize_quantities(po: &PurchaseOrderDetails) -> QuantityMap {
    po.po_line_items
        .iter()
        .map(|line| (line.sku_code.clone(), line.quantity))
        .collect()
}

/// Applies an operator-entered quantity for one SKU.
///
/// Fails when the value is negative, exceeds the PO quantity for that
/// line, or names a SKU the PO does not contain. On success only that
/// SKU's entry changes; no other line is renormalized.
pub fn set_quantity(
    sku_code: &str,
    proposed: i64,
    po: &PurchaseOrderDetails,
    quantities: &QuantityMap,
) -> Result<QuantityMap, PortalError> {
    let line = po.line_item(sku_code).ok_or_else(|| {
        PortalError::Validation(format!(
            "unknown SKU {} for purchase order {}",
            sku_code, po.code
        ))
    })?;

    if proposed < 0 || proposed > line.quantity {
        return Err(PortalError::QuantityOutOfRange {
            sku_code: sku_code.to_string(),
            proposed,
            max_allowed: line.quantity,
        });
    }

    let mut updated = quantities.clone();
    updated.insert(sku_code.to_string(), proposed);
    Ok(updated)
}

/// Net amount for one line: `invoiced_qty * cost_price`.
///
/// A missing cost price yields zero by policy; it does not block ASN
/// creation.
pub fn line_net_amount(line: &PoLineItem, invoiced_qty: i64) -> Decimal {
    Decimal::from(invoiced_qty) * line.cost_price.unwrap_or(Decimal::ZERO)
}

/// Sum of line net amounts over every line item, in PO order.
pub fn grand_total(po: &PurchaseOrderDetails, quantities: &QuantityMap) -> Decimal {
    po.po_line_items
        .iter()
        .map(|line| {
            let qty = quantities.get(&line.sku_code).copied().unwrap_or(0);
            line_net_amount(line, qty)
        })
        .sum()
}

/// Gates ASN submission on the entered invoice total matching the
/// computed total within [`GRAND_TOTAL_TOLERANCE`].
pub fn validate_grand_total(computed: Decimal, entered: Decimal) -> Result<(), PortalError> {
    validate_grand_total_with_tolerance(computed, entered, GRAND_TOTAL_TOLERANCE)
}

pub fn validate_grand_total_with_tolerance(
    computed: Decimal,
    entered: Decimal,
    tolerance: Decimal,
) -> Result<(), PortalError> {
    if (computed - entered).abs() > tolerance {
        return Err(PortalError::GrandTotalMismatch { computed, entered });
    }
    Ok(())
}
