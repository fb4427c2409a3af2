//! Purchase order domain model.
//!
//! These types mirror the backend's PO event documents. They are owned by
//! the presentation layer for the lifetime of a detail view and are
//! read-only to the engines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Purchase order status.
///
/// The backend vocabulary is open-ended; anything we do not recognize is
/// carried through verbatim so the list view can still render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PoStatus {
    Released,
    Cancelled,
    Expired,
    Locked,
    Unrecognized(String),
}

impl From<String> for PoStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "RELEASED" => PoStatus::Released,
            "CANCELLED" => PoStatus::Cancelled,
            "EXPIRED" => PoStatus::Expired,
            "LOCKED" => PoStatus::Locked,
            _ => PoStatus::Unrecognized(raw),
        }
    }
}

impl From<PoStatus> for String {
    fn from(status: PoStatus) -> Self {
        match status {
            PoStatus::Released => "RELEASED".to_string(),
            PoStatus::Cancelled => "CANCELLED".to_string(),
            PoStatus::Expired => "EXPIRED".to_string(),
            PoStatus::Locked => "LOCKED".to_string(),
            PoStatus::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for PoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoStatus::Released => write!(f, "RELEASED"),
            PoStatus::Cancelled => write!(f, "CANCELLED"),
            PoStatus::Expired => write!(f, "EXPIRED"),
            PoStatus::Locked => write!(f, "LOCKED"),
            PoStatus::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// One ordered line of a purchase order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoLineItem {
    /// Unique within a PO.
    pub sku_code: String,
    pub material_code: String,
    pub product_name: String,
    #[serde(default)]
    pub ean: Option<String>,
    /// Ordered PO quantity; the ceiling for any invoiced quantity
    /// entered against this SKU in an ASN.
    pub quantity: i64,
    #[serde(default)]
    pub cost_price: Option<Decimal>,
    pub mrp: Decimal,
    pub total_amount: Decimal,
}

/// Store/vendor address block, passed through to the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub store_address: String,
    pub vendor_address: String,
    pub vendor_pin_code: String,
    pub store_billing_address: String,
    pub store_shipping_address: String,
}

/// Tax identity block, passed through to the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialDetails {
    #[serde(rename = "entityPAN")]
    pub entity_pan: String,
    #[serde(rename = "vendorPAN")]
    pub vendor_pan: String,
    #[serde(rename = "entityGSTIN")]
    pub entity_gstin: String,
    #[serde(rename = "vendorGSTIN")]
    pub vendor_gstin: String,
}

/// Purchase order list row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub code: String,
    pub status: PoStatus,
    pub vendor_code: String,
    pub vendor_name: String,
    pub to_store_code: String,
    pub to_store_name: String,
    /// Creation date of the order.
    pub timestamp: String,
    pub expiry_date: String,
    pub delivery_date: String,
    pub total_qty: i64,
    #[serde(default)]
    pub city_id: String,
}

/// Full purchase order document, including line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderDetails {
    pub code: String,
    pub status: PoStatus,
    pub vendor_code: String,
    pub vendor_name: String,
    pub to_store_code: String,
    pub to_store_name: String,
    pub timestamp: String,
    pub expiry_date: String,
    pub delivery_date: String,
    pub total_qty: i64,
    #[serde(default)]
    pub city_id: String,
    pub address: Address,
    pub financial_details: FinancialDetails,
    pub po_line_items: Vec<PoLineItem>,
}

impl PurchaseOrderDetails {
    /// Looks up a line item by SKU code.
    pub fn line_item(&self, sku_code: &str) -> Option<&PoLineItem> {
        self.po_line_items
            .iter()
            .find(|line| line.sku_code == sku_code)
    }
}

/// One page of the PO list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoListResponse {
    pub purchase_orders: Vec<PurchaseOrder>,
    pub has_next: bool,
    pub page_number: u32,
    pub page_size: u32,
}
