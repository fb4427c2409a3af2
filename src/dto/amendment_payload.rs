//! PO amendment submission payload.

use serde::{Deserialize, Serialize};

use crate::models::amendment::AmendmentAttribute;
use crate::models::purchase_order::PoLineItem;

/// The four amendment fields shared by both item shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentDescription {
    pub attribute_name: AmendmentAttribute,
    pub previous_value: String,
    pub recommended_value: String,
    pub reason_for_amendment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EanIdentifier {
    pub identifier_type: String,
    pub identifier_value: String,
}

impl EanIdentifier {
    fn for_line(line: &PoLineItem) -> Self {
        Self {
            identifier_type: "EAN".to_string(),
            identifier_value: line.ean.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentProductIdentifier {
    pub sku_code: String,
    pub material_code: String,
    pub identifier: EanIdentifier,
}

/// One entry of the amendment submission: either scoped to one product or
/// to the whole order. Order-scoped entries carry no product identity at
/// all, so the optional fields are omitted from the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentItemDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_identifier: Option<AmendmentProductIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_code: Option<String>,
    pub amendments: Vec<AmendmentDescription>,
}

impl AmendmentItemDetail {
    /// Entry for an order-wide amendment (no product identity).
    pub fn order_scoped(description: AmendmentDescription) -> Self {
        Self {
            product_identifier: None,
            sku_name: None,
            sku_code: None,
            amendments: vec![description],
        }
    }

    /// Entry for an amendment against one resolved PO line.
    pub fn product_scoped(line: &PoLineItem, description: AmendmentDescription) -> Self {
        Self {
            product_identifier: Some(AmendmentProductIdentifier {
                sku_code: line.sku_code.clone(),
                material_code: line.material_code.clone(),
                identifier: EanIdentifier::for_line(line),
            }),
            sku_name: Some(line.product_name.clone()),
            sku_code: Some(line.sku_code.clone()),
            amendments: vec![description],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderAmendment {
    pub purchase_order_number: String,
    pub item_details: Vec<AmendmentItemDetail>,
}

/// Submission envelope for `POST /po/{code}/amendment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendmentPayload {
    pub purchase_order_amendment: PurchaseOrderAmendment,
}

/// Wraps the grouping engine's output together with the PO code.
pub fn build_amendment_payload(
    po_code: &str,
    item_details: Vec<AmendmentItemDetail>,
) -> AmendmentPayload {
    AmendmentPayload {
        purchase_order_amendment: PurchaseOrderAmendment {
            purchase_order_number: po_code.to_string(),
            item_details,
        },
    }
}
