//! ASN creation payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::invoice::InvoiceInput;
use crate::models::purchase_order::{PoLineItem, PurchaseOrderDetails};
use crate::services::reconciliation::{line_net_amount, QuantityMap};

/// Item code the backend registered for this seller integration.
const SELLER_ITEM_CODE: &str = "6987";
const UNIT_OF_MEASURE: &str = "PC";
const CURRENCY_CODE: &str = "INR";
const INVOICE_TYPE: &str = "SSI";
const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoHeader {
    pub purchase_order_number: String,
    pub purchase_order_date: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDetails {
    pub invoice_number: String,
    pub invoice_type: String,
    pub invoice_date: String,
    pub shipping_date: String,
    pub delivery_date: String,
    pub due_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountDetails {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_discount_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub currency_code: String,
    pub discount_details: DiscountDetails,
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub grand_total_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerProductIdentifier {
    pub sku_code: String,
    pub material_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub identifier_type: String,
    pub identifier_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProductIdentifier {
    pub identifier: Identifier,
    pub item_code: String,
    pub item_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductIdentifier {
    pub buyer_product_identifier: BuyerProductIdentifier,
    pub seller_product_identifier: SellerProductIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDetails {
    pub batch_number: String,
    pub manufacturing_date: String,
    pub expiry_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityEntry {
    pub amount: i64,
    pub unit_of_measure: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuantity {
    pub invoiced_quantity: QuantityEntry,
    pub free_quantity: QuantityEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDetail {
    pub tax_type: String,
    pub rate_type: String,
    pub currency_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub tax_rate: Option<Decimal>,
}

impl TaxDetail {
    fn gst(rate_type: &str) -> Self {
        Self {
            tax_type: "GST".to_string(),
            rate_type: rate_type.to_string(),
            currency_code: CURRENCY_CODE.to_string(),
            tax_amount: Decimal::ZERO,
            tax_rate: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsnItemDetail {
    pub product_identifier: ProductIdentifier,
    pub batch_details: BatchDetails,
    pub quantity: ItemQuantity,
    #[serde(with = "rust_decimal::serde::float")]
    pub mrp: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub base_price: Decimal,
    pub tax_details: Vec<TaxDetail>,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub sold_from: Party,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub sold_to: Party,
}

/// Request body for `POST /asn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsnPayload {
    pub purchase_order_details: PoHeader,
    pub invoice_details: InvoiceDetails,
    pub invoice_file: String,
    pub invoice_totals: InvoiceTotals,
    pub item_details: Vec<AsnItemDetail>,
    pub seller: Seller,
    pub buyer: Buyer,
}

/// Assembles the ASN creation payload from a PO, the entered invoice
/// header, and a reconciled quantity map.
///
/// Free quantity is always zero (no entry path exists for it) and the
/// three-row GST breakdown is fixed at zero: tax computation happens on
/// the backend, not in this client.
pub fn build_asn_payload(
    po: &PurchaseOrderDetails,
    invoice: &InvoiceInput,
    quantities: &QuantityMap,
) -> AsnPayload {
    let item_details = po
        .po_line_items
        .iter()
        .map(|line| build_item_detail(line, quantities))
        .collect();

    AsnPayload {
        purchase_order_details: PoHeader {
            purchase_order_number: po.code.clone(),
            purchase_order_date: po.timestamp.clone(),
            expiry_date: po.expiry_date.clone(),
        },
        invoice_details: InvoiceDetails {
            invoice_number: invoice.invoice_number.clone(),
            invoice_type: INVOICE_TYPE.to_string(),
            invoice_date: invoice.invoice_date.format(WIRE_DATE_FORMAT).to_string(),
            shipping_date: invoice.shipping_date.format(WIRE_DATE_FORMAT).to_string(),
            delivery_date: invoice.delivery_date.format(WIRE_DATE_FORMAT).to_string(),
            due_date: invoice.due_date.format(WIRE_DATE_FORMAT).to_string(),
        },
        invoice_file: String::new(),
        invoice_totals: InvoiceTotals {
            currency_code: CURRENCY_CODE.to_string(),
            discount_details: DiscountDetails {
                total_discount_amount: Decimal::ZERO,
            },
            taxable_amount: invoice.taxable_amount,
            grand_total_amount: invoice.grand_total_amount,
        },
        item_details,
        seller: Seller {
            sold_from: Party {
                id: po.vendor_code.clone(),
                name: po.vendor_name.clone(),
            },
        },
        buyer: Buyer {
            sold_to: Party {
                id: po.to_store_code.clone(),
                name: po.to_store_name.clone(),
            },
        },
    }
}

fn build_item_detail(line: &PoLineItem, quantities: &QuantityMap) -> AsnItemDetail {
    let invoiced_qty = quantities.get(&line.sku_code).copied().unwrap_or(0);

    AsnItemDetail {
        product_identifier: ProductIdentifier {
            buyer_product_identifier: BuyerProductIdentifier {
                sku_code: line.sku_code.clone(),
                material_code: line.material_code.clone(),
            },
            seller_product_identifier: SellerProductIdentifier {
                identifier: Identifier {
                    identifier_type: "EAN".to_string(),
                    identifier_value: line.ean.clone().unwrap_or_default(),
                },
                item_code: SELLER_ITEM_CODE.to_string(),
                item_name: line.product_name.clone(),
            },
        },
        batch_details: BatchDetails {
            batch_number: String::new(),
            manufacturing_date: String::new(),
            expiry_date: String::new(),
        },
        quantity: ItemQuantity {
            invoiced_quantity: QuantityEntry {
                amount: invoiced_qty,
                unit_of_measure: UNIT_OF_MEASURE.to_string(),
            },
            free_quantity: QuantityEntry {
                amount: 0,
                unit_of_measure: UNIT_OF_MEASURE.to_string(),
            },
        },
        mrp: line.mrp,
        base_price: line.cost_price.unwrap_or(Decimal::ZERO),
        tax_details: vec![
            TaxDetail::gst("SGST"),
            TaxDetail::gst("CGST"),
            TaxDetail::gst("IGST"),
        ],
        net_amount: line_net_amount(line, invoiced_qty),
    }
}
