//! ASN summaries as returned by the backend list endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One ASN previously raised against a PO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsnSummary {
    pub asn_number: String,
    pub invoice_number: String,
    pub status: String,
    pub asn_quantity: i64,
    pub asn_total_amount: Decimal,
}

impl AsnSummary {
    /// Only freshly created ASNs may be cancelled.
    pub fn is_cancellable(&self) -> bool {
        self.status == "CREATED"
    }
}

/// Backend envelope for the per-PO ASN list.
#[derive(Debug, Clone, Deserialize)]
pub struct AsnListResponse {
    #[serde(rename = "ASNs", default)]
    pub asns: Option<Vec<AsnSummary>>,
}
