//! User-entered amendment requests.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The closed set of PO attributes an amendment can target.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AmendmentAttribute {
    Mrp,
    BasePrice,
    Ean,
    CaseSize,
    ExpiryDate,
}

impl AmendmentAttribute {
    /// Whether this attribute applies to the whole order rather than a
    /// single product. Order-wide amendments carry no SKU reference.
    pub fn is_order_scoped(self) -> bool {
        self == AmendmentAttribute::ExpiryDate
    }
}

/// One amendment as entered by the operator.
///
/// Created empty, mutated field by field, and either removed or consumed
/// into a submission batch. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmendmentRecord {
    pub attribute: Option<AmendmentAttribute>,
    /// Positional reference into the PO's line items. Required unless the
    /// attribute is order-scoped, in which case it must stay unset.
    pub sku_index: Option<usize>,
    pub previous_value: String,
    pub recommended_value: String,
    pub reason_for_amendment: String,
}

impl AmendmentRecord {
    /// The empty record the UI starts from.
    pub fn new() -> Self {
        Self::default()
    }
}
