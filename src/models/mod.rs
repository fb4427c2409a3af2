pub mod amendment;
pub mod asn;
pub mod invoice;
pub mod purchase_order;

pub use amendment::{AmendmentAttribute, AmendmentRecord};
pub use asn::{AsnListResponse, AsnSummary};
pub use invoice::InvoiceInput;
pub use purchase_order::{
    Address, FinancialDetails, PoLineItem, PoListResponse, PoStatus, PurchaseOrder,
    PurchaseOrderDetails,
};
