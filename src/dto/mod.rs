//! Wire payload shapes and request builders.
//!
//! Field names here are contract-exact: serde renames reproduce the
//! backend's camelCase keys byte for byte. Builders assume their inputs
//! already passed the corresponding engine's validation and never fail;
//! they must not be called directly on raw user input.

pub mod amendment_payload;
pub mod asn_payload;

pub use amendment_payload::{
    build_amendment_payload, AmendmentDescription, AmendmentItemDetail, AmendmentPayload,
};
pub use asn_payload::{build_asn_payload, AsnPayload};
