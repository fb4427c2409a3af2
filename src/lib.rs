//! Vendor EDI Portal core library
//!
//! Domain model, reconciliation and amendment engines, wire payload
//! builders, and the typed REST client for a vendor purchase-order portal.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod client;
pub mod config;
pub mod dto;
pub mod errors;
pub mod models;
pub mod prefs;
pub mod services;
pub mod status;

pub use client::{HttpPortalClient, VendorPortalApi};
pub use errors::PortalError;
