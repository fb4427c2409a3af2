pub mod amendments;
pub mod reconciliation;
