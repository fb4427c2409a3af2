use rust_decimal::Decimal;

/// Error type shared across the portal core.
///
/// Every engine failure is recoverable: validation errors block the current
/// submission attempt and are surfaced to the operator for correction, while
/// transport failures leave the entered data untouched so the same request
/// can be re-triggered.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invoiced quantity {proposed} for SKU {sku_code} is outside the allowed range 0..={max_allowed}")]
    QuantityOutOfRange {
        sku_code: String,
        proposed: i64,
        max_allowed: i64,
    },

    #[error("Entered total ({entered}) does not match calculated total ({computed})")]
    GrandTotalMismatch { computed: Decimal, entered: Decimal },

    #[error("Purchase order {0} not found")]
    PoNotFound(String),

    // Display stays generic on purpose: transport internals go to the log,
    // not to the operator-facing message.
    #[error("Failed to reach the EDI backend. Please try again.")]
    Transport(#[from] reqwest::Error),

    #[error("EDI backend rejected the request (status {status})")]
    Api { status: u16 },

    #[error("Failed to persist page preference: {0}")]
    Preference(#[from] std::io::Error),
}

impl From<validator::ValidationErrors> for PortalError {
    fn from(err: validator::ValidationErrors) -> Self {
        PortalError::Validation(err.to_string())
    }
}
