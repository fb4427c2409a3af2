//! Status-to-label and status-to-color mapping for the list and detail
//! views. A static finite lookup with a documented fallback: an
//! unrecognized status renders its raw value with a neutral badge color.

use crate::models::purchase_order::PoStatus;

const NEUTRAL_BADGE_COLOR: &str = "#e2e8f0";

/// Human-readable label for a PO status.
pub fn display_label(status: &PoStatus) -> &str {
    match status {
        PoStatus::Released => "Released",
        PoStatus::Cancelled => "Cancelled",
        PoStatus::Expired => "Expired",
        PoStatus::Locked => "ASN Created",
        PoStatus::Unrecognized(raw) => raw,
    }
}

/// Badge background color for a PO status.
pub fn badge_color(status: &PoStatus) -> &'static str {
    match status {
        PoStatus::Released => "#a4abddff",
        PoStatus::Cancelled => "#ff6a6a",
        PoStatus::Expired => "#fbff8bff",
        PoStatus::Locked => "#99f091ff",
        PoStatus::Unrecognized(_) => NEUTRAL_BADGE_COLOR,
    }
}
