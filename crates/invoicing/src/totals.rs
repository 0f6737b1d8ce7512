//! Totals arithmetic: subtotal, tax, grand total.

use billfold_core::ValueObject;
use serde::{Deserialize, Serialize};

use crate::invoice::InvoiceItem;

/// The derived money fields of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub subtotal: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
}

impl ValueObject for Totals {}

/// Parse a user-entered amount string.
///
/// Unparseable or non-finite input contributes zero rather than failing;
/// totals must stay stable for documents that already contain such amounts.
/// Negative values pass through unchanged.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Derive subtotal, tax and grand total from a list of line items.
///
/// No rounding happens here: stored totals carry full floating-point
/// precision, and two-decimal display is the renderer's concern.
pub fn compute_totals(items: &[InvoiceItem], tax_rate: f64) -> Totals {
    let subtotal: f64 = items.iter().map(InvoiceItem::parsed_amount).sum();
    let gst_amount = subtotal * tax_rate;
    Totals {
        subtotal,
        gst_amount,
        total_amount: subtotal + gst_amount,
    }
}
