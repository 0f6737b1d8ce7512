//! `billfold-render` — invoice document rendering.
//!
//! Pure transformation from an invoice record to a self-contained HTML
//! document suitable for print, PDF conversion, or an email body. No IO, no
//! clock: the output is fully determined by the input.

pub mod document;
pub mod format;

pub use document::{RenderOptions, render_invoice_document};
pub use format::{display_date, format_amount, short_date};
