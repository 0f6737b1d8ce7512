//! PDF export seam.

use billfold_invoicing::{BillingConfig, StoredInvoice};
use billfold_render::{RenderOptions, render_invoice_document};

use crate::error::ExportError;

/// A produced PDF artifact. `location` is backend-defined: a file path on
/// device, a share-sheet handle, a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfArtifact {
    pub file_name: String,
    pub location: String,
}

/// Markup-to-PDF conversion backend.
pub trait PdfWriter {
    fn write(&self, html: &str, file_name: &str) -> Result<PdfArtifact, ExportError>;
}

/// Render an invoice and hand the markup to the PDF backend.
///
/// File names follow the `Invoice_<number>.pdf` convention the clients
/// already expose to users.
pub fn export_invoice_pdf(
    stored: &StoredInvoice,
    config: &BillingConfig,
    options: &RenderOptions,
    writer: &dyn PdfWriter,
) -> Result<PdfArtifact, ExportError> {
    let html = render_invoice_document(&stored.invoice, config, options);
    let file_name = format!("Invoice_{}.pdf", stored.invoice.invoice_number);
    writer.write(&html, &file_name)
}
