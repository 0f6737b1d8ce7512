//! `billfold-export` — PDF and email export seams.
//!
//! The PDF backend and the mail transport are external collaborators; this
//! crate owns their trait seams and the glue that renders an invoice and
//! hands the markup over. File paths, share sheets and SMTP details all live
//! behind the traits.

pub mod email;
pub mod error;
pub mod pdf;

pub use email::{EmailMessage, EmailTransport, send_invoice_email};
pub use error::ExportError;
pub use pdf::{PdfArtifact, PdfWriter, export_invoice_pdf};
