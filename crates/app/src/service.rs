//! Invoice workflows over the storage and export collaborators.

use billfold_core::InvoiceId;
use billfold_export::{
    EmailTransport, PdfArtifact, PdfWriter, export_invoice_pdf, send_invoice_email,
};
use billfold_invoicing::{BillingConfig, Invoice, InvoiceStatus, StoredInvoice};
use billfold_render::RenderOptions;
use billfold_store::{InvoiceStore, StoreError};
use serde_json::json;
use tracing::{info, warn};

use crate::context::CurrentUser;
use crate::error::AppError;

/// The application service the screens call into.
///
/// Owns no state beyond configuration and the store handle; every method is
/// a thin workflow over the collaborators.
pub struct InvoiceService<S: InvoiceStore> {
    store: S,
    config: BillingConfig,
    render_options: RenderOptions,
}

impl<S: InvoiceStore> InvoiceService<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, BillingConfig::default(), RenderOptions::default())
    }

    pub fn with_config(store: S, config: BillingConfig, render_options: RenderOptions) -> Self {
        Self {
            store,
            config,
            render_options,
        }
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Persist a new invoice for `user`.
    ///
    /// The invoice is stamped with the user's id and its totals are
    /// recomputed before the write, so a stale client cannot persist figures
    /// that disagree with the line items.
    pub fn create_invoice(
        &self,
        user: &CurrentUser,
        mut invoice: Invoice,
    ) -> Result<StoredInvoice, AppError> {
        invoice.user_id = user.uid.clone();
        invoice.recompute_totals(&self.config);

        let id = self.store.create(&invoice)?;
        info!(invoice_id = %id, invoice_number = %invoice.invoice_number, "invoice created");
        Ok(StoredInvoice { id, invoice })
    }

    /// Fetch one invoice; absent ids are an error at this layer.
    pub fn invoice(&self, id: &InvoiceId) -> Result<StoredInvoice, AppError> {
        match self.store.get_by_id(id)? {
            Some(stored) => Ok(stored),
            None => {
                warn!(invoice_id = %id, "invoice not found");
                Err(AppError::NotFound(id.to_string()))
            }
        }
    }

    /// Every invoice belonging to `user`, ordered by document id.
    pub fn invoices_for_user(&self, user: &CurrentUser) -> Result<Vec<StoredInvoice>, AppError> {
        Ok(self.store.query_by_field("userId", &json!(user.uid))?)
    }

    /// Whole-document update: recompute totals, then re-persist every field.
    pub fn update_invoice(
        &self,
        id: &InvoiceId,
        mut invoice: Invoice,
    ) -> Result<StoredInvoice, AppError> {
        invoice.recompute_totals(&self.config);

        let patch = serde_json::to_value(&invoice).map_err(StoreError::from)?;
        self.store.update(id, &patch)?;
        info!(invoice_id = %id, "invoice updated");
        Ok(StoredInvoice {
            id: id.clone(),
            invoice,
        })
    }

    /// Field-level status change, the one partial update the screens use.
    pub fn set_status(&self, id: &InvoiceId, status: InvoiceStatus) -> Result<(), AppError> {
        self.store.update(id, &json!({ "status": status }))?;
        info!(invoice_id = %id, status = %status, "invoice status updated");
        Ok(())
    }

    pub fn delete_invoice(&self, id: &InvoiceId) -> Result<(), AppError> {
        self.store.delete(id)?;
        info!(invoice_id = %id, "invoice deleted");
        Ok(())
    }

    /// Fetch, render and hand the invoice to the PDF backend.
    pub fn download_pdf(
        &self,
        id: &InvoiceId,
        writer: &dyn PdfWriter,
    ) -> Result<PdfArtifact, AppError> {
        let stored = self.invoice(id)?;
        let artifact = export_invoice_pdf(&stored, &self.config, &self.render_options, writer)?;
        info!(invoice_id = %id, file_name = %artifact.file_name, "invoice exported to pdf");
        Ok(artifact)
    }

    /// Fetch, render and dispatch the invoice as an HTML email.
    pub fn email_invoice(
        &self,
        id: &InvoiceId,
        user: &CurrentUser,
        recipient: &str,
        transport: &dyn EmailTransport,
    ) -> Result<(), AppError> {
        let stored = self.invoice(id)?;
        send_invoice_email(
            &stored,
            &self.config,
            &self.render_options,
            user.display(),
            recipient,
            transport,
        )?;
        info!(invoice_id = %id, recipient, "invoice emailed");
        Ok(())
    }
}
