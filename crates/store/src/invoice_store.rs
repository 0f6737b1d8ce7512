//! The invoice collection interface.

use billfold_core::InvoiceId;
use billfold_invoicing::{Invoice, StoredInvoice};
use serde_json::Value as JsonValue;

use crate::error::StoreError;

/// Document-database operations over the invoice collection.
///
/// Every operation is a single direct call against the backend: no retries,
/// no transactions, no conflict resolution, no offline queueing. Callers
/// always receive fully-decoded invoices; the wire-level date ambiguity is
/// resolved during deserialization and never leaks past this trait.
pub trait InvoiceStore {
    /// Persist a new invoice document, returning the id the backend assigned.
    fn create(&self, invoice: &Invoice) -> Result<InvoiceId, StoreError>;

    /// Fetch one invoice by document id.
    fn get_by_id(&self, id: &InvoiceId) -> Result<Option<StoredInvoice>, StoreError>;

    /// Fetch every invoice whose top-level `field` equals `value`.
    ///
    /// Field-equality is the only query shape the hosted database offers
    /// here. Results are ordered by document id for determinism.
    fn query_by_field(
        &self,
        field: &str,
        value: &JsonValue,
    ) -> Result<Vec<StoredInvoice>, StoreError>;

    /// Shallow-merge `patch` into an existing document (the backend's native
    /// partial-update semantics). Patching an unknown id is an error.
    fn update(&self, id: &InvoiceId, patch: &JsonValue) -> Result<(), StoreError>;

    /// Delete a document. Deleting an absent id is not an error.
    fn delete(&self, id: &InvoiceId) -> Result<(), StoreError>;
}
