//! In-memory invoice collection.

use std::collections::HashMap;
use std::sync::RwLock;

use billfold_core::InvoiceId;
use billfold_invoicing::{Invoice, StoredInvoice};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::StoreError;
use crate::invoice_store::InvoiceStore;

/// In-memory `InvoiceStore`.
///
/// Intended for tests/dev. Documents are held as raw JSON so every read goes
/// through the same deserialization (and date-shape decision) a production
/// backend would force.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceStore {
    documents: RwLock<HashMap<InvoiceId, JsonValue>>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode(id: &InvoiceId, doc: &JsonValue) -> Result<StoredInvoice, StoreError> {
        let invoice: Invoice = serde_json::from_value(doc.clone())?;
        Ok(StoredInvoice {
            id: id.clone(),
            invoice,
        })
    }
}

impl InvoiceStore for InMemoryInvoiceStore {
    fn create(&self, invoice: &Invoice) -> Result<InvoiceId, StoreError> {
        // Opaque time-ordered token, like the ids the hosted backend mints.
        let id = InvoiceId::new(Uuid::now_v7().simple().to_string());
        let doc = serde_json::to_value(invoice)?;

        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        documents.insert(id.clone(), doc);
        Ok(id)
    }

    fn get_by_id(&self, id: &InvoiceId) -> Result<Option<StoredInvoice>, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        documents
            .get(id)
            .map(|doc| Self::decode(id, doc))
            .transpose()
    }

    fn query_by_field(
        &self,
        field: &str,
        value: &JsonValue,
    ) -> Result<Vec<StoredInvoice>, StoreError> {
        let documents = self
            .documents
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let mut matches: Vec<StoredInvoice> = documents
            .iter()
            .filter(|(_, doc)| doc.get(field) == Some(value))
            .map(|(id, doc)| Self::decode(id, doc))
            .collect::<Result<_, _>>()?;

        matches.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(matches)
    }

    fn update(&self, id: &InvoiceId, patch: &JsonValue) -> Result<(), StoreError> {
        let JsonValue::Object(fields) = patch else {
            return Err(StoreError::backend("update patch must be a JSON object"));
        };

        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;

        let Some(doc) = documents.get_mut(id) else {
            return Err(StoreError::backend(format!("no document with id {id}")));
        };
        let JsonValue::Object(existing) = doc else {
            return Err(StoreError::backend(format!(
                "document {id} is not a JSON object"
            )));
        };

        for (key, value) in fields {
            existing.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn delete(&self, id: &InvoiceId) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        documents.remove(id);
        Ok(())
    }
}
