//! `billfold-store` — document storage boundary.
//!
//! The hosted document database is an external collaborator. This crate owns
//! the trait that models its operations over the invoice collection, plus an
//! in-memory implementation for tests and development. Invoice documents are
//! schemaless JSON on the wire; deserializing them here is the single place
//! where the polymorphic date shapes are decided.

pub mod error;
pub mod in_memory;
pub mod invoice_store;

pub use error::StoreError;
pub use in_memory::InMemoryInvoiceStore;
pub use invoice_store::InvoiceStore;
