//! `billfold-app` — application service layer.
//!
//! The workflows the mobile screens drive: create, fetch, update and delete
//! invoices and export them as PDF or email. Collaborators (store, PDF
//! writer, mail transport, auth provider) are passed in explicitly; nothing
//! here reaches for process-wide singletons.

pub mod context;
pub mod error;
pub mod service;

pub use context::CurrentUser;
pub use error::AppError;
pub use service::InvoiceService;
