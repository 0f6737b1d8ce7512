//! `billfold-invoicing` — invoice domain model and totals arithmetic.
//!
//! Everything here is a synchronous, side-effect-free transformation over
//! in-memory data. Persistence and rendering live in sibling crates.

pub mod config;
pub mod date;
pub mod invoice;
pub mod totals;

pub use config::BillingConfig;
pub use date::InvoiceDate;
pub use invoice::{Invoice, InvoiceItem, InvoiceStatus, Party, StoredInvoice};
pub use totals::{Totals, compute_totals, parse_amount};
