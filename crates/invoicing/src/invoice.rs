//! The invoice document model.

use core::str::FromStr;

use billfold_core::{DomainError, Entity, InvoiceId, ItemId, UserId, ValueObject};
use serde::{Deserialize, Serialize};

use crate::config::BillingConfig;
use crate::date::InvoiceDate;
use crate::totals::{compute_totals, parse_amount};

/// One billable entry on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub id: ItemId,
    pub description: String,
    /// Amount exactly as entered by the user. Kept verbatim for display and
    /// storage; parsing happens only where the number is needed.
    pub amount: String,
}

impl InvoiceItem {
    /// Build an item with a freshly minted id.
    pub fn new(description: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            id: ItemId::mint(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Numeric contribution of this item to the invoice totals.
    ///
    /// Follows the permissive rule of [`parse_amount`]: anything that does
    /// not parse as a finite number contributes zero.
    pub fn parsed_amount(&self) -> f64 {
        parse_amount(&self.amount)
    }
}

/// Billing party block (bill-to or from).
///
/// Every field is optional on the wire; older documents omit some of them
/// and the renderer prints blanks in their place. Phone numbers are
/// validated by the entry forms upstream, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Party {
    pub name: Option<String>,
    pub address: Option<String>,
    pub city_state_zip: Option<String>,
    pub phone: Option<String>,
}

impl ValueObject for Party {}

/// Invoice payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    #[default]
    Pending,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" => Ok(InvoiceStatus::Paid),
            "pending" => Ok(InvoiceStatus::Pending),
            "overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(DomainError::validation(format!(
                "unknown invoice status: {other}"
            ))),
        }
    }
}

/// The persisted invoice document (no id; the store pairs documents with
/// their ids, see [`StoredInvoice`]).
///
/// Totals are stored at full floating-point precision. Two-decimal display
/// is applied at render time only, so storage precision and display
/// precision stay deliberately separate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub invoice_number: String,
    pub invoice_date: InvoiceDate,
    pub due_date: InvoiceDate,
    #[serde(default)]
    pub bill_to: Party,
    #[serde(default)]
    pub from: Party,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    pub subtotal: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
    pub user_id: UserId,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// A fresh, unsubmitted invoice: zeroed totals, pending status.
    pub fn draft(
        user_id: UserId,
        invoice_number: impl Into<String>,
        invoice_date: InvoiceDate,
        due_date: InvoiceDate,
    ) -> Self {
        Self {
            invoice_number: invoice_number.into(),
            invoice_date,
            due_date,
            bill_to: Party::default(),
            from: Party::default(),
            items: Vec::new(),
            subtotal: 0.0,
            gst_amount: 0.0,
            total_amount: 0.0,
            user_id,
            status: InvoiceStatus::Pending,
        }
    }

    /// Re-derive the stored totals from the current line items.
    ///
    /// Callers invoke this after every item mutation; the totals fields are
    /// plain data and do not track the item list on their own.
    pub fn recompute_totals(&mut self, config: &BillingConfig) {
        let totals = compute_totals(&self.items, config.tax_rate);
        self.subtotal = totals.subtotal;
        self.gst_amount = totals.gst_amount;
        self.total_amount = totals.total_amount;
    }

    /// Append an item and recompute totals.
    pub fn push_item(&mut self, item: InvoiceItem, config: &BillingConfig) {
        self.items.push(item);
        self.recompute_totals(config);
    }

    /// Remove the item with the given id, recomputing totals.
    ///
    /// Returns whether an item was removed. Removing an absent id leaves the
    /// invoice untouched.
    pub fn remove_item(&mut self, id: &ItemId, config: &BillingConfig) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.recompute_totals(config);
        }
        removed
    }
}

/// An invoice paired with the document id the store assigned it.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredInvoice {
    pub id: InvoiceId,
    pub invoice: Invoice,
}

impl Entity for StoredInvoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> Invoice {
        Invoice::draft(
            UserId::new("user-1"),
            "INV-001",
            InvoiceDate::Text("2024-05-15".to_string()),
            InvoiceDate::Text("2024-06-15".to_string()),
        )
    }

    #[test]
    fn draft_starts_with_zero_totals_and_pending_status() {
        let invoice = draft();
        assert_eq!(invoice.subtotal, 0.0);
        assert_eq!(invoice.gst_amount, 0.0);
        assert_eq!(invoice.total_amount, 0.0);
        assert_eq!(invoice.status, InvoiceStatus::Pending);
        assert!(invoice.items.is_empty());
    }

    #[test]
    fn item_mutations_recompute_totals() {
        let config = BillingConfig::default();
        let mut invoice = draft();

        invoice.push_item(InvoiceItem::new("Design", "100"), &config);
        assert_eq!(invoice.subtotal, 100.0);

        let dev = InvoiceItem::new("Dev", "150.5");
        let dev_id = dev.id.clone();
        invoice.push_item(dev, &config);
        assert_eq!(invoice.subtotal, 250.5);
        assert!((invoice.total_amount - 270.54).abs() < 1e-9);

        assert!(invoice.remove_item(&dev_id, &config));
        assert_eq!(invoice.subtotal, 100.0);
        assert!(!invoice.remove_item(&dev_id, &config));
    }

    #[test]
    fn status_parses_from_wire_strings() {
        assert_eq!("paid".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
        assert_eq!(
            " Overdue ".parse::<InvoiceStatus>().unwrap(),
            InvoiceStatus::Overdue
        );
        assert!("cancelled".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn invoice_serializes_with_camel_case_document_fields() {
        let config = BillingConfig::default();
        let mut invoice = draft();
        invoice.bill_to = Party {
            name: Some("John Doe".to_string()),
            city_state_zip: Some("Anytown, ST 12345".to_string()),
            ..Party::default()
        };
        invoice.push_item(InvoiceItem::new("Design", "100"), &config);

        let doc = serde_json::to_value(&invoice).unwrap();
        assert_eq!(doc["invoiceNumber"], json!("INV-001"));
        assert_eq!(doc["billTo"]["cityStateZip"], json!("Anytown, ST 12345"));
        assert_eq!(doc["userId"], json!("user-1"));
        assert_eq!(doc["gstAmount"], json!(8.0));
        assert_eq!(doc["status"], json!("pending"));
    }

    #[test]
    fn documents_with_missing_party_blocks_still_deserialize() {
        let doc = json!({
            "invoiceNumber": "INV-9",
            "invoiceDate": { "seconds": 1_700_000_000, "nanoseconds": 0 },
            "dueDate": "2024-06-15",
            "subtotal": 0.0,
            "gstAmount": 0.0,
            "totalAmount": 0.0,
            "userId": "user-2",
            "status": "overdue"
        });

        let invoice: Invoice = serde_json::from_value(doc).unwrap();
        assert_eq!(invoice.bill_to, Party::default());
        assert!(invoice.items.is_empty());
        assert_eq!(invoice.status, InvoiceStatus::Overdue);
        assert_eq!(
            invoice.invoice_date,
            InvoiceDate::Epoch {
                seconds: 1_700_000_000,
                nanoseconds: 0
            }
        );
        assert_eq!(invoice.due_date, InvoiceDate::Text("2024-06-15".to_string()));
    }
}
