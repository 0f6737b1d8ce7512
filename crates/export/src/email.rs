//! Email export seam.

use billfold_invoicing::{BillingConfig, StoredInvoice};
use billfold_render::{RenderOptions, render_invoice_document};

use crate::error::ExportError;

/// An outbound invoice email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    /// Display string for the sender (resolved from the current user).
    pub from_display: String,
    pub subject: String,
    pub html_body: String,
}

/// Mail dispatch backend. Delivery success/failure is reported to the
/// caller; nothing here retries or queues.
pub trait EmailTransport {
    fn send(&self, message: &EmailMessage) -> Result<(), ExportError>;
}

/// Render an invoice and dispatch it as an HTML email.
pub fn send_invoice_email(
    stored: &StoredInvoice,
    config: &BillingConfig,
    options: &RenderOptions,
    from_display: &str,
    recipient: &str,
    transport: &dyn EmailTransport,
) -> Result<(), ExportError> {
    let html_body = render_invoice_document(&stored.invoice, config, options);
    let message = EmailMessage {
        to: recipient.to_string(),
        from_display: from_display.to_string(),
        subject: format!("Invoice #{}", stored.invoice.invoice_number),
        html_body,
    };
    transport.send(&message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use billfold_core::{InvoiceId, UserId};
    use billfold_invoicing::{Invoice, InvoiceDate, InvoiceItem};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<EmailMessage>>,
    }

    impl EmailTransport for RecordingTransport {
        fn send(&self, message: &EmailMessage) -> Result<(), ExportError> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    fn stored_invoice() -> StoredInvoice {
        let config = BillingConfig::default();
        let mut invoice = Invoice::draft(
            UserId::new("user-1"),
            "INV-007",
            InvoiceDate::Text("2024-05-15".to_string()),
            InvoiceDate::Text("2024-06-15".to_string()),
        );
        invoice.push_item(InvoiceItem::new("Dev", "150.5"), &config);
        StoredInvoice {
            id: InvoiceId::new("doc-7"),
            invoice,
        }
    }

    #[test]
    fn email_carries_subject_sender_and_rendered_body() {
        let transport = RecordingTransport::default();
        send_invoice_email(
            &stored_invoice(),
            &BillingConfig::default(),
            &RenderOptions::default(),
            "Demo User",
            "client@example.com",
            &transport,
        )
        .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "client@example.com");
        assert_eq!(sent[0].from_display, "Demo User");
        assert_eq!(sent[0].subject, "Invoice #INV-007");
        assert!(sent[0].html_body.contains("$150.50"));
    }

    #[test]
    fn transport_failure_propagates() {
        struct FailingTransport;
        impl EmailTransport for FailingTransport {
            fn send(&self, _message: &EmailMessage) -> Result<(), ExportError> {
                Err(ExportError::Delivery("smtp refused".to_string()))
            }
        }

        let err = send_invoice_email(
            &stored_invoice(),
            &BillingConfig::default(),
            &RenderOptions::default(),
            "Demo User",
            "client@example.com",
            &FailingTransport,
        )
        .unwrap_err();
        assert!(matches!(err, ExportError::Delivery(_)));
    }
}
