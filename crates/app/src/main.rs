use anyhow::Result;
use billfold_app::{CurrentUser, InvoiceService};
use billfold_export::{ExportError, PdfArtifact, PdfWriter};
use billfold_invoicing::{Invoice, InvoiceDate, InvoiceItem, Party};
use billfold_store::InMemoryInvoiceStore;

/// Demo PDF backend: writes the rendered markup into the system temp dir
/// instead of rasterizing it.
struct HtmlFileWriter;

impl PdfWriter for HtmlFileWriter {
    fn write(&self, html: &str, file_name: &str) -> Result<PdfArtifact, ExportError> {
        let path = std::env::temp_dir().join(file_name).with_extension("html");
        std::fs::write(&path, html).map_err(|e| ExportError::Pdf(e.to_string()))?;
        Ok(PdfArtifact {
            file_name: file_name.to_string(),
            location: path.display().to_string(),
        })
    }
}

fn sample_invoice(service: &InvoiceService<InMemoryInvoiceStore>, user: &CurrentUser) -> Invoice {
    let mut invoice = Invoice::draft(
        user.uid.clone(),
        "INV-001",
        InvoiceDate::Text("2024-05-15".to_string()),
        InvoiceDate::Text("2024-06-15".to_string()),
    );
    invoice.bill_to = Party {
        name: Some("John Doe".to_string()),
        address: Some("123 Main St".to_string()),
        city_state_zip: Some("Anytown, ST 12345".to_string()),
        phone: Some("9999999999".to_string()),
    };
    invoice.from = Party {
        name: Some("Your Company".to_string()),
        address: Some("456 Business Ave".to_string()),
        city_state_zip: Some("Cityville, ST 67890".to_string()),
        phone: Some("1111111111".to_string()),
    };
    invoice.push_item(
        InvoiceItem::new("Web Development", "2000"),
        service.config(),
    );
    invoice.push_item(InvoiceItem::new("UI/UX Design", "500"), service.config());
    invoice
}

fn main() -> Result<()> {
    billfold_observability::init();

    let service = InvoiceService::new(InMemoryInvoiceStore::new());
    let user = CurrentUser {
        uid: "demo-user".into(),
        email: Some("demo@example.com".to_string()),
        display_name: Some("Demo User".to_string()),
    };

    let invoice = sample_invoice(&service, &user);
    let stored = service.create_invoice(&user, invoice)?;
    let artifact = service.download_pdf(&stored.id, &HtmlFileWriter)?;

    println!(
        "invoice {} (total {}{:.2}) written to {}",
        stored.invoice.invoice_number,
        service.config().currency_symbol,
        stored.invoice.total_amount,
        artifact.location
    );
    Ok(())
}
