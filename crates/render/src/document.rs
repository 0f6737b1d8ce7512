//! HTML invoice document generation.

use billfold_invoicing::{
    BillingConfig, Invoice, InvoiceItem, InvoiceStatus, Party, parse_amount,
};

use crate::format::{display_date, format_amount};

/// Presentation-only rendering knobs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Optional logo image URL. The only external asset the document may
    /// reference; everything else is inlined.
    pub logo_url: Option<String>,
}

/// Inline stylesheet; the document must stay self-contained.
const STYLE: &str = r#"
body { font-family: Arial, sans-serif; margin: 0; padding: 20px; background-color: #f4f4f9; color: #333; }
h1 { color: #333; margin-bottom: 20px; }
h3 { margin-bottom: 5px; color: #555; }
p { margin: 5px 0; }
.logo { max-height: 60px; margin-bottom: 10px; }
table { width: 100%; border-collapse: collapse; margin-top: 20px; }
th, td { border: 1px solid #ddd; padding: 12px; text-align: left; }
th { background-color: #333; color: white; }
td { background-color: #fff; }
.flex-container { display: flex; justify-content: space-between; margin-top: 20px; }
.flex-container div { width: 48%; }
.total-section { text-align: right; margin-top: 20px; padding: 10px; background-color: #eaeaea; }
.footer { margin-top: 20px; padding: 10px; background-color: #eaeaea; text-align: center; }
"#;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn status_color(status: InvoiceStatus) -> &'static str {
    match status {
        InvoiceStatus::Paid => "#22c55e",
        InvoiceStatus::Pending => "#eab308",
        InvoiceStatus::Overdue => "#ef4444",
    }
}

fn opt_field(value: &Option<String>) -> String {
    escape(value.as_deref().unwrap_or(""))
}

fn party_block(heading: &str, party: &Party) -> String {
    format!(
        "<div>\n\
         <h3>{heading}:</h3>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Address:</strong> {address}</p>\n\
         <p><strong>City, State, Zip:</strong> {city_state_zip}</p>\n\
         <p><strong>Phone:</strong> {phone}</p>\n\
         </div>",
        name = opt_field(&party.name),
        address = opt_field(&party.address),
        city_state_zip = opt_field(&party.city_state_zip),
        phone = opt_field(&party.phone),
    )
}

fn item_row(item: &InvoiceItem, config: &BillingConfig) -> String {
    format!(
        "<tr><td>{}</td><td style=\"text-align: right;\">{}</td></tr>",
        escape(&item.description),
        format_amount(parse_amount(&item.amount), config),
    )
}

/// Render a complete, self-contained HTML invoice document.
///
/// Deterministic for a given input: no clock, no randomness, no IO. Missing
/// party fields render as blanks and an empty item list renders an empty
/// table body; neither is an error.
pub fn render_invoice_document(
    invoice: &Invoice,
    config: &BillingConfig,
    options: &RenderOptions,
) -> String {
    let rows = invoice
        .items
        .iter()
        .map(|item| item_row(item, config))
        .collect::<Vec<_>>()
        .join("\n");

    let logo = match options.logo_url.as_deref() {
        Some(url) => format!("<img class=\"logo\" src=\"{}\" alt=\"logo\">\n", escape(url)),
        None => String::new(),
    };

    format!(
        "<html>\n\
         <head>\n\
         <style>{style}</style>\n\
         </head>\n\
         <body>\n\
         {logo}<h1>INVOICE</h1>\n\
         <p><strong>Invoice:</strong> #{invoice_number}</p>\n\
         <p><strong>Date:</strong> {invoice_date}</p>\n\
         <p><strong>Due Date:</strong> {due_date}</p>\n\
         <div class=\"flex-container\">\n\
         {bill_to}\n\
         {from}\n\
         </div>\n\
         <table>\n\
         <thead><tr><th>Description</th><th style=\"text-align: right;\">Amount</th></tr></thead>\n\
         <tbody>\n\
         {rows}\n\
         </tbody>\n\
         </table>\n\
         <div class=\"total-section\">\n\
         <p><strong>Subtotal:</strong> {subtotal}</p>\n\
         <p><strong>GST:</strong> {gst}</p>\n\
         <p><strong>Total:</strong> {total}</p>\n\
         </div>\n\
         <p class=\"footer\"><strong>Status:</strong> <span style=\"color: {status_color};\">{status}</span></p>\n\
         </body>\n\
         </html>\n",
        style = STYLE,
        logo = logo,
        invoice_number = escape(&invoice.invoice_number),
        invoice_date = escape(&display_date(&invoice.invoice_date)),
        due_date = escape(&display_date(&invoice.due_date)),
        bill_to = party_block("Bill To", &invoice.bill_to),
        from = party_block("From", &invoice.from),
        rows = rows,
        subtotal = format_amount(invoice.subtotal, config),
        gst = format_amount(invoice.gst_amount, config),
        total = format_amount(invoice.total_amount, config),
        status_color = status_color(invoice.status),
        status = invoice.status,
    )
}
