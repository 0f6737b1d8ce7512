//! Display formatting for dates and money.

use billfold_invoicing::{BillingConfig, InvoiceDate};
use chrono::{DateTime, Utc};

/// Short localized date, `M/D/YYYY`.
///
/// This is the en-US short form the mobile clients produced; documents
/// created there and here must format identically.
pub fn short_date(ts: DateTime<Utc>) -> String {
    ts.format("%-m/%-d/%Y").to_string()
}

/// Normalize any stored date representation to its display string.
///
/// Legacy `Text` dates pass through unchanged. Epoch pairs and native
/// timestamps format to the short date; an epoch pair whose seconds value
/// falls outside the representable range degrades to the raw seconds value
/// rather than failing the whole document.
pub fn display_date(date: &InvoiceDate) -> String {
    match date {
        InvoiceDate::Text(text) => text.clone(),
        InvoiceDate::Timestamp(ts) => short_date(*ts),
        InvoiceDate::Epoch { seconds, .. } => match date.timestamp() {
            Some(ts) => short_date(ts),
            None => seconds.to_string(),
        },
    }
}

/// Format a numeric amount to exactly two decimals with the configured
/// currency prefix.
pub fn format_amount(value: f64, config: &BillingConfig) -> String {
    format!("{}{:.2}", config.currency_symbol, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn short_date_is_unpadded_month_day_year() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        assert_eq!(short_date(ts), "5/3/2024");
    }

    #[test]
    fn text_dates_pass_through_unchanged() {
        assert_eq!(
            display_date(&InvoiceDate::Text("2024-05-15".to_string())),
            "2024-05-15"
        );
    }

    #[test]
    fn epoch_pair_formats_via_milliseconds() {
        let date = InvoiceDate::Epoch {
            seconds: 1_700_000_000,
            nanoseconds: 0,
        };
        let expected = short_date(Utc.timestamp_millis_opt(1_700_000_000_000).unwrap());
        assert_eq!(display_date(&date), expected);
        assert_eq!(display_date(&date), "11/14/2023");
    }

    #[test]
    fn unrepresentable_epoch_degrades_to_raw_seconds() {
        let date = InvoiceDate::Epoch {
            seconds: i64::MAX,
            nanoseconds: 0,
        };
        assert_eq!(display_date(&date), i64::MAX.to_string());
    }

    #[test]
    fn amounts_format_to_two_decimals_with_prefix() {
        let config = BillingConfig::default();
        assert_eq!(format_amount(5.0, &config), "$5.00");
        assert_eq!(format_amount(123.4, &config), "$123.40");

        let rupees = BillingConfig {
            currency_symbol: "₹".to_string(),
            ..BillingConfig::default()
        };
        assert_eq!(format_amount(0.0, &rupees), "₹0.00");
    }
}
