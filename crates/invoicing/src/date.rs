//! Invoice date representations.
//!
//! The hosted document store serializes dates inconsistently depending on the
//! code path that wrote them: client-set dates arrive as RFC 3339 strings,
//! server-computed dates as a seconds/nanoseconds epoch pair, and the oldest
//! documents carry preformatted display strings. The shape is decided once,
//! during deserialization, so nothing downstream re-detects it.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A date as stored on an invoice document.
///
/// Variant order matters for `untagged` deserialization: an epoch-pair map,
/// an RFC 3339 string, and any other string each land in exactly one arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceDate {
    /// Epoch pair produced by the store's server-side serialization.
    Epoch { seconds: i64, nanoseconds: u32 },
    /// A native timestamp (client-set; RFC 3339 on the wire).
    Timestamp(DateTime<Utc>),
    /// A preformatted display string from legacy documents. Rendered as-is.
    Text(String),
}

impl InvoiceDate {
    /// Resolve to a concrete timestamp, if the representation carries one.
    ///
    /// `Text` dates have no machine-readable form and resolve to `None`.
    /// `Epoch` keeps whole-second precision only, matching the store's own
    /// millisecond conversion; a seconds value outside the representable
    /// range also resolves to `None` instead of panicking.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            InvoiceDate::Epoch { seconds, .. } => seconds
                .checked_mul(1000)
                .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
            InvoiceDate::Timestamp(ts) => Some(*ts),
            InvoiceDate::Text(_) => None,
        }
    }

    /// The current instant as a native timestamp.
    pub fn now() -> Self {
        InvoiceDate::Timestamp(Utc::now())
    }
}

impl From<DateTime<Utc>> for InvoiceDate {
    fn from(value: DateTime<Utc>) -> Self {
        InvoiceDate::Timestamp(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn epoch_pair_deserializes_into_epoch_arm() {
        let date: InvoiceDate =
            serde_json::from_value(json!({ "seconds": 1_700_000_000, "nanoseconds": 0 })).unwrap();
        assert_eq!(
            date,
            InvoiceDate::Epoch {
                seconds: 1_700_000_000,
                nanoseconds: 0
            }
        );
        assert_eq!(
            date.timestamp(),
            Utc.timestamp_millis_opt(1_700_000_000_000).single()
        );
    }

    #[test]
    fn rfc3339_string_deserializes_into_timestamp_arm() {
        let date: InvoiceDate = serde_json::from_value(json!("2024-05-15T00:00:00Z")).unwrap();
        match date {
            InvoiceDate::Timestamp(ts) => assert_eq!(ts.timestamp(), 1_715_731_200),
            other => panic!("expected Timestamp, got {other:?}"),
        }
    }

    #[test]
    fn plain_string_falls_through_to_text() {
        let date: InvoiceDate = serde_json::from_value(json!("2024-05-15")).unwrap();
        assert_eq!(date, InvoiceDate::Text("2024-05-15".to_string()));
        assert_eq!(date.timestamp(), None);
    }

    #[test]
    fn out_of_range_epoch_resolves_to_none() {
        let date = InvoiceDate::Epoch {
            seconds: i64::MAX,
            nanoseconds: 0,
        };
        assert_eq!(date.timestamp(), None);
    }

    #[test]
    fn epoch_round_trips_as_a_map() {
        let date = InvoiceDate::Epoch {
            seconds: 42,
            nanoseconds: 7,
        };
        let value = serde_json::to_value(&date).unwrap();
        assert_eq!(value, json!({ "seconds": 42, "nanoseconds": 7 }));
        let back: InvoiceDate = serde_json::from_value(value).unwrap();
        assert_eq!(back, date);
    }
}
