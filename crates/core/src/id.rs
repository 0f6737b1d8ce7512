//! Strongly-typed identifiers used across the domain.
//!
//! None of these are database integers: invoice ids are opaque document ids
//! assigned by the hosted store, user ids come from the authentication
//! provider, and item ids are opaque tokens minted client-side.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of an invoice document (assigned by the document store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(String);

/// Identifier of a user (actor identity from the authentication provider).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

/// Identifier of a line item, unique within one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

macro_rules! impl_token_newtype {
    ($t:ty) => {
        impl $t {
            /// Wrap an externally-assigned token.
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_token_newtype!(InvoiceId);
impl_token_newtype!(UserId);
impl_token_newtype!(ItemId);

impl ItemId {
    /// Mint a fresh item id.
    ///
    /// Uses UUIDv7 (time-ordered) so item ids sort by creation time within an
    /// invoice. Prefer passing ids explicitly in tests for determinism.
    pub fn mint() -> Self {
        Self(Uuid::now_v7().to_string())
    }
}
