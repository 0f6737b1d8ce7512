//! Caller identity context.

use billfold_core::UserId;

/// The authenticated user, as resolved by the authentication provider.
///
/// The provider itself is an external collaborator; callers resolve the
/// identity upstream and pass it in. New invoices are stamped with `uid`,
/// and exports are personalized from the display fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub uid: UserId,
    pub email: Option<String>,
    pub display_name: Option<String>,
}

impl CurrentUser {
    pub fn new(uid: impl Into<UserId>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
            display_name: None,
        }
    }

    /// Display string for export personalization: display name, falling back
    /// to email, falling back to the raw uid.
    pub fn display(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(self.uid.as_str())
    }
}
