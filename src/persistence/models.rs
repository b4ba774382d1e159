//! Stored entity and validated insert payload.

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Maximum length for the `name` and `email` columns (`VARCHAR(255)`).
pub const FIELD_MAX_LEN: usize = 255;

/// A contact row from the `contacts` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Auto-increment row ID. Assigned once at insert, never reused.
    pub id: u64,
    /// Submitter name.
    pub name: String,
    /// Submitter email. Stored as given; format is not validated.
    pub email: String,
    /// Message body. Unbounded length, may be empty.
    pub message: String,
}

/// A presence-checked submission ready for insertion.
///
/// [`NewContact::from_form`] is the single validation boundary: the store
/// assumes all three fields are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Message body. May be empty; empty is distinct from absent.
    pub message: String,
}

impl NewContact {
    /// Builds a `NewContact` from optional form fields.
    ///
    /// An absent field is rejected; a present-but-empty one is kept
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] if any field is absent, or if
    /// `name` or `email` exceed the column width.
    pub fn from_form(
        name: Option<String>,
        email: Option<String>,
        message: Option<String>,
    ) -> Result<Self, BoardError> {
        let name = require_bounded("name", name)?;
        let email = require_bounded("email", email)?;
        let message =
            message.ok_or_else(|| BoardError::Validation("missing field: message".to_string()))?;

        Ok(Self {
            name,
            email,
            message,
        })
    }
}

/// Unwraps a required field and enforces the column width.
///
/// The cap counts characters, matching VARCHAR(255) semantics.
fn require_bounded(field: &str, value: Option<String>) -> Result<String, BoardError> {
    let value =
        value.ok_or_else(|| BoardError::Validation(format!("missing field: {field}")))?;
    if value.chars().count() > FIELD_MAX_LEN {
        return Err(BoardError::Validation(format!(
            "{field} exceeds {FIELD_MAX_LEN} characters"
        )));
    }
    Ok(value)
}
