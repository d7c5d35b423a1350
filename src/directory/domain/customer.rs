//! Customer record and validated customer scalars.

use super::{CustomerId, DirectoryDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated non-empty customer name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerName(String);

impl CustomerName {
    /// Creates a validated customer name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyCustomerName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyCustomerName);
        }
        Ok(Self(trimmed))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CustomerName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CustomerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text contact details for a customer.
///
/// Email and phone are stored as entered; the original tool performs no
/// format validation on either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    email: Option<String>,
    phone: Option<String>,
}

impl ContactDetails {
    /// Creates empty contact details.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            email: None,
            phone: None,
        }
    }

    /// Sets the email address, dropping values blank after trimming.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = non_blank(email.into());
        self
    }

    /// Sets the phone number, dropping values blank after trimming.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = non_blank(phone.into());
        self
    }

    /// Returns the email address, if recorded.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the phone number, if recorded.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// Trims a value and maps blank results to `None`.
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Customer record referenced by jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: CustomerName,
    contact: Option<ContactDetails>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new customer record.
    #[must_use]
    pub fn new(name: CustomerName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: CustomerId::new(),
            name,
            contact: None,
            notes: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the customer identifier.
    #[must_use]
    pub const fn id(&self) -> CustomerId {
        self.id
    }

    /// Returns the customer name.
    #[must_use]
    pub const fn name(&self) -> &CustomerName {
        &self.name
    }

    /// Returns the contact details, if recorded.
    #[must_use]
    pub const fn contact(&self) -> Option<&ContactDetails> {
        self.contact.as_ref()
    }

    /// Returns the free-form notes, if recorded.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Renames the customer.
    pub fn rename(&mut self, name: CustomerName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Replaces the contact details.
    pub fn set_contact(&mut self, contact: Option<ContactDetails>, clock: &impl Clock) {
        self.contact = contact;
        self.touch(clock);
    }

    /// Replaces the notes, mapping blank input to `None`.
    pub fn set_notes(&mut self, notes: Option<String>, clock: &impl Clock) {
        self.notes = notes.and_then(non_blank);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
