//! Staff member record and validated staff scalars.

use super::{DirectoryDomainError, StaffId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated non-empty staff member name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffName(String);

impl StaffName {
    /// Creates a validated staff name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyStaffName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyStaffName);
        }
        Ok(Self(trimmed))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StaffName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StaffName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Staff member record referenced by job assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    id: StaffId,
    name: StaffName,
    role: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StaffMember {
    /// Creates a new active staff member.
    #[must_use]
    pub fn new(name: StaffName, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: StaffId::new(),
            name,
            role: None,
            active: true,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the staff identifier.
    #[must_use]
    pub const fn id(&self) -> StaffId {
        self.id
    }

    /// Returns the staff member name.
    #[must_use]
    pub const fn name(&self) -> &StaffName {
        &self.name
    }

    /// Returns the role label, if recorded.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Returns whether the staff member is active.
    ///
    /// Inactive members keep their existing assignments; deactivation only
    /// removes them from assignment pickers.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
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

    /// Renames the staff member.
    pub fn rename(&mut self, name: StaffName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Replaces the role label, mapping blank input to `None`.
    pub fn set_role(&mut self, role: Option<String>, clock: &impl Clock) {
        self.role = role.and_then(|value| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        });
        self.touch(clock);
    }

    /// Marks the staff member inactive.
    pub fn deactivate(&mut self, clock: &impl Clock) {
        self.active = false;
        self.touch(clock);
    }

    /// Marks the staff member active.
    pub fn activate(&mut self, clock: &impl Clock) {
        self.active = true;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
