//! Service template record: the named set of work steps a job is built from.

use super::{DirectoryDomainError, ServiceTemplateId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the billing step appended implicitly to every job.
///
/// Templates may not declare a step with this name; the step always exists
/// on a job whether or not the template mentions it.
pub const BILLING_STEP_NAME: &str = "Fatturazione";

/// Validated non-empty template name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateName(String);

impl TemplateName {
    /// Creates a validated template name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyTemplateName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyTemplateName);
        }
        Ok(Self(trimmed))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated work-step name.
///
/// Step names are trimmed, never empty, and never the reserved billing step
/// name (compared case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepName(String);

impl StepName {
    /// Creates a validated step name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyStepName`] when the value is
    /// empty after trimming, or [`DirectoryDomainError::ReservedStepName`]
    /// when it matches the implicit billing step.
    pub fn new(value: impl Into<String>) -> Result<Self, DirectoryDomainError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyStepName);
        }
        if trimmed.eq_ignore_ascii_case(BILLING_STEP_NAME) {
            return Err(DirectoryDomainError::ReservedStepName(trimmed));
        }
        Ok(Self(trimmed))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StepName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Service template record.
///
/// A template names the ordered work steps instantiated as sub-tasks when a
/// job is created from it. A template with zero steps is valid: the job then
/// carries only the implicit billing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTemplate {
    id: ServiceTemplateId,
    name: TemplateName,
    steps: Vec<StepName>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ServiceTemplate {
    /// Creates a new service template.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::DuplicateStepName`] when the same step
    /// name appears twice (compared case-insensitively).
    pub fn new(
        name: TemplateName,
        steps: Vec<StepName>,
        clock: &impl Clock,
    ) -> Result<Self, DirectoryDomainError> {
        reject_duplicates(&steps)?;
        let timestamp = clock.utc();
        Ok(Self {
            id: ServiceTemplateId::new(),
            name,
            steps,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> ServiceTemplateId {
        self.id
    }

    /// Returns the template name.
    #[must_use]
    pub const fn name(&self) -> &TemplateName {
        &self.name
    }

    /// Returns the ordered work-step names.
    #[must_use]
    pub fn steps(&self) -> &[StepName] {
        &self.steps
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

    /// Renames the template.
    pub fn rename(&mut self, name: TemplateName, clock: &impl Clock) {
        self.name = name;
        self.touch(clock);
    }

    /// Replaces the step list.
    ///
    /// Existing jobs keep the sub-tasks they were instantiated with; the
    /// change affects future jobs only.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::DuplicateStepName`] when the same step
    /// name appears twice.
    pub fn set_steps(
        &mut self,
        steps: Vec<StepName>,
        clock: &impl Clock,
    ) -> Result<(), DirectoryDomainError> {
        reject_duplicates(&steps)?;
        self.steps = steps;
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Rejects step lists containing case-insensitive duplicates.
fn reject_duplicates(steps: &[StepName]) -> Result<(), DirectoryDomainError> {
    let mut seen: Vec<String> = Vec::with_capacity(steps.len());
    for step in steps {
        let lowered = step.as_str().to_ascii_lowercase();
        if seen.contains(&lowered) {
            return Err(DirectoryDomainError::DuplicateStepName(
                step.as_str().to_owned(),
            ));
        }
        seen.push(lowered);
    }
    Ok(())
}
