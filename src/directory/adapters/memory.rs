//! In-memory directory store backing the single-user workspace.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Customer, CustomerId, ServiceTemplate, ServiceTemplateId, StaffId, StaffMember},
    ports::{
        CustomerRepository, DirectoryRepositoryError, DirectoryRepositoryResult, StaffRepository,
        TemplateRepository,
    },
};

/// Thread-safe in-memory store implementing all three directory repositories.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    customers: HashMap<CustomerId, Customer>,
    staff: HashMap<StaffId, StaffMember>,
    templates: HashMap<ServiceTemplateId, ServiceTemplate>,
}

impl InMemoryDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DirectoryRepositoryResult<std::sync::RwLockReadGuard<'_, DirectoryState>> {
        self.state.read().map_err(|err| {
            DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> DirectoryRepositoryResult<std::sync::RwLockWriteGuard<'_, DirectoryState>> {
        self.state.write().map_err(|err| {
            DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

/// Collects map values sorted by a case-insensitive name key.
fn sorted_by_name<T: Clone>(values: impl Iterator<Item = T>, name_of: impl Fn(&T) -> String) -> Vec<T> {
    let mut out: Vec<T> = values.collect();
    out.sort_by_key(|value| name_of(value).to_lowercase());
    out
}

#[async_trait]
impl CustomerRepository for InMemoryDirectory {
    async fn store_customer(&self, customer: &Customer) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        if state.customers.contains_key(&customer.id()) {
            return Err(DirectoryRepositoryError::DuplicateCustomer(customer.id()));
        }
        state.customers.insert(customer.id(), customer.clone());
        Ok(())
    }

    async fn update_customer(&self, customer: &Customer) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.customers.contains_key(&customer.id()) {
            return Err(DirectoryRepositoryError::CustomerNotFound(customer.id()));
        }
        state.customers.insert(customer.id(), customer.clone());
        Ok(())
    }

    async fn remove_customer(&self, id: CustomerId) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .customers
            .remove(&id)
            .map(|_| ())
            .ok_or(DirectoryRepositoryError::CustomerNotFound(id))
    }

    async fn find_customer(&self, id: CustomerId) -> DirectoryRepositoryResult<Option<Customer>> {
        let state = self.read()?;
        Ok(state.customers.get(&id).cloned())
    }

    async fn list_customers(&self) -> DirectoryRepositoryResult<Vec<Customer>> {
        let state = self.read()?;
        Ok(sorted_by_name(state.customers.values().cloned(), |c| {
            c.name().as_str().to_owned()
        }))
    }
}

#[async_trait]
impl StaffRepository for InMemoryDirectory {
    async fn store_staff(&self, member: &StaffMember) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        if state.staff.contains_key(&member.id()) {
            return Err(DirectoryRepositoryError::DuplicateStaff(member.id()));
        }
        state.staff.insert(member.id(), member.clone());
        Ok(())
    }

    async fn update_staff(&self, member: &StaffMember) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.staff.contains_key(&member.id()) {
            return Err(DirectoryRepositoryError::StaffNotFound(member.id()));
        }
        state.staff.insert(member.id(), member.clone());
        Ok(())
    }

    async fn remove_staff(&self, id: StaffId) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .staff
            .remove(&id)
            .map(|_| ())
            .ok_or(DirectoryRepositoryError::StaffNotFound(id))
    }

    async fn find_staff(&self, id: StaffId) -> DirectoryRepositoryResult<Option<StaffMember>> {
        let state = self.read()?;
        Ok(state.staff.get(&id).cloned())
    }

    async fn list_staff(&self) -> DirectoryRepositoryResult<Vec<StaffMember>> {
        let state = self.read()?;
        Ok(sorted_by_name(state.staff.values().cloned(), |m| {
            m.name().as_str().to_owned()
        }))
    }
}

#[async_trait]
impl TemplateRepository for InMemoryDirectory {
    async fn store_template(&self, template: &ServiceTemplate) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        if state.templates.contains_key(&template.id()) {
            return Err(DirectoryRepositoryError::DuplicateTemplate(template.id()));
        }
        state.templates.insert(template.id(), template.clone());
        Ok(())
    }

    async fn update_template(&self, template: &ServiceTemplate) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.templates.contains_key(&template.id()) {
            return Err(DirectoryRepositoryError::TemplateNotFound(template.id()));
        }
        state.templates.insert(template.id(), template.clone());
        Ok(())
    }

    async fn remove_template(&self, id: ServiceTemplateId) -> DirectoryRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .templates
            .remove(&id)
            .map(|_| ())
            .ok_or(DirectoryRepositoryError::TemplateNotFound(id))
    }

    async fn find_template(
        &self,
        id: ServiceTemplateId,
    ) -> DirectoryRepositoryResult<Option<ServiceTemplate>> {
        let state = self.read()?;
        Ok(state.templates.get(&id).cloned())
    }

    async fn list_templates(&self) -> DirectoryRepositoryResult<Vec<ServiceTemplate>> {
        let state = self.read()?;
        Ok(sorted_by_name(state.templates.values().cloned(), |t| {
            t.name().as_str().to_owned()
        }))
    }
}
