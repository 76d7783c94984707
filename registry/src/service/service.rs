use std::sync::Mutex;

use log::info;
use thiserror::Error;

use crate::model::person::Person;
use crate::repository::{PersonRepository, RepositoryError};

#[derive(Error, Debug)]
pub enum RegistryError {
    /// Save was invoked without a payload
    #[error("Person not provided to be saved.")]
    PersonNotProvided,

    /// Save would introduce a second record with the same identification number
    #[error("Person already exists in National Registry")]
    PersonMismatch,

    /// Delete was invoked for an identification number with no record
    #[error("Person not found.")]
    PersonNotFound,

    /// Unclassified record-store fault, surfaced as service-unavailable
    #[error("record store failure: {0}")]
    Store(#[from] RepositoryError),
}

/// Thin service layer over an injected repository. Enforces the registry's
/// two invariants before every write: a save needs a payload and an unused
/// identification number, a delete needs an existing record.
pub struct NationalRegistryService<R: PersonRepository> {
    repository: R,
    // Serializes the check-then-write sequences so two concurrent saves of
    // the same identification number cannot both pass the existence check.
    // Uniqueness stays a service rule, the store carries no constraint.
    write_lock: Mutex<()>,
}

impl<R: PersonRepository> NationalRegistryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    /// Every stored person, in save order. An empty registry is an empty
    /// list, not an error.
    pub fn find_all(&self) -> Result<Vec<Person>, RegistryError> {
        Ok(self.repository.find_all()?)
    }

    /// Lookup, not validation: a missing record is `Ok(None)`
    pub fn find_by_identification_number(
        &self,
        national_identification_number: &str,
    ) -> Result<Option<Person>, RegistryError> {
        Ok(self
            .repository
            .find_by_identification_number(national_identification_number)?)
    }

    pub fn save(&self, person: Option<Person>) -> Result<Person, RegistryError> {
        let Some(person) = person else {
            return Err(RegistryError::PersonNotProvided);
        };

        let _guard = self.write_lock.lock().expect("write lock poisoned");

        if self.person_already_exists(&person.national_identification_number)? {
            return Err(RegistryError::PersonMismatch);
        }

        let saved = self.repository.save(&person)?;

        info!(
            "saved person with identification number {}",
            saved.national_identification_number
        );

        Ok(saved)
    }

    pub fn delete_by_identification_number(
        &self,
        national_identification_number: &str,
    ) -> Result<(), RegistryError> {
        let _guard = self.write_lock.lock().expect("write lock poisoned");

        if !self.person_already_exists(national_identification_number)? {
            return Err(RegistryError::PersonNotFound);
        }

        self.repository
            .delete_by_identification_number(national_identification_number)?;

        info!(
            "deleted person with identification number {}",
            national_identification_number
        );

        Ok(())
    }

    fn person_already_exists(
        &self,
        national_identification_number: &str,
    ) -> Result<bool, RegistryError> {
        Ok(self
            .repository
            .find_by_identification_number(national_identification_number)?
            .is_some())
    }
}
