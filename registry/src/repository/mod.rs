pub mod memory;
pub mod sqlite;

use thiserror::Error;

use crate::model::person::Person;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("record store failure: {0}")]
    Store(#[from] rusqlite::Error),
}

/// Data-access seam over the record store. Implementations only move rows,
/// every business rule (uniqueness, presence, existence) lives in the
/// service layer.
pub trait PersonRepository: Send + Sync {
    /// Every stored person, in the order the store assigned their keys
    fn find_all(&self) -> RepositoryResult<Vec<Person>>;

    fn find_by_identification_number(
        &self,
        national_identification_number: &str,
    ) -> RepositoryResult<Option<Person>>;

    /// Persists the record and returns it with its newly assigned surrogate
    /// key. Any id carried on the input is ignored.
    fn save(&self, person: &Person) -> RepositoryResult<Person>;

    /// Removes the matching row if one exists. Deleting an absent key is a
    /// no-op here, the service decides whether that is an error.
    fn delete_by_identification_number(
        &self,
        national_identification_number: &str,
    ) -> RepositoryResult<()>;
}
