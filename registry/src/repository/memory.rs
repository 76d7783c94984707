use std::sync::Mutex;

use super::{PersonRepository, RepositoryResult};
use crate::model::person::{Person, PersonId};

/// Vec-backed record store. Mirrors the SQLite store's key assignment and
/// ordering so the service layer can be exercised without a database file.
#[derive(Default)]
pub struct InMemoryPersonRepository {
    state: Mutex<InMemoryState>,
}

#[derive(Default)]
struct InMemoryState {
    rows: Vec<Person>,
    last_id: i64,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn find_all(&self) -> RepositoryResult<Vec<Person>> {
        let state = self.state.lock().expect("record store lock poisoned");

        Ok(state.rows.clone())
    }

    fn find_by_identification_number(
        &self,
        national_identification_number: &str,
    ) -> RepositoryResult<Option<Person>> {
        let state = self.state.lock().expect("record store lock poisoned");

        Ok(state
            .rows
            .iter()
            .find(|person| {
                person.national_identification_number == national_identification_number
            })
            .cloned())
    }

    fn save(&self, person: &Person) -> RepositoryResult<Person> {
        let mut state = self.state.lock().expect("record store lock poisoned");

        state.last_id += 1;

        let mut saved = person.clone();
        saved.id = Some(PersonId(state.last_id));

        state.rows.push(saved.clone());

        Ok(saved)
    }

    fn delete_by_identification_number(
        &self,
        national_identification_number: &str,
    ) -> RepositoryResult<()> {
        let mut state = self.state.lock().expect("record store lock poisoned");

        state.rows.retain(|person| {
            person.national_identification_number != national_identification_number
        });

        Ok(())
    }
}
