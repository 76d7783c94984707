use std::path::Path;
use std::sync::Mutex;

use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{PersonRepository, RepositoryResult};
use crate::model::person::{Person, PersonId};

// Uniqueness of the identification number is deliberately NOT a storage
// constraint, the service layer owns that rule.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS people (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        national_identification_number TEXT NOT NULL,
        birth_date TEXT NOT NULL,
        email TEXT NOT NULL
    );
";

/// SQLite-backed record store. A single connection serialized behind a mutex
/// is plenty for one row per request.
pub struct SqlitePersonRepository {
    connection: Mutex<Connection>,
}

impl SqlitePersonRepository {
    /// Opens (creating if necessary) the database file and applies the schema
    pub fn open(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let connection = Connection::open(path)?;
        Self::bootstrap(connection)
    }

    /// Ephemeral store, dropped with the repository
    pub fn open_in_memory() -> RepositoryResult<Self> {
        let connection = Connection::open_in_memory()?;
        Self::bootstrap(connection)
    }

    fn bootstrap(connection: Connection) -> RepositoryResult<Self> {
        connection.execute_batch(SCHEMA)?;

        info!("record store ready");

        Ok(Self {
            connection: Mutex::new(connection),
        })
    }
}

fn row_to_person(row: &Row) -> rusqlite::Result<Person> {
    Ok(Person {
        id: Some(PersonId(row.get("id")?)),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        national_identification_number: row.get("national_identification_number")?,
        birth_date: row.get("birth_date")?,
        email: row.get("email")?,
    })
}

impl PersonRepository for SqlitePersonRepository {
    fn find_all(&self) -> RepositoryResult<Vec<Person>> {
        let connection = self.connection.lock().expect("record store lock poisoned");

        let mut statement = connection.prepare(
            "SELECT id, first_name, last_name, national_identification_number, birth_date, email
             FROM people
             ORDER BY id ASC;",
        )?;

        let people = statement
            .query_map([], row_to_person)?
            .collect::<rusqlite::Result<Vec<Person>>>()?;

        Ok(people)
    }

    fn find_by_identification_number(
        &self,
        national_identification_number: &str,
    ) -> RepositoryResult<Option<Person>> {
        let connection = self.connection.lock().expect("record store lock poisoned");

        let person = connection
            .query_row(
                "SELECT id, first_name, last_name, national_identification_number, birth_date, email
                 FROM people
                 WHERE national_identification_number = ?1;",
                params![national_identification_number],
                row_to_person,
            )
            .optional()?;

        Ok(person)
    }

    fn save(&self, person: &Person) -> RepositoryResult<Person> {
        let connection = self.connection.lock().expect("record store lock poisoned");

        connection.execute(
            "INSERT INTO people (first_name, last_name, national_identification_number, birth_date, email)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                person.first_name,
                person.last_name,
                person.national_identification_number,
                person.birth_date,
                person.email,
            ],
        )?;

        let mut saved = person.clone();
        saved.id = Some(PersonId(connection.last_insert_rowid()));

        Ok(saved)
    }

    fn delete_by_identification_number(
        &self,
        national_identification_number: &str,
    ) -> RepositoryResult<()> {
        let connection = self.connection.lock().expect("record store lock poisoned");

        connection.execute(
            "DELETE FROM people WHERE national_identification_number = ?1;",
            params![national_identification_number],
        )?;

        Ok(())
    }
}
