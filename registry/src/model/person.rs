use serde::{Deserialize, Serialize};

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PersonId(pub i64);

impl PersonId {
    pub fn to_number(self) -> i64 {
        self.0
    }
}

/// The single managed record type. `id` is the store-assigned surrogate key,
/// `national_identification_number` the business key the service keeps unique.
/// The remaining fields are free text, no parsing or validation is performed.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// None until the record store has assigned a key
    #[serde(default)]
    pub id: Option<PersonId>,
    pub first_name: String,
    pub last_name: String,
    pub national_identification_number: String,
    pub birth_date: String,
    pub email: String,
}

// Equality excludes the surrogate key: a record compares equal to itself
// whether or not the store has assigned an id yet.
impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.national_identification_number == other.national_identification_number
            && self.birth_date == other.birth_date
            && self.email == other.email
    }
}

impl Person {
    pub fn new(
        first_name: String,
        last_name: String,
        national_identification_number: String,
        birth_date: String,
        email: String,
    ) -> Self {
        Person {
            id: None,
            first_name,
            last_name,
            national_identification_number,
            birth_date,
            email,
        }
    }

    pub fn new_test() -> Self {
        Person::new(
            "Claudia".to_string(),
            "Guedes".to_string(),
            "90001".to_string(),
            "15/02/2001".to_string(),
            "claudiaguedes@gmail.com".to_string(),
        )
    }

    pub fn new_test_with_identification_number(national_identification_number: &str) -> Self {
        Person {
            national_identification_number: national_identification_number.to_string(),
            ..Person::new_test()
        }
    }
}
