use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation;
use crate::error::DomainError;

/// Author entity - identity and contact details for a blog author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author, running every field through its validator.
    ///
    /// `existing_names` are the names currently committed; the new name must
    /// not collide with any of them.
    pub fn new(
        name: String,
        phone_number: String,
        existing_names: &[String],
    ) -> Result<Self, DomainError> {
        validation::validate_name(&name, existing_names)?;
        validation::validate_phone_number(&phone_number)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            created_at: now,
            updated_at: now,
        })
    }

    /// Re-assign the name. `existing_names` must hold the names of all
    /// *other* authors, so an author can keep their own name.
    pub fn rename(&mut self, name: String, existing_names: &[String]) -> Result<(), DomainError> {
        validation::validate_name(&name, existing_names)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Re-assign the phone number, re-triggering its validator.
    pub fn set_phone_number(&mut self, phone_number: String) -> Result<(), DomainError> {
        validation::validate_phone_number(&phone_number)?;
        self.phone_number = phone_number;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Author(id={}, name={})", self.id, self.name)
    }
}
