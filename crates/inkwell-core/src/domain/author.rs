use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, ValidationError};
use crate::ports::AuthorRepository;
use crate::validation::{validate_author_fields, validate_author_name, validate_author_phone};

/// Author entity - a named writer with an optional contact number.
///
/// Fields are only reachable through validating setters, so a value of this
/// type always satisfies the author rules as of its last write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: Uuid,
    name: String,
    phone_number: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Input for creating an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewAuthor {
    pub name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: None,
        }
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }
}

/// Fields to change on an existing author; `None` leaves a field as is.
#[derive(Debug, Clone, Default)]
pub struct AuthorChanges {
    pub name: Option<String>,
    pub phone_number: Option<String>,
}

/// A stored author row, trusted as already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    pub id: Uuid,
    pub name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Create a new author with generated ID and timestamps.
    ///
    /// Fails on the first field that does not validate, name first.
    pub async fn new(
        draft: NewAuthor,
        authors: &dyn AuthorRepository,
    ) -> Result<Self, DomainError> {
        let fields = validate_author_fields(draft, authors).await?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: fields.name,
            phone_number: fields.phone_number,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate an author read back from storage. Validators are not re-run.
    pub fn from_record(record: AuthorRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            phone_number: record.phone_number,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    pub fn into_record(self) -> AuthorRecord {
        AuthorRecord {
            id: self.id,
            name: self.name,
            phone_number: self.phone_number,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Rename the author. The new name must be non-empty and not held by
    /// any other stored author.
    pub async fn set_name(
        &mut self,
        name: impl Into<String>,
        authors: &dyn AuthorRepository,
    ) -> Result<(), DomainError> {
        self.name = validate_author_name(name.into(), authors, Some(self.id)).await?;
        self.touch();
        Ok(())
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<String>,
    ) -> Result<(), ValidationError> {
        self.phone_number = Some(validate_author_phone(phone_number.into())?);
        self.touch();
        Ok(())
    }

    /// Apply a set of changes all-or-nothing: on failure `self` is untouched.
    pub async fn apply(
        &mut self,
        changes: AuthorChanges,
        authors: &dyn AuthorRepository,
    ) -> Result<(), DomainError> {
        let mut next = self.clone();
        if let Some(name) = changes.name {
            next.set_name(name, authors).await?;
        }
        if let Some(phone_number) = changes.phone_number {
            next.set_phone_number(phone_number)?;
        }
        *self = next;
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
