use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validation::{
    validate_post_category, validate_post_content, validate_post_fields, validate_post_summary,
    validate_post_title,
};

/// Post category. The string forms are exactly "Fiction" and "Non-Fiction".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fiction,
    #[serde(rename = "Non-Fiction")]
    NonFiction,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::NonFiction => "Non-Fiction",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fiction" => Ok(Category::Fiction),
            "Non-Fiction" => Ok(Category::NonFiction),
            _ => Err(ValidationError::InvalidCategory),
        }
    }
}

/// Post entity - represents a blog post or article.
///
/// Every field passes through a validator before it is stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    id: Uuid,
    title: String,
    content: String,
    summary: Option<String>,
    category: Category,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Input for creating a post. The category is raw text until validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub category: String,
}

/// Fields to change on an existing post; `None` leaves a field as is.
///
/// `summary: Some(None)` clears the summary.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<Option<String>>,
    pub category: Option<String>,
}

/// A stored post row, trusted as already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    ///
    /// Validates title, content, summary and category in that order and
    /// stops at the first failure.
    pub fn new(draft: NewPost) -> Result<Self, ValidationError> {
        let fields = validate_post_fields(draft)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            summary: fields.summary,
            category: fields.category,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rehydrate a post read back from storage. Validators are not re-run.
    pub fn from_record(record: PostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            content: record.content,
            summary: record.summary,
            category: record.category,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }

    pub fn into_record(self) -> PostRecord {
        PostRecord {
            id: self.id,
            title: self.title,
            content: self.content,
            summary: self.summary,
            category: self.category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ValidationError> {
        self.title = validate_post_title(title.into())?;
        self.touch();
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        self.content = validate_post_content(content.into())?;
        self.touch();
        Ok(())
    }

    /// Replace or clear the summary. Clearing always succeeds.
    pub fn set_summary(&mut self, summary: Option<String>) -> Result<(), ValidationError> {
        self.summary = summary.map(validate_post_summary).transpose()?;
        self.touch();
        Ok(())
    }

    pub fn set_category(&mut self, category: &str) -> Result<(), ValidationError> {
        self.category = validate_post_category(category)?;
        self.touch();
        Ok(())
    }

    /// Apply a set of changes all-or-nothing: on failure `self` is untouched.
    pub fn apply(&mut self, changes: PostChanges) -> Result<(), ValidationError> {
        let mut next = self.clone();
        if let Some(title) = changes.title {
            next.set_title(title)?;
        }
        if let Some(content) = changes.content {
            next.set_content(content)?;
        }
        if let Some(summary) = changes.summary {
            next.set_summary(summary)?;
        }
        if let Some(category) = changes.category {
            next.set_category(&category)?;
        }
        *self = next;
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
