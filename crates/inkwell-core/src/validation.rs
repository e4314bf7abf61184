//! Field validators enforced on every author and post write.
//!
//! Each validator takes the proposed value and hands it back unchanged when
//! accepted. Only the author-name check touches storage; everything else is a
//! pure function of its input. Lengths are counted in characters, not bytes.

use uuid::Uuid;

use crate::domain::{Category, NewAuthor, NewPost};
use crate::error::{DomainError, ValidationError};
use crate::ports::AuthorRepository;

/// Post titles must contain at least one of these (case-sensitive).
pub const CLICKBAIT_PHRASES: &[&str] = &["Won't Believe", "Secret", "Top", "Guess"];

/// Phone numbers must be exactly this many characters.
pub const PHONE_NUMBER_LEN: usize = 10;

/// Minimum post content length.
pub const MIN_CONTENT_LEN: usize = 250;

/// Summaries must be strictly shorter than this.
pub const MAX_SUMMARY_LEN: usize = 250;

/// Author fields that passed validation, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorFields {
    pub name: String,
    pub phone_number: Option<String>,
}

/// Post fields that passed validation, in assignment order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
    pub category: Category,
}

/// Reject an empty name or one already taken by another author.
///
/// `current_id` is the author being renamed, if any; its own row does not
/// count as a duplicate. The lookup is not isolated from concurrent inserts.
pub async fn validate_author_name(
    proposed: String,
    authors: &dyn AuthorRepository,
    current_id: Option<Uuid>,
) -> Result<String, DomainError> {
    if proposed.is_empty() {
        return Err(ValidationError::MissingName.into());
    }

    if let Some(existing) = authors.find_by_name(&proposed).await? {
        if Some(existing.id()) != current_id {
            return Err(ValidationError::DuplicateName.into());
        }
    }

    Ok(proposed)
}

/// Phone numbers are checked for length only.
pub fn validate_author_phone(proposed: String) -> Result<String, ValidationError> {
    if proposed.chars().count() != PHONE_NUMBER_LEN {
        return Err(ValidationError::PhoneLength);
    }
    Ok(proposed)
}

pub fn validate_post_title(proposed: String) -> Result<String, ValidationError> {
    if proposed.is_empty() {
        return Err(ValidationError::MissingTitle);
    }
    if !CLICKBAIT_PHRASES
        .iter()
        .any(|phrase| proposed.contains(phrase))
    {
        return Err(ValidationError::NotClickbait {
            required: CLICKBAIT_PHRASES,
        });
    }
    Ok(proposed)
}

pub fn validate_post_content(proposed: String) -> Result<String, ValidationError> {
    if proposed.chars().count() < MIN_CONTENT_LEN {
        return Err(ValidationError::ContentTooShort {
            min: MIN_CONTENT_LEN,
        });
    }
    Ok(proposed)
}

pub fn validate_post_summary(proposed: String) -> Result<String, ValidationError> {
    if proposed.chars().count() >= MAX_SUMMARY_LEN {
        return Err(ValidationError::SummaryTooLong {
            max: MAX_SUMMARY_LEN,
        });
    }
    Ok(proposed)
}

/// Exact match against "Fiction" / "Non-Fiction"; no trimming or case folding.
pub fn validate_post_category(proposed: &str) -> Result<Category, ValidationError> {
    proposed.parse()
}

/// Run the author validators in order: name, then phone number.
pub async fn validate_author_fields(
    draft: NewAuthor,
    authors: &dyn AuthorRepository,
) -> Result<AuthorFields, DomainError> {
    let name = validate_author_name(draft.name, authors, None).await?;
    let phone_number = draft
        .phone_number
        .map(validate_author_phone)
        .transpose()?;

    Ok(AuthorFields { name, phone_number })
}

/// Run the post validators in order: title, content, summary, category.
pub fn validate_post_fields(draft: NewPost) -> Result<PostFields, ValidationError> {
    let title = validate_post_title(draft.title)?;
    let content = validate_post_content(draft.content)?;
    let summary = draft.summary.map(validate_post_summary).transpose()?;
    let category = validate_post_category(&draft.category)?;

    Ok(PostFields {
        title,
        content,
        summary,
        category,
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{Author, AuthorRecord};
    use crate::error::RepoError;
    use crate::ports::BaseRepository;

    /// Author store backed by a plain map, for exercising the name lookup.
    #[derive(Default)]
    pub(crate) struct FakeAuthors {
        pub(crate) rows: Mutex<HashMap<Uuid, Author>>,
    }

    impl FakeAuthors {
        pub(crate) fn with_names(names: &[&str]) -> Self {
            let store = Self::default();
            {
                let mut rows = store.rows.lock().unwrap();
                let now = chrono::Utc::now();
                for name in names {
                    let author = Author::from_record(AuthorRecord {
                        id: Uuid::new_v4(),
                        name: name.to_string(),
                        phone_number: None,
                        created_at: now,
                        updated_at: now,
                    });
                    rows.insert(author.id(), author);
                }
            }
            store
        }
    }

    #[async_trait]
    impl BaseRepository<Author, Uuid> for FakeAuthors {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn save(&self, entity: Author) -> Result<Author, RepoError> {
            self.rows
                .lock()
                .unwrap()
                .insert(entity.id(), entity.clone());
            Ok(entity)
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
            self.rows
                .lock()
                .unwrap()
                .remove(&id)
                .map(|_| ())
                .ok_or(RepoError::NotFound)
        }
    }

    #[async_trait]
    impl AuthorRepository for FakeAuthors {
        async fn find_by_name(&self, name: &str) -> Result<Option<Author>, RepoError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|a| a.name() == name)
                .cloned())
        }
    }

    fn repeat(n: usize) -> String {
        "a".repeat(n)
    }

    #[tokio::test]
    async fn test_unique_name_returned_unchanged() {
        let authors = FakeAuthors::with_names(&["Ann Smith"]);
        let name = validate_author_name("Jane Doe".into(), &authors, None)
            .await
            .unwrap();
        assert_eq!(name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_taken_name_rejected() {
        let authors = FakeAuthors::with_names(&["Jane Doe"]);
        let err = validate_author_name("Jane Doe".into(), &authors, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::DuplicateName)
        ));
    }

    #[tokio::test]
    async fn test_name_match_is_exact() {
        let authors = FakeAuthors::with_names(&["Jane Doe"]);
        assert!(
            validate_author_name("jane doe".into(), &authors, None)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_empty_name_rejected() {
        let authors = FakeAuthors::default();
        let err = validate_author_name(String::new(), &authors, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "All authors must have a name.");
    }

    #[tokio::test]
    async fn test_own_name_is_not_a_duplicate() {
        let authors = FakeAuthors::with_names(&["Jane Doe"]);
        let id = authors.find_by_name("Jane Doe").await.unwrap().unwrap().id();
        assert!(
            validate_author_name("Jane Doe".into(), &authors, Some(id))
                .await
                .is_ok()
        );
    }

    #[test]
    fn test_phone_length_only() {
        assert!(validate_author_phone("5551234567".into()).is_ok());
        assert!(validate_author_phone("abcdefghij".into()).is_ok());
        assert!(validate_author_phone("555-123-45".into()).is_ok());
        assert_eq!(
            validate_author_phone("555123456".into()),
            Err(ValidationError::PhoneLength)
        );
        assert_eq!(
            validate_author_phone("55512345678".into()),
            Err(ValidationError::PhoneLength)
        );
        assert_eq!(
            validate_author_phone(String::new()),
            Err(ValidationError::PhoneLength)
        );
    }

    #[test]
    fn test_phone_counts_characters_not_bytes() {
        assert!(validate_author_phone("٥٥٥١٢٣٤٥٦٧".into()).is_ok());
    }

    #[test]
    fn test_title_needs_a_clickbait_phrase() {
        for title in [
            "Top 10 Tips",
            "You Won't Believe This",
            "The Secret Garden",
            "Guess Who",
        ] {
            assert!(validate_post_title(title.into()).is_ok(), "{title}");
        }
        assert!(matches!(
            validate_post_title("A Quiet Afternoon".into()),
            Err(ValidationError::NotClickbait { .. })
        ));
        for title in ["top 10 tips", "Stop Reading", "secret recipes"] {
            assert!(
                matches!(
                    validate_post_title(title.into()),
                    Err(ValidationError::NotClickbait { .. })
                ),
                "{title}"
            );
        }
        assert_eq!(
            validate_post_title(String::new()),
            Err(ValidationError::MissingTitle)
        );
    }

    #[test]
    fn test_content_minimum_length() {
        assert!(validate_post_content(repeat(250)).is_ok());
        assert!(validate_post_content(repeat(260)).is_ok());
        assert_eq!(
            validate_post_content(repeat(249)),
            Err(ValidationError::ContentTooShort { min: 250 })
        );
        assert!(validate_post_content(String::new()).is_err());
    }

    #[test]
    fn test_summary_maximum_length() {
        assert!(validate_post_summary(String::new()).is_ok());
        assert!(validate_post_summary(repeat(249)).is_ok());
        assert_eq!(
            validate_post_summary(repeat(250)),
            Err(ValidationError::SummaryTooLong { max: 250 })
        );
    }

    #[test]
    fn test_category_is_exact() {
        assert_eq!(validate_post_category("Fiction"), Ok(Category::Fiction));
        assert_eq!(
            validate_post_category("Non-Fiction"),
            Ok(Category::NonFiction)
        );
        for bad in ["fiction", "Fiction ", "NonFiction", "Poetry", ""] {
            assert_eq!(
                validate_post_category(bad),
                Err(ValidationError::InvalidCategory),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_post_fields_stop_at_first_failure() {
        let draft = NewPost {
            title: "Nothing here".into(),
            content: String::new(),
            summary: None,
            category: "poetry".into(),
        };
        assert!(matches!(
            validate_post_fields(draft),
            Err(ValidationError::NotClickbait { .. })
        ));

        let draft = NewPost {
            title: "Top 10 Tips".into(),
            content: repeat(260),
            summary: Some(repeat(300)),
            category: "poetry".into(),
        };
        assert!(matches!(
            validate_post_fields(draft),
            Err(ValidationError::SummaryTooLong { .. })
        ));
    }

    #[tokio::test]
    async fn test_author_fields_validate_phone_when_present() {
        let authors = FakeAuthors::default();

        let fields = validate_author_fields(NewAuthor::new("Jane Doe"), &authors)
            .await
            .unwrap();
        assert_eq!(fields.phone_number, None);

        let err = validate_author_fields(
            NewAuthor::new("Jane Doe").with_phone_number("12345"),
            &authors,
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::PhoneLength)
        ));
    }
}
