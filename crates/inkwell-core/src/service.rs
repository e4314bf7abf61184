//! Validated write path: build or change a record, then commit it.
//!
//! Nothing reaches `save` unless every field validator accepted it. A
//! failure aborts the whole write; nothing is stored.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Author, AuthorChanges, NewAuthor, NewPost, Post, PostChanges};
use crate::error::{DomainError, RepoError, ValidationError};
use crate::ports::{AuthorRepository, PostRepository};

/// Creates and updates authors.
#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    pub async fn create(&self, draft: NewAuthor) -> Result<Author, DomainError> {
        let author = Author::new(draft, self.authors.as_ref()).await?;
        self.commit(author).await
    }

    pub async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<Author, DomainError> {
        let mut author = self
            .authors
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Author",
                id,
            })?;

        author.apply(changes, self.authors.as_ref()).await?;
        self.commit(author).await
    }

    // A unique-index hit means another write took the name between our
    // lookup and the insert; report it the same way the validator would.
    // Relies on `authors.name` being the only unique constraint besides the key.
    async fn commit(&self, author: Author) -> Result<Author, DomainError> {
        self.authors.save(author).await.map_err(|e| match e {
            RepoError::Constraint(_) => ValidationError::DuplicateName.into(),
            other => other.into(),
        })
    }
}

/// Creates and updates posts.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    pub async fn create(&self, draft: NewPost) -> Result<Post, DomainError> {
        let post = Post::new(draft)?;
        Ok(self.posts.save(post).await?)
    }

    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })?;

        post.apply(changes)?;
        Ok(self.posts.save(post).await?)
    }
}
