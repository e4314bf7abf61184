//! Domain entities - the core business objects.

mod author;

mod post;

pub use author::{Author, AuthorChanges, AuthorRecord, NewAuthor};
pub use post::{Category, NewPost, Post, PostChanges, PostRecord};
