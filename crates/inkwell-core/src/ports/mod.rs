//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" the storage layer must implement.

mod repository;

pub use repository::{AuthorRepository, BaseRepository, PostRepository};
