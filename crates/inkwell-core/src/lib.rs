//! # Inkwell Core
//!
//! The domain layer for the blog content service.
//! Author and post records, the field validators enforced on every write,
//! and the repository ports the storage layer implements.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{DomainError, RepoError, ValidationError};
pub use service::{AuthorService, PostService};
