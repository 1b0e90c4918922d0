//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Identifiers come from SQLite autoincrement keys and are never written
//!   by callers.
//! - Repositories do not run required-field validation; services do, and the
//!   schema's `NOT NULL` constraints back it up.
//! - Missing rows on update/delete surface as `RepoError::NotFound`.

pub mod category_repo;
mod error;
pub mod manufacturer_repo;
pub mod product_repo;
pub mod user_repo;

pub use error::{RepoError, RepoResult};
