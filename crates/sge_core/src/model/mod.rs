//! Entity records for the SGE catalog and user registry.
//!
//! # Responsibility
//! - Define the canonical shapes persisted by repositories.
//! - Keep nullable inputs representable so validation can report them.
//!
//! # Invariants
//! - `id` is `None` until the persistence layer assigns it on insert.
//! - Once assigned, an `id` is never reassigned to another record.

pub mod category;
pub mod manufacturer;
pub mod product;
pub mod user;
