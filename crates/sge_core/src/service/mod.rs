//! Core use-case services.
//!
//! # Responsibility
//! - Run required-field validation before any persistence write.
//! - Translate repository misses into entity-level not-found errors.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - A validation failure never reaches the repository.
//! - `update` checks existence before validating input.

pub mod category_service;
pub mod manufacturer_service;
pub mod product_service;
pub mod user_service;

use crate::repo::RepoError;
use crate::validation::ValidationError;
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// CRUD contract shared by every entity service.
pub trait CrudService {
    type Entity;
    type Id: Copy;

    /// Validates and persists a new entity, returning it with its id.
    fn insert(&self, entity: &Self::Entity) -> ServiceResult<Self::Entity>;
    /// Returns every persisted entity in insertion order.
    fn find_all(&self) -> ServiceResult<Vec<Self::Entity>>;
    /// Returns `None` when no entity has this id.
    fn find_by_id(&self, id: Self::Id) -> ServiceResult<Option<Self::Entity>>;
    /// Replaces the stored fields of an existing entity. The stored id is kept.
    fn update(&self, id: Self::Id, entity: &Self::Entity) -> ServiceResult<Self::Entity>;
    /// Removes an existing entity.
    fn delete(&self, id: Self::Id) -> ServiceResult<()>;
}

/// Entity families handled by the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Product,
    Category,
    Manufacturer,
    User,
}

impl EntityKind {
    /// User-facing message reported when a lookup misses.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Self::Product => "Produto não encontrado",
            Self::Category => "Categoria não encontrada",
            Self::Manufacturer => "Fabricante não encontrado",
            Self::User => "Usuário não encontrado",
        }
    }
}

/// Service error for CRUD use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input failed a required-field check; nothing was written.
    Validation(ValidationError),
    /// Target id does not resolve to a stored entity.
    NotFound(EntityKind),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl ServiceError {
    /// Maps a repository miss to `NotFound(kind)`; other errors pass through.
    pub fn from_repo(err: RepoError, kind: EntityKind) -> Self {
        match err {
            RepoError::NotFound { .. } => Self::NotFound(kind),
            other => Self::Repo(other),
        }
    }

    /// Returns the validation reason code, if this is a validation failure.
    pub fn validation_code(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.code()),
            _ => None,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(kind) => f.write_str(kind.not_found_message()),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

fn rejected(event: &str, err: ValidationError) -> ServiceError {
    warn!(
        "event={event} module=service status=rejected reason={}",
        err.code()
    );
    ServiceError::Validation(err)
}
