//! Core domain logic for the SGE product catalog and user registry.
//! This crate owns the required-field rules and the CRUD service contract.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod validation;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{Category, CategoryId};
pub use model::manufacturer::{Manufacturer, ManufacturerId};
pub use model::product::{Product, ProductId};
pub use model::user::{User, UserId};
pub use repo::category_repo::{CategoryRepository, SqliteCategoryRepository};
pub use repo::manufacturer_repo::{ManufacturerRepository, SqliteManufacturerRepository};
pub use repo::product_repo::{ProductRepository, SqliteProductRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::category_service::CategoryService;
pub use service::manufacturer_service::ManufacturerService;
pub use service::product_service::ProductService;
pub use service::user_service::UserService;
pub use service::{CrudService, EntityKind, ServiceError, ServiceResult};
pub use validation::{validate_product, validate_user, ValidationError, ValidationResult};

