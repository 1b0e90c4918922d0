//! Product use-case service.
//!
//! # Invariants
//! - `insert`/`update` run `validate_product` before touching storage.
//! - `find_by_id` reports a miss as `Ok(None)`; `update`/`delete` report it
//!   as `ServiceError::NotFound`.

use super::{rejected, CrudService, EntityKind, ServiceError, ServiceResult};
use crate::model::product::{Product, ProductId};
use crate::repo::product_repo::ProductRepository;
use crate::validation::validate_product;
use log::info;

/// Product service facade over repository implementations.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn read_back(&self, id: ProductId, details: &'static str) -> ServiceResult<Product> {
        self.repo
            .get_product(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }
}

impl<R: ProductRepository> CrudService for ProductService<R> {
    type Entity = Product;
    type Id = ProductId;

    fn insert(&self, product: &Product) -> ServiceResult<Product> {
        validate_product(product).map_err(|err| rejected("product_insert", err))?;

        let id = self.repo.insert_product(product)?;
        info!("event=product_insert module=service status=ok id={id}");
        self.read_back(id, "inserted product not found in read-back")
    }

    fn find_all(&self) -> ServiceResult<Vec<Product>> {
        Ok(self.repo.list_products()?)
    }

    fn find_by_id(&self, id: ProductId) -> ServiceResult<Option<Product>> {
        Ok(self.repo.get_product(id)?)
    }

    fn update(&self, id: ProductId, product: &Product) -> ServiceResult<Product> {
        if self.repo.get_product(id)?.is_none() {
            return Err(ServiceError::NotFound(EntityKind::Product));
        }
        validate_product(product).map_err(|err| rejected("product_update", err))?;

        self.repo
            .update_product(id, product)
            .map_err(|err| ServiceError::from_repo(err, EntityKind::Product))?;
        info!("event=product_update module=service status=ok id={id}");
        self.read_back(id, "updated product not found in read-back")
    }

    fn delete(&self, id: ProductId) -> ServiceResult<()> {
        self.repo
            .delete_product(id)
            .map_err(|err| ServiceError::from_repo(err, EntityKind::Product))?;
        info!("event=product_delete module=service status=ok id={id}");
        Ok(())
    }
}
