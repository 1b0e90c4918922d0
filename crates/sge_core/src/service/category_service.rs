//! Category use-case service. Categories carry no required-field rules.

use super::{CrudService, EntityKind, ServiceError, ServiceResult};
use crate::model::category::{Category, CategoryId};
use crate::repo::category_repo::CategoryRepository;
use log::info;

pub struct CategoryService<R: CategoryRepository> {
    repo: R,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn read_back(&self, id: CategoryId, details: &'static str) -> ServiceResult<Category> {
        self.repo
            .get_category(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }
}

impl<R: CategoryRepository> CrudService for CategoryService<R> {
    type Entity = Category;
    type Id = CategoryId;

    fn insert(&self, category: &Category) -> ServiceResult<Category> {
        let id = self.repo.insert_category(category)?;
        info!("event=category_insert module=service status=ok id={id}");
        self.read_back(id, "inserted category not found in read-back")
    }

    fn find_all(&self) -> ServiceResult<Vec<Category>> {
        Ok(self.repo.list_categories()?)
    }

    fn find_by_id(&self, id: CategoryId) -> ServiceResult<Option<Category>> {
        Ok(self.repo.get_category(id)?)
    }

    fn update(&self, id: CategoryId, category: &Category) -> ServiceResult<Category> {
        self.repo
            .update_category(id, category)
            .map_err(|err| ServiceError::from_repo(err, EntityKind::Category))?;
        info!("event=category_update module=service status=ok id={id}");
        self.read_back(id, "updated category not found in read-back")
    }

    /// Fails with a constraint violation while products still reference it.
    fn delete(&self, id: CategoryId) -> ServiceResult<()> {
        self.repo
            .delete_category(id)
            .map_err(|err| ServiceError::from_repo(err, EntityKind::Category))?;
        info!("event=category_delete module=service status=ok id={id}");
        Ok(())
    }
}
