//! Manufacturer use-case service. Manufacturers carry no required-field rules.

use super::{CrudService, EntityKind, ServiceError, ServiceResult};
use crate::model::manufacturer::{Manufacturer, ManufacturerId};
use crate::repo::manufacturer_repo::ManufacturerRepository;
use log::info;

pub struct ManufacturerService<R: ManufacturerRepository> {
    repo: R,
}

impl<R: ManufacturerRepository> ManufacturerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn read_back(&self, id: ManufacturerId, details: &'static str) -> ServiceResult<Manufacturer> {
        self.repo
            .get_manufacturer(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }
}

impl<R: ManufacturerRepository> CrudService for ManufacturerService<R> {
    type Entity = Manufacturer;
    type Id = ManufacturerId;

    fn insert(&self, manufacturer: &Manufacturer) -> ServiceResult<Manufacturer> {
        let id = self.repo.insert_manufacturer(manufacturer)?;
        info!("event=manufacturer_insert module=service status=ok id={id}");
        self.read_back(id, "inserted manufacturer not found in read-back")
    }

    fn find_all(&self) -> ServiceResult<Vec<Manufacturer>> {
        Ok(self.repo.list_manufacturers()?)
    }

    fn find_by_id(&self, id: ManufacturerId) -> ServiceResult<Option<Manufacturer>> {
        Ok(self.repo.get_manufacturer(id)?)
    }

    fn update(
        &self,
        id: ManufacturerId,
        manufacturer: &Manufacturer,
    ) -> ServiceResult<Manufacturer> {
        self.repo
            .update_manufacturer(id, manufacturer)
            .map_err(|err| ServiceError::from_repo(err, EntityKind::Manufacturer))?;
        info!("event=manufacturer_update module=service status=ok id={id}");
        self.read_back(id, "updated manufacturer not found in read-back")
    }

    /// Fails with a constraint violation while products still reference it.
    fn delete(&self, id: ManufacturerId) -> ServiceResult<()> {
        self.repo
            .delete_manufacturer(id)
            .map_err(|err| ServiceError::from_repo(err, EntityKind::Manufacturer))?;
        info!("event=manufacturer_delete module=service status=ok id={id}");
        Ok(())
    }
}
