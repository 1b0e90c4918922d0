//! User use-case service.
//!
//! # Invariants
//! - `update` on a missing id fails with `NotFound` before validation runs.
//! - A rejected `update` leaves the stored record unchanged.

use super::{rejected, CrudService, EntityKind, ServiceError, ServiceResult};
use crate::model::user::{User, UserId};
use crate::repo::user_repo::UserRepository;
use crate::validation::validate_user;
use log::info;

/// User service facade over repository implementations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn read_back(&self, id: UserId, details: &'static str) -> ServiceResult<User> {
        self.repo
            .get_user(id)?
            .ok_or(ServiceError::InconsistentState(details))
    }
}

impl<R: UserRepository> CrudService for UserService<R> {
    type Entity = User;
    type Id = UserId;

    fn insert(&self, user: &User) -> ServiceResult<User> {
        validate_user(user).map_err(|err| rejected("user_insert", err))?;

        let id = self.repo.insert_user(user)?;
        info!("event=user_insert module=service status=ok id={id}");
        self.read_back(id, "inserted user not found in read-back")
    }

    fn find_all(&self) -> ServiceResult<Vec<User>> {
        Ok(self.repo.list_users()?)
    }

    fn find_by_id(&self, id: UserId) -> ServiceResult<Option<User>> {
        Ok(self.repo.get_user(id)?)
    }

    fn update(&self, id: UserId, user: &User) -> ServiceResult<User> {
        if self.repo.get_user(id)?.is_none() {
            return Err(ServiceError::NotFound(EntityKind::User));
        }
        validate_user(user).map_err(|err| rejected("user_update", err))?;

        self.repo
            .update_user(id, user)
            .map_err(|err| ServiceError::from_repo(err, EntityKind::User))?;
        info!("event=user_update module=service status=ok id={id}");
        self.read_back(id, "updated user not found in read-back")
    }

    fn delete(&self, id: UserId) -> ServiceResult<()> {
        self.repo
            .delete_user(id)
            .map_err(|err| ServiceError::from_repo(err, EntityKind::User))?;
        info!("event=user_delete module=service status=ok id={id}");
        Ok(())
    }
}
