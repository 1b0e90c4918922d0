//! User ("usuário") domain model.
//!
//! # Invariants
//! - All contact fields are required at write time; see
//!   `validation::validate_user` for the check order.

use serde::{Deserialize, Serialize};

/// Autogenerated integer key of the `users` table.
pub type UserId = i64;

/// Registered user with billing and contact data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Assigned by storage on insert.
    pub id: Option<UserId>,
    pub name: Option<String>,
    /// Tax id (CPF).
    pub document: Option<String>,
    pub address: Option<String>,
    /// Postal code (CEP).
    pub cep: Option<String>,
    pub email: Option<String>,
}

impl User {
    /// Creates an unsaved user with every required field populated.
    pub fn new(
        name: impl Into<String>,
        document: impl Into<String>,
        address: impl Into<String>,
        cep: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            document: Some(document.into()),
            address: Some(address.into()),
            cep: Some(cep.into()),
            email: Some(email.into()),
        }
    }
}
