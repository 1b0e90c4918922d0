//! Manufacturer ("fabricante") record.

use serde::{Deserialize, Serialize};

/// Autogenerated integer key of the `manufacturers` table.
pub type ManufacturerId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Assigned by storage on insert.
    pub id: Option<ManufacturerId>,
    pub name: String,
}

impl Manufacturer {
    /// Creates an unsaved manufacturer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Returns whether storage has assigned an id to this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
