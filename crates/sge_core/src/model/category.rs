//! Product category record.

use serde::{Deserialize, Serialize};

/// Autogenerated integer key of the `categories` table.
pub type CategoryId = i64;

/// Grouping label referenced by products.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Category {
    /// Assigned by storage on insert.
    pub id: Option<CategoryId>,
    pub name: String,
}

impl Category {
    /// Creates an unsaved category.
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
