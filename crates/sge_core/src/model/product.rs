//! Product domain model.
//!
//! # Responsibility
//! - Carry product input and persisted state through service calls.
//! - Hold category/manufacturer as resolved references, not bare keys.
//!
//! # Invariants
//! - Required fields are checked by `validation::validate_product`, never
//!   by construction, so incomplete drafts stay representable.
//! - References written to storage must already be persisted.

use crate::model::category::Category;
use crate::model::manufacturer::Manufacturer;
use serde::{Deserialize, Serialize};

/// Autogenerated integer key of the `products` table.
pub type ProductId = i64;

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by storage on insert.
    pub id: Option<ProductId>,
    /// Display name. Not part of the required field set.
    pub name: Option<String>,
    pub description: Option<String>,
    /// Purchase cost.
    pub cost_value: Option<f64>,
    /// Sale price.
    pub sale_value: Option<f64>,
    pub category: Option<Category>,
    pub manufacturer: Option<Manufacturer>,
}

impl Product {
    /// Creates an unsaved product with every required field populated.
    pub fn new(
        description: impl Into<String>,
        cost_value: f64,
        sale_value: f64,
        category: Category,
        manufacturer: Manufacturer,
    ) -> Self {
        Self {
            id: None,
            name: None,
            description: Some(description.into()),
            cost_value: Some(cost_value),
            sale_value: Some(sale_value),
            category: Some(category),
            manufacturer: Some(manufacturer),
        }
    }

    /// Sets the optional display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
