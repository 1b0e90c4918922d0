//! Product repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist products with foreign keys to category and manufacturer.
//! - Resolve both references on every read.
//!
//! # Invariants
//! - Write paths take reference keys from `product.category.id` and
//!   `product.manufacturer.id`; unsaved references are rejected before SQL.
//! - Dangling keys are rejected by SQLite foreign keys.

use crate::model::category::{Category, CategoryId};
use crate::model::manufacturer::{Manufacturer, ManufacturerId};
use crate::model::product::{Product, ProductId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TABLE: &str = "products";

const PRODUCT_SELECT_SQL: &str = "SELECT
    p.id,
    p.name,
    p.description,
    p.cost_value,
    p.sale_value,
    c.id AS category_id,
    c.name AS category_name,
    m.id AS manufacturer_id,
    m.name AS manufacturer_name
FROM products p
JOIN categories c ON c.id = p.category_id
JOIN manufacturers m ON m.id = p.manufacturer_id";

/// Repository interface for product CRUD operations.
pub trait ProductRepository {
    fn insert_product(&self, product: &Product) -> RepoResult<ProductId>;
    fn update_product(&self, id: ProductId, product: &Product) -> RepoResult<()>;
    fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>>;
    /// Lists products in insertion (id) order.
    fn list_products(&self) -> RepoResult<Vec<Product>>;
    fn delete_product(&self, id: ProductId) -> RepoResult<()>;
}

/// SQLite-backed product repository.
pub struct SqliteProductRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProductRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProductRepository for SqliteProductRepository<'_> {
    fn insert_product(&self, product: &Product) -> RepoResult<ProductId> {
        let (category_id, manufacturer_id) = reference_keys(product)?;

        self.conn.execute(
            "INSERT INTO products (
                name,
                description,
                cost_value,
                sale_value,
                category_id,
                manufacturer_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                product.name.as_deref(),
                product.description.as_deref(),
                product.cost_value,
                product.sale_value,
                category_id,
                manufacturer_id,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_product(&self, id: ProductId, product: &Product) -> RepoResult<()> {
        let (category_id, manufacturer_id) = reference_keys(product)?;

        let changed = self.conn.execute(
            "UPDATE products
             SET
                name = ?1,
                description = ?2,
                cost_value = ?3,
                sale_value = ?4,
                category_id = ?5,
                manufacturer_id = ?6
             WHERE id = ?7;",
            params![
                product.name.as_deref(),
                product.description.as_deref(),
                product.cost_value,
                product.sale_value,
                category_id,
                manufacturer_id,
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }

        Ok(())
    }

    fn get_product(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let product = self
            .conn
            .query_row(
                &format!("{PRODUCT_SELECT_SQL} WHERE p.id = ?1;"),
                [id],
                parse_product_row,
            )
            .optional()?;
        Ok(product)
    }

    fn list_products(&self) -> RepoResult<Vec<Product>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PRODUCT_SELECT_SQL} ORDER BY p.id ASC;"))?;
        let products = stmt
            .query_map([], parse_product_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    fn delete_product(&self, id: ProductId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM products WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }
        Ok(())
    }
}

fn reference_keys(product: &Product) -> RepoResult<(CategoryId, ManufacturerId)> {
    let category_id = product
        .category
        .as_ref()
        .and_then(|category| category.id)
        .ok_or(RepoError::UnsavedReference("category"))?;
    let manufacturer_id = product
        .manufacturer
        .as_ref()
        .and_then(|manufacturer| manufacturer.id)
        .ok_or(RepoError::UnsavedReference("manufacturer"))?;
    Ok((category_id, manufacturer_id))
}

fn parse_product_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        description: Some(row.get("description")?),
        cost_value: Some(row.get("cost_value")?),
        sale_value: Some(row.get("sale_value")?),
        category: Some(Category {
            id: Some(row.get("category_id")?),
            name: row.get("category_name")?,
        }),
        manufacturer: Some(Manufacturer {
            id: Some(row.get("manufacturer_id")?),
            name: row.get("manufacturer_name")?,
        }),
    })
}
