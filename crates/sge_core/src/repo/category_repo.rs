//! Category repository contract and SQLite implementation.

use crate::model::category::{Category, CategoryId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TABLE: &str = "categories";

/// Repository interface for category CRUD operations.
pub trait CategoryRepository {
    fn insert_category(&self, category: &Category) -> RepoResult<CategoryId>;
    fn update_category(&self, id: CategoryId, category: &Category) -> RepoResult<()>;
    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>>;
    /// Lists categories in id order.
    fn list_categories(&self) -> RepoResult<Vec<Category>>;
    fn delete_category(&self, id: CategoryId) -> RepoResult<()>;
}

/// SQLite-backed category repository.
pub struct SqliteCategoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCategoryRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CategoryRepository for SqliteCategoryRepository<'_> {
    fn insert_category(&self, category: &Category) -> RepoResult<CategoryId> {
        self.conn.execute(
            "INSERT INTO categories (name) VALUES (?1);",
            params![category.name.as_str()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_category(&self, id: CategoryId, category: &Category) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE categories SET name = ?1 WHERE id = ?2;",
            params![category.name.as_str(), id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }
        Ok(())
    }

    fn get_category(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        let category = self
            .conn
            .query_row(
                "SELECT id, name FROM categories WHERE id = ?1;",
                [id],
                parse_category_row,
            )
            .optional()?;
        Ok(category)
    }

    fn list_categories(&self) -> RepoResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM categories ORDER BY id ASC;")?;
        let categories = stmt
            .query_map([], parse_category_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    fn delete_category(&self, id: CategoryId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }
        Ok(())
    }
}

fn parse_category_row(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: Some(row.get("id")?),
        name: row.get("name")?,
    })
}
