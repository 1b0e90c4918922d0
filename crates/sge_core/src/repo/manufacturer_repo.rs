//! Manufacturer repository contract and SQLite implementation.

use crate::model::manufacturer::{Manufacturer, ManufacturerId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TABLE: &str = "manufacturers";

/// Repository interface for manufacturer CRUD operations.
pub trait ManufacturerRepository {
    fn insert_manufacturer(&self, manufacturer: &Manufacturer) -> RepoResult<ManufacturerId>;
    fn update_manufacturer(
        &self,
        id: ManufacturerId,
        manufacturer: &Manufacturer,
    ) -> RepoResult<()>;
    fn get_manufacturer(&self, id: ManufacturerId) -> RepoResult<Option<Manufacturer>>;
    /// Lists manufacturers in id order.
    fn list_manufacturers(&self) -> RepoResult<Vec<Manufacturer>>;
    fn delete_manufacturer(&self, id: ManufacturerId) -> RepoResult<()>;
}

/// SQLite-backed manufacturer repository.
pub struct SqliteManufacturerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteManufacturerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ManufacturerRepository for SqliteManufacturerRepository<'_> {
    fn insert_manufacturer(&self, manufacturer: &Manufacturer) -> RepoResult<ManufacturerId> {
        self.conn.execute(
            "INSERT INTO manufacturers (name) VALUES (?1);",
            params![manufacturer.name.as_str()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_manufacturer(
        &self,
        id: ManufacturerId,
        manufacturer: &Manufacturer,
    ) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE manufacturers SET name = ?1 WHERE id = ?2;",
            params![manufacturer.name.as_str(), id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }
        Ok(())
    }

    fn get_manufacturer(&self, id: ManufacturerId) -> RepoResult<Option<Manufacturer>> {
        let manufacturer = self
            .conn
            .query_row(
                "SELECT id, name FROM manufacturers WHERE id = ?1;",
                [id],
                parse_manufacturer_row,
            )
            .optional()?;
        Ok(manufacturer)
    }

    fn list_manufacturers(&self) -> RepoResult<Vec<Manufacturer>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM manufacturers ORDER BY id ASC;")?;
        let manufacturers = stmt
            .query_map([], parse_manufacturer_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(manufacturers)
    }

    fn delete_manufacturer(&self, id: ManufacturerId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM manufacturers WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }
        Ok(())
    }
}

fn parse_manufacturer_row(row: &Row<'_>) -> rusqlite::Result<Manufacturer> {
    Ok(Manufacturer {
        id: Some(row.get("id")?),
        name: row.get("name")?,
    })
}
