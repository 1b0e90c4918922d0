//! User repository contract and SQLite implementation.

use crate::model::user::{User, UserId};
use crate::repo::{RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TABLE: &str = "users";

const USER_SELECT_SQL: &str = "SELECT
    id,
    name,
    document,
    address,
    cep,
    email
FROM users";

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    fn insert_user(&self, user: &User) -> RepoResult<UserId>;
    fn update_user(&self, id: UserId, user: &User) -> RepoResult<()>;
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Lists users in id order.
    fn list_users(&self) -> RepoResult<Vec<User>>;
    fn delete_user(&self, id: UserId) -> RepoResult<()>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, user: &User) -> RepoResult<UserId> {
        self.conn.execute(
            "INSERT INTO users (name, document, address, cep, email)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                user.name.as_deref(),
                user.document.as_deref(),
                user.address.as_deref(),
                user.cep.as_deref(),
                user.email.as_deref(),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn update_user(&self, id: UserId, user: &User) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE users
             SET
                name = ?1,
                document = ?2,
                address = ?3,
                cep = ?4,
                email = ?5
             WHERE id = ?6;",
            params![
                user.name.as_deref(),
                user.document.as_deref(),
                user.address.as_deref(),
                user.cep.as_deref(),
                user.email.as_deref(),
                id,
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }

        Ok(())
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let user = self
            .conn
            .query_row(
                &format!("{USER_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_user_row,
            )
            .optional()?;
        Ok(user)
    }

    fn list_users(&self) -> RepoResult<Vec<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} ORDER BY id ASC;"))?;
        let users = stmt
            .query_map([], parse_user_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        let changed = self.conn.execute("DELETE FROM users WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound { table: TABLE, id });
        }
        Ok(())
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: Some(row.get("id")?),
        name: Some(row.get("name")?),
        document: Some(row.get("document")?),
        address: Some(row.get("address")?),
        cep: Some(row.get("cep")?),
        email: Some(row.get("email")?),
    })
}
