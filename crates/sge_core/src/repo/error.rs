use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error shared by all entity repositories.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// No row with this key exists in `table`.
    NotFound { table: &'static str, id: i64 },
    /// Foreign key, `NOT NULL` or `CHECK` constraint rejected the write.
    ConstraintViolation(String),
    /// A referenced record has not been persisted yet (no id).
    UnsavedReference(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { table, id } => write!(f, "row not found: {table}.id={id}"),
            Self::ConstraintViolation(message) => write!(f, "constraint violation: {message}"),
            Self::UnsavedReference(field) => {
                write!(f, "reference `{field}` must be persisted before use")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(err, message)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::ConstraintViolation(message.unwrap_or_else(|| err.to_string()))
            }
            other => Self::Db(DbError::Sqlite(other)),
        }
    }
}
