use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate value: {0}")]
    Duplicate(String),
    #[error("record not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(String),
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        if let DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated = err {
            return Self::NotFound;
        }
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Duplicate(msg),
            _ => Self::Db(err.to_string()),
        }
    }
}
