use std::collections::BTreeMap;

use thiserror::Error;

/// Field name to human readable problem, ordered by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Failure reported by an account store.
///
/// Callers branch on the variant instead of inspecting error types at runtime:
/// `Validation` carries the per-field breakdown, `Repository` is everything
/// else the backing store could not do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("account validation error")]
    Validation(FieldErrors),
    #[error("account not found")]
    NotFound,
    #[error("{0}")]
    Repository(String),
}

impl StoreError {
    pub fn field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), message.to_string());
        Self::Validation(errors)
    }
}

impl From<models::errors::ModelError> for StoreError {
    fn from(err: models::errors::ModelError) -> Self {
        use models::errors::ModelError;
        match err {
            ModelError::Duplicate(_) => Self::field("email", "email already registered"),
            ModelError::NotFound => Self::NotFound,
            ModelError::Db(msg) => Self::Repository(msg),
        }
    }
}
