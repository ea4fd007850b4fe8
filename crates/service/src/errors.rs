use thiserror::Error;

use models::errors::ModelError;

/// Failures surfaced by a record store.
///
/// A missing record is not represented here: lookups return `Option`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key: {0} already exists")]
    DuplicateKey(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateKey(_))
    }
}

impl From<ModelError> for StoreError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => StoreError::Validation(msg),
            ModelError::Duplicate(name) => StoreError::DuplicateKey(name),
            ModelError::Db(msg) => StoreError::Unavailable(msg),
        }
    }
}
