//! Error taxonomy of the admin client.
//!
//! Every variant is caught at the UI operation boundary and shown as a
//! transient notification; validation errors are additionally rendered
//! inline next to the offending field.

use contracts::shared::validation::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Network failure or non-success status on a read
    #[error("Ошибка загрузки: {0}")]
    Fetch(String),

    /// Create / update failure
    #[error("Ошибка при сохранении: {0}")]
    Save(String),

    #[error("Не удалось удалить: {0}")]
    Delete(String),

    /// Client-side validation; never reaches the network
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Another mutation on the same entity is still pending
    #[error("Операция уже выполняется")]
    Busy,
}

impl AppError {
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            AppError::Validation(v) => Some(v),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
