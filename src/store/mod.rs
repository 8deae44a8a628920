//! Core data access: the user directory, the event catalog and the
//! attendance ledger. Each operation issues a single statement against the
//! pool it is given.

use crate::error::AppError;
use actix_web::http::StatusCode;
use derive_more::Display;

pub mod attendance;
pub mod events;
pub mod users;

#[derive(Debug, Display)]
pub enum StoreError {
    /// Lookup matched no row, or a write affected zero rows.
    #[display(fmt = "no matching record")]
    NotFound,
    /// Rejected before the store was touched.
    #[display(fmt = "{}", _0)]
    Validation(&'static str),
    #[display(fmt = "storage error: {}", _0)]
    Storage(sqlx::Error),
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Storage(e) => Some(e),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Storage(e)
    }
}

impl StoreError {
    /// Maps onto the HTTP error taxonomy. Storage failures answer with the
    /// status the calling endpoint documents.
    pub fn respond(self, storage_status: StatusCode, not_found: impl Into<String>) -> AppError {
        match self {
            StoreError::NotFound => AppError::NotFound(not_found.into()),
            StoreError::Validation(msg) => AppError::Validation(msg.to_string()),
            StoreError::Storage(source) => AppError::Storage {
                status: storage_status,
                source,
            },
        }
    }
}

impl StoreError {
    /// For operations that never report `NotFound` (inserts, existence checks that
    /// already matched). Storage failures answer with `storage_status`.
    pub fn fail(self, storage_status: StatusCode) -> AppError {
        match self {
            StoreError::Validation(msg) => AppError::Validation(msg.to_string()),
            StoreError::NotFound => AppError::NotFound("Registro no encontrado".into()),
            StoreError::Storage(source) => AppError::Storage {
                status: storage_status,
                source,
            },
        }
    }
}

/// Turns an affected-row count into the success flag of a write.
pub(crate) fn affected(rows: u64) -> Result<(), StoreError> {
    if rows == 0 {
        Err(StoreError::NotFound)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn fail_keeps_storage_status() {
        let err = StoreError::Storage(sqlx::Error::PoolClosed).fail(StatusCode::BAD_REQUEST);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn respond_uses_given_not_found_message() {
        let err = StoreError::NotFound.respond(StatusCode::INTERNAL_SERVER_ERROR, "Evento no encontrado");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Evento no encontrado");
    }
}
