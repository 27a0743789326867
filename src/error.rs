use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Todo id {0} does not fit in a database integer")]
    IdOutOfRange(u64),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request")]
    BadRequest,

    #[error("Todo not found")]
    NotFound,

    #[error("Internal server error")]
    InternalServerError,
}

impl AppError {
    /// Maps a failed lookup by id. A missing record is the caller's 404; anything
    /// else is logged with the failing operation and hidden from the caller.
    pub fn from_lookup(operation: &str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound,
            err => Self::internal(operation, err),
        }
    }

    /// Maps a failed search or write. These have no not-found case, so every
    /// failure, `NotFound` included, is logged and becomes a 500.
    pub fn internal(operation: &str, err: RepositoryError) -> Self {
        error!("Error {}: {}", operation, err);
        AppError::InternalServerError
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest => (StatusCode::BAD_REQUEST, "Invalid request."),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Todo not found."),
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error.",
            ),
        };

        (status, Json(message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_record_on_lookup_is_not_found() {
        let err = AppError::from_lookup("getting todo", RepositoryError::NotFound);
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn other_lookup_failures_become_internal() {
        let err = AppError::from_lookup(
            "getting todo",
            RepositoryError::Database(sqlx::Error::PoolTimedOut),
        );
        assert!(matches!(err, AppError::InternalServerError));

        let err = AppError::from_lookup("getting todo", RepositoryError::IdOutOfRange(u64::MAX));
        assert!(matches!(err, AppError::InternalServerError));
    }

    #[test]
    fn write_failures_are_always_internal() {
        let err = AppError::internal("deleting todo", RepositoryError::NotFound);
        assert!(matches!(err, AppError::InternalServerError));

        let err = AppError::internal(
            "creating todo",
            RepositoryError::Database(sqlx::Error::PoolTimedOut),
        );
        assert!(matches!(err, AppError::InternalServerError));
    }

    #[test]
    fn status_codes() {
        assert_eq!(AppError::BadRequest.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::InternalServerError.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
