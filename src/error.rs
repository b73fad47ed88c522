use axum::{http::StatusCode, response::IntoResponse};
use validator::ValidationErrors;

use crate::{auth::error::AuthError, db::error::DatabaseError};

#[derive(thiserror::Error, Debug)]
pub enum BookingError {
    #[error("not found")]
    NotFound,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Database error")]
    Database(DatabaseError),

    #[error("Auth error")]
    Auth(AuthError),

    #[error("Booking error")]
    Booking(BookingError),

    #[error("Validation error")]
    Validation(ValidationErrors),

    #[error("Missing route parameter: {0}")]
    MissingRouteParameter(&'static str),

    #[error("Render error")]
    Render(minijinja::Error),

    #[error("Other error: {0}")]
    Other(anyhow::Error),
}

impl From<DatabaseError> for Error {
    fn from(value: DatabaseError) -> Self {
        Self::Database(value)
    }
}

impl From<AuthError> for Error {
    fn from(value: AuthError) -> Self {
        Self::Auth(value)
    }
}

impl From<BookingError> for Error {
    fn from(value: BookingError) -> Self {
        Self::Booking(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Error::Database(database_error) => match database_error {
                DatabaseError::DatabaseError(error) => {
                    tracing::error!(err.msg = %error, err.details = ?error, "Database Error");

                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            Error::Auth(auth_error) => match auth_error {
                AuthError::Unauthenticated => StatusCode::UNAUTHORIZED.into_response(),
                AuthError::JwtError(error) => {
                    tracing::error!(err.msg = %error, err.details = ?error, "JWT Error");

                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            },
            Error::Booking(BookingError::NotFound) => {
                (StatusCode::NOT_FOUND, "not found").into_response()
            }
            Error::Validation(validation_error) => {
                tracing::warn!(err.msg = %validation_error, err.details = ?validation_error, "Validation Error");

                (StatusCode::BAD_REQUEST, validation_error.to_string()).into_response()
            }
            Error::MissingRouteParameter(name) => {
                tracing::error!(parameter = name, "Route is registered without a required parameter");

                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Error::Render(error) => {
                tracing::error!(err.msg = %error, err.details = ?error, "Render Error");

                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            Error::Other(error) => {
                tracing::error!(err.msg = %error, err.details = ?error, "Other Error");

                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
