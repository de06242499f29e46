use axum::{Json, http::StatusCode, response::IntoResponse};
use surrealdb::Error as SError;

use thiserror::Error;
use tracing::error;

use crate::response::ApiResponse;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("SurrealDb Error: {0}")]
    SurrealError(#[from] SError),

    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Axum Error: {0}")]
    AxumError(#[from] axum::Error),

    #[error("Identity provider Error: {0}")]
    ProviderError(#[from] reqwest::Error),

    #[error("Validator Error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Json Rejection Error: {0}")]
    AxumJsonRejection(#[from] axum::extract::rejection::JsonRejection),

    #[error("Missing config value `{0}`")]
    MissingConfig(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    // ! Auth
    #[error("Missing `{0}` header")]
    MissingHeader(&'static str),
    #[error("Access denied")]
    AccessDenied,
    #[error("Organization mismatch")]
    OrganizationMismatch,

    #[error("Internal Server Error")]
    InternalServerError,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::SurrealError(error) => {
                error!("Surreal Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::IoError(error) => {
                error!("Io Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::AxumError(error) => {
                error!("Axum Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::ProviderError(error) => {
                error!("Identity provider Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::ValidationError(error) => {
                let message = format!("Input validation error: [{}]", error).replace('\n', ", ");
                error!("Validation Error:{:#?}", error);
                (StatusCode::BAD_REQUEST, message)
            }
            Error::AxumJsonRejection(error) => {
                error!("Axum Json Rejection Error:{:#?}", error);
                (StatusCode::BAD_REQUEST, error.to_string())
            }
            Error::MissingConfig(name) => {
                error!("Missing config value: {name}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            Error::MissingHeader(name) => (
                StatusCode::UNAUTHORIZED,
                format!("Missing `{name}` header"),
            ),
            Error::AccessDenied => (
                StatusCode::UNAUTHORIZED,
                "Access denied to secure endpoint".to_string(),
            ),
            Error::OrganizationMismatch => (
                StatusCode::UNAUTHORIZED,
                "Organization does not match session".to_string(),
            ),
            Error::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Error".to_string(),
            ),
        };
        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
