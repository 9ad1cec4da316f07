//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mukund_core::GeoError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request parameters could not be used (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The core refused the fix (400 or 422)
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Reload is not possible without a manifest (409)
    #[error("No dataset manifest configured")]
    NoManifest,

    /// Reference data could not be reloaded (500)
    #[error("Reload failed: {0}")]
    Reload(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Geo(GeoError::InvalidCoordinate { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Geo(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NoManifest => StatusCode::CONFLICT,
            ApiError::Reload(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Geo(e) => e.code(),
            ApiError::NoManifest => "no_manifest",
            ApiError::Reload(_) => "reload_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("Rejected request: {}", self);
        }
        let body = ErrorBody {
            error: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
