use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::inference::client::InferenceError;
use crate::media::MediaError;
use crate::storage::StoreError;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Request-level failure taxonomy. Every failure is reported in the
/// response for the request that caused it; nothing here is fatal to
/// the process.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Uploaded file is not an image")]
    InvalidInputKind,
    #[error("Image preprocessing failed: {0}")]
    PreprocessingFailed(#[from] image::ImageError),
    #[error("Inference service unreachable: {0}")]
    InferenceUnavailable(String),
    #[error("Inference service error: {0}")]
    InferenceService(String),
    #[error("Scan not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInputKind => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::PreprocessingFailed(_)
            | ApiError::InferenceUnavailable(_)
            | ApiError::InferenceService(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<InferenceError> for ApiError {
    fn from(err: InferenceError) -> Self {
        match err {
            InferenceError::Unavailable(msg) => ApiError::InferenceUnavailable(msg),
            InferenceError::Service { .. } | InferenceError::MalformedResponse(_) => {
                ApiError::InferenceService(err.to_string())
            }
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(err: MediaError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            ApiError::InvalidInputKind.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::InferenceUnavailable("connection refused".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::InferenceService("bad body".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_body_is_scan_not_found() {
        assert_eq!(ApiError::NotFound.to_string(), "Scan not found");
    }
}
