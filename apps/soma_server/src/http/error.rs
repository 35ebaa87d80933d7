//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use soma_engine::{AnalysisError, OracleError};

/// Error body returned to clients. No partial result accompanies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// `InvalidDateError`, `InvalidLocationError`, `EphemerisUnavailableError`
    /// or `InvalidRequestError`
    pub kind: String,
    pub message: String,
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Failure raised by the position pipeline
    Analysis(AnalysisError),
    /// Request rejected before it reached the pipeline
    Rejected {
        status: StatusCode,
        kind: &'static str,
        message: String,
    },
}

impl AppError {
    pub fn invalid_request(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Rejected {
            status,
            kind: "InvalidRequestError",
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Analysis(err) => {
                let status = match &err {
                    AnalysisError::InvalidDate(_) | AnalysisError::InvalidLocation { .. } => {
                        StatusCode::UNPROCESSABLE_ENTITY
                    }
                    AnalysisError::EphemerisUnavailable(OracleError::UnknownBody { .. }) => {
                        StatusCode::NOT_FOUND
                    }
                    AnalysisError::EphemerisUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                };
                let body = ApiError {
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                };
                (status, body)
            }
            AppError::Rejected { status, kind, message } => (
                status,
                ApiError {
                    kind: kind.to_string(),
                    message,
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Analysis(err)
    }
}

impl From<OracleError> for AppError {
    fn from(err: OracleError) -> Self {
        AppError::Analysis(AnalysisError::from(err))
    }
}
