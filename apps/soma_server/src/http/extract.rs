//! JSON body extractor whose rejections use the API error shape.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap, StatusCode},
};
use serde::de::DeserializeOwned;
use serde_path_to_error::Segment;

use super::error::AppError;

/// Like `axum::Json`, but a body that fails to parse becomes an [`AppError`]
/// instead of axum's plain-text rejection.
///
/// Field-level failures on the calendar fields report `InvalidDateError`,
/// on `lat`/`lon` `InvalidLocationError`; anything else is
/// `InvalidRequestError`.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::invalid_request(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected request with `Content-Type: application/json`",
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_request(e.status(), e.body_text()))?;

        let deserializer = &mut serde_json::Deserializer::from_slice(&bytes);
        serde_path_to_error::deserialize(deserializer)
            .map(ApiJson)
            .map_err(|err| {
                let field = match err.path().iter().next() {
                    Some(Segment::Map { key }) => Some(key.clone()),
                    _ => None,
                };
                let message = err.to_string();
                match field.as_deref() {
                    Some("year" | "month" | "day" | "hour") => AppError::Rejected {
                        status: StatusCode::UNPROCESSABLE_ENTITY,
                        kind: "InvalidDateError",
                        message,
                    },
                    Some("lat" | "lon") => AppError::Rejected {
                        status: StatusCode::UNPROCESSABLE_ENTITY,
                        kind: "InvalidLocationError",
                        message,
                    },
                    _ => AppError::invalid_request(StatusCode::BAD_REQUEST, message),
                }
            })
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}
