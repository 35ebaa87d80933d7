//! Request handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use soma_engine::{BirthData, Body, BodyAnalysis, SunAnalysis};

use super::error::AppError;
use super::extract::ApiJson;
use super::state::AppState;

pub const HEALTH_STATUS: &str = "SomaClarity is breathing";

type HandlerResult<T> = Result<Json<T>, AppError>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS.to_string(),
        timestamp: Utc::now(),
    })
}

/// POST /analyze/sun
pub async fn analyze_sun(
    State(state): State<AppState>,
    ApiJson(data): ApiJson<BirthData>,
) -> HandlerResult<SunAnalysis> {
    let result = state.classifier.analyze_sun(&data).map_err(|e| {
        log::info!("analyze/sun rejected: {}", e);
        AppError::from(e)
    })?;
    Ok(Json(result))
}

/// POST /analyze/{body}
pub async fn analyze_body(
    State(state): State<AppState>,
    Path(body): Path<String>,
    ApiJson(data): ApiJson<BirthData>,
) -> HandlerResult<BodyAnalysis> {
    let body: Body = body.parse()?;
    let result = state.classifier.analyze_body(&data, body).map_err(|e| {
        log::info!("analyze/{} rejected: {}", body, e);
        AppError::from(e)
    })?;
    Ok(Json(result))
}
