use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::{AppState, error::Result};

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        })),
    )
}

pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.store.ping().await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "database": "connected"
        })),
    ))
}
