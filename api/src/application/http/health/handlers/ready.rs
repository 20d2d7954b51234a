use axum::{Json, extract::State, http::StatusCode};
use flavormap_core::domain::health::{entities::ProviderStatus, ports::HealthCheckService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ReadyResponse {
    pub ready: bool,
    pub providers: ProviderStatus,
}

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Reports whether both upstream providers have credentials configured.",
    responses(
        (status = 200, body = ReadyResponse),
        (status = 503, body = ReadyResponse, description = "A provider is not configured")
    ),
)]
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let providers = state.service.readiness();
    let ready = providers.is_ready();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadyResponse { ready, providers }))
}
