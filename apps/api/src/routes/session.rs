use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::session::DraftSession;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StartSessionRequest {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub target_program: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
    pub model: String,
    pub has_credential: bool,
}

/// POST /api/v1/session
///
/// Starts a fresh session: new gateway settings, no drafts. Missing fields
/// fall back to the server configuration.
pub async fn handle_start_session(
    State(state): State<AppState>,
    Json(request): Json<StartSessionRequest>,
) -> Json<StartSessionResponse> {
    let settings = state
        .config
        .gateway_settings(request.api_key.as_deref(), request.model.as_deref());
    let mut fresh = DraftSession::start(settings);
    fresh.target_program = request.target_program.unwrap_or_default().trim().to_string();

    let response = StartSessionResponse {
        session_id: fresh.id,
        model: fresh.gateway.model().to_string(),
        has_credential: fresh.gateway.has_credential(),
    };

    *state.session.lock().await = fresh;
    info!(
        "Started session {} (model {}, credential {})",
        response.session_id,
        response.model,
        if response.has_credential { "set" } else { "missing" }
    );

    Json(response)
}
