use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::utils::discord::{forward_contact, ContactPayload, DiscordConfig};
use crate::AppState;

pub async fn send_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    tracing::debug!("Received contact submission from {}", payload.email);

    let config = DiscordConfig::from_env().map_err(|e| {
        tracing::error!("Discord webhook URL not configured");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": e})))
    })?;

    forward_contact(&state.http_client, &config, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Failed to relay contact message: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": e})))
        })?;

    tracing::info!("Contact message relayed to Discord");
    Ok(Json(json!({"success": true})))
}
