use super::types::{ErrorResponse, HealthResponse};
use crate::relay::{Relay, Responder};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use tracing::{debug, error};

#[derive(Clone)]
pub struct AppState {
    pub relay: Relay,
}

/// Hands one inbound message to the relay and waits for its reply.
/// Unrecognized messages get `204 No Content`.
pub async fn message(State(state): State<AppState>, Json(message): Json<Value>) -> Response {
    let (responder, reply) = Responder::new();

    if !state.relay.on_message(message, responder) {
        debug!("Message not recognized, no reply");
        return StatusCode::NO_CONTENT.into_response();
    }

    match reply.await {
        Ok(answer) => (StatusCode::OK, Json(answer)).into_response(),
        Err(e) => {
            error!("Relay dropped a recognized request without replying: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Relay closed without a reply".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
