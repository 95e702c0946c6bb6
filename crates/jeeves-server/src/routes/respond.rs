//! Chat endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for a chat message.
#[derive(Debug, Deserialize)]
pub struct RespondRequest {
    pub text: String,
}

/// Jeeves' answer.
#[derive(Debug, Serialize)]
pub struct RespondResponse {
    pub reaction: String,
}

/// Answer one line of text.
/// POST /respond
///
/// The text is lowercased before resolution. Failures inside the pipeline are
/// answered in the reaction itself.
pub async fn respond(
    State(state): State<AppState>,
    Json(request): Json<RespondRequest>,
) -> ApiResult<Json<RespondResponse>> {
    let text = request.text.trim().to_lowercase();
    if text.is_empty() {
        return Err(ApiError::bad_request("text must not be empty"));
    }

    let reaction = state.motor.lock().await.respond(&text).await;
    Ok(Json(RespondResponse { reaction }))
}
