//! Reaction seeding endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddResponseRequest {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct AddResponseResponse {
    pub reaction: String,
    pub responses: usize,
}

/// Add a candidate response to a reaction.
/// POST /reactions/:name
pub async fn add_response(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(request): Json<AddResponseRequest>,
) -> ApiResult<Json<AddResponseResponse>> {
    let name = name.trim().to_lowercase();
    if name.is_empty() || request.response.trim().is_empty() {
        return Err(ApiError::bad_request("reaction name and response are required"));
    }

    let responses = state
        .motor
        .lock()
        .await
        .reactions()
        .add_response(&name, &request.response)
        .await?;

    Ok(Json(AddResponseResponse {
        reaction: name,
        responses,
    }))
}
