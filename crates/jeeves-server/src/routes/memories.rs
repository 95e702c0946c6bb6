//! Memory inspection endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;
use jeeves_core::MemoryRegion;

/// Keys of one memory region.
#[derive(Debug, Serialize)]
pub struct MemoryListing {
    pub region: MemoryRegion,
    pub keys: Vec<String>,
}

/// List every key of a region, sorted.
/// GET /memories/:region
pub async fn list_memory(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> ApiResult<Json<MemoryListing>> {
    let region = MemoryRegion::parse_user(&region)?;
    let keys = state.motor.lock().await.memory().list_all(region).await?;

    Ok(Json(MemoryListing { region, keys }))
}
