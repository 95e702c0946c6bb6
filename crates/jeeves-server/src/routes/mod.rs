//! Route definitions for the HTTP API.

mod health;
mod memories;
mod reactions;
mod respond;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Chat
        .route("/respond", post(respond::respond))
        // Memory inspection
        .route("/memories/:region", get(memories::list_memory))
        // Reaction seeding
        .route("/reactions/:name", post(reactions::add_response))
        // Attach state
        .with_state(state)
}

pub use health::*;
pub use memories::*;
pub use reactions::*;
pub use respond::*;
