//! jeeves-server - Transports for jeeves.
//!
//! An HTTP chat endpoint and the shared wiring used by the console binary.
//!
//! # Example
//!
//! ```ignore
//! use jeeves_server::{create_motor, create_server, AppState};
//!
//! let motor = create_motor(&config).await?;
//! let app = create_server(AppState::new(motor, config.lexicon.enabled));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod factory;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use factory::{create_motor, load_config};
pub use state::AppState;

use axum::{middleware as axum_middleware, Router};
use tower_http::trace::TraceLayer;

/// Create the server with all routes and middleware.
pub fn create_server(state: AppState) -> Router {
    routes::create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors_layer())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}
