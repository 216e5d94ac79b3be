//! Route definition for the liveness endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// `/health`, registered at the application root (outside `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
