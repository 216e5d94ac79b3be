//! Route definition for the export gate.

use axum::routing::get;
use axum::Router;

use crate::handlers::export;
use crate::state::AppState;

/// Export routes, registered as `/export`.
///
/// ```text
/// GET    /approved      export_approved
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/approved", get(export::export_approved))
}
