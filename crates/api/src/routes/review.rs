//! Route definitions for the review queue views.

use axum::routing::get;
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Review queue routes, registered as `/review-queue`.
///
/// ```text
/// GET    /          list_review_queue
/// GET    /next      next_in_queue
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(review::list_review_queue))
        .route("/next", get(review::next_in_queue))
}
