//! Route definitions for work items.
//!
//! Translator-side lifecycle operations live here together with the review
//! decisions, which are unit-scoped as well; the queue views are under
//! `/review-queue`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{review, work_items};
use crate::state::AppState;

/// Work item routes, registered as `/work-items`.
///
/// ```text
/// GET    /assigned        list_assigned
/// GET    /{id}            get_work_item
/// PUT    /{id}/draft      save_draft
/// POST   /{id}/submit     submit
/// POST   /{id}/approve    approve
/// POST   /{id}/reject     reject
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assigned", get(work_items::list_assigned))
        .route("/{id}", get(work_items::get_work_item))
        .route("/{id}/draft", put(work_items::save_draft))
        .route("/{id}/submit", post(work_items::submit))
        .route("/{id}/approve", post(review::approve))
        .route("/{id}/reject", post(review::reject))
}
