pub mod export;
pub mod health;
pub mod packets;
pub mod review;
pub mod work_items;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /packets                         create (POST), list (GET)     admin
/// /packets/{id}                    detail with roster            admin
/// /packets/{id}/items              units in sequence order       admin
/// /packets/{id}/status             status update (PUT)           admin
///
/// /work-items/assigned             translator's open workload
/// /work-items/{id}                 unit detail
/// /work-items/{id}/draft           draft save (PUT)
/// /work-items/{id}/submit          submit for review (POST)
/// /work-items/{id}/approve         approve decision (POST)       reviewer
/// /work-items/{id}/reject          reject decision (POST)        reviewer
///
/// /review-queue                    FIFO queue, oldest first      reviewer
/// /review-queue/next               cursor step through the queue reviewer
///
/// /export/approved                 dataset extraction (GET)      admin
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/packets", packets::router())
        .nest("/work-items", work_items::router())
        .nest("/review-queue", review::router())
        .nest("/export", export::router())
}
