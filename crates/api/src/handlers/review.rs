//! Handlers for the QA review flow: the FIFO review queue and the
//! approve/reject decisions.
//!
//! The queue is a live view over current status — a decision does not prune
//! any cached listing, callers re-fetch. Approval derives the 1-5 quality
//! score from the reviewer's checklist; rejection demands a reason.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use tarjama_core::lifecycle::{
    self, state_machine, TransitionAction, STATUS_APPROVED, STATUS_REJECTED,
};
use tarjama_core::review::{derive_quality_score, validate_checklist, validate_rejection_reason};
use tarjama_core::types::DbId;
use tarjama_db::models::work_item::{ApproveRequest, RejectRequest};
use tarjama_db::repositories::WorkItemRepo;

use crate::error::AppResult;
use crate::handlers::work_items::{fetch_work_item, guard_miss_error};
use crate::middleware::rbac::RequireReviewer;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the queue cursor.
#[derive(Debug, Deserialize)]
pub struct NextQuery {
    pub after_id: Option<DbId>,
}

/// GET /api/v1/review-queue
///
/// Every unit awaiting review, oldest submission first.
pub async fn list_review_queue(
    RequireReviewer(_reviewer): RequireReviewer,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let queue = WorkItemRepo::review_queue(&state.pool).await?;
    Ok(Json(DataResponse { data: queue }))
}

/// GET /api/v1/review-queue/next
///
/// The unit following `after_id` in queue order, or the head of the queue
/// when no cursor is given. A `null` payload signals queue-exhausted.
pub async fn next_in_queue(
    RequireReviewer(_reviewer): RequireReviewer,
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
) -> AppResult<impl IntoResponse> {
    let next = WorkItemRepo::next_in_queue(&state.pool, query.after_id).await?;
    Ok(Json(DataResponse { data: next }))
}

/// POST /api/v1/work-items/{id}/approve
///
/// Approve a unit. The quality score is `round(checked/total * 5)` over the
/// fixed checklist, clamped into 1-5.
pub async fn approve(
    RequireReviewer(reviewer): RequireReviewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ApproveRequest>,
) -> AppResult<impl IntoResponse> {
    let item = fetch_work_item(&state.pool, id).await?;

    lifecycle::authorize(
        &reviewer.role,
        reviewer.user_id,
        item.assigned_to,
        TransitionAction::Approve,
    )?;
    validate_checklist(&input.checklist)?;
    state_machine::validate_transition(&item.status, STATUS_APPROVED)?;

    let quality_score = derive_quality_score(input.checklist.len());

    let updated =
        WorkItemRepo::approve(&state.pool, id, reviewer.user_id, quality_score, input.version)
            .await?;
    let item = match updated {
        Some(item) => item,
        None => return Err(guard_miss_error(&state.pool, id, STATUS_APPROVED).await),
    };

    tracing::info!(
        user_id = reviewer.user_id,
        work_item_id = id,
        quality_score = quality_score,
        "Work item approved"
    );

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/work-items/{id}/reject
///
/// Reject a unit with a mandatory reason, returning it to its translator
/// for rework.
pub async fn reject(
    RequireReviewer(reviewer): RequireReviewer,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RejectRequest>,
) -> AppResult<impl IntoResponse> {
    let item = fetch_work_item(&state.pool, id).await?;

    lifecycle::authorize(
        &reviewer.role,
        reviewer.user_id,
        item.assigned_to,
        TransitionAction::Reject,
    )?;
    validate_rejection_reason(&input.reason)?;
    state_machine::validate_transition(&item.status, STATUS_REJECTED)?;

    let updated =
        WorkItemRepo::reject(&state.pool, id, reviewer.user_id, &input.reason, input.version)
            .await?;
    let item = match updated {
        Some(item) => item,
        None => return Err(guard_miss_error(&state.pool, id, STATUS_REJECTED).await),
    };

    tracing::info!(
        user_id = reviewer.user_id,
        work_item_id = id,
        reason = %input.reason,
        "Work item rejected"
    );

    Ok(Json(DataResponse { data: item }))
}
