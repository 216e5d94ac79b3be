//! Handlers for the translator side of the work-item lifecycle: assigned
//! listings, draft saves, and submission for review.
//!
//! Each state change validates the transition against a fresh read, then
//! applies a status- and version-guarded update. A guard miss is diagnosed
//! from the current row so the caller learns whether the unit vanished, the
//! transition became illegal, or the write was simply stale.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use tarjama_core::error::CoreError;
use tarjama_core::lifecycle::{
    self, state_machine, TransitionAction, STATUS_IN_QA, STATUS_PENDING,
};
use tarjama_core::roles::ROLE_TRANSLATOR;
use tarjama_core::types::DbId;
use tarjama_db::models::work_item::{SaveDraftRequest, SubmitRequest, WorkItem};
use tarjama_db::repositories::WorkItemRepo;
use tarjama_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/work-items/assigned
///
/// The acting translator's open workload: units in `pending`,
/// `in_progress`, or `rejected`, ordered by packet and sequence number.
pub async fn list_assigned(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = WorkItemRepo::list_assigned(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/work-items/{id}
///
/// Unit detail. Translators see only their own units; reviewers and admins
/// see everything.
pub async fn get_work_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = fetch_work_item(&state.pool, id).await?;

    if auth.role == ROLE_TRANSLATOR && item.assigned_to != auth.user_id {
        return Err(CoreError::Forbidden(
            "Translators may only view their own work items".into(),
        )
        .into());
    }

    Ok(Json(DataResponse { data: item }))
}

/// PUT /api/v1/work-items/{id}/draft
///
/// Save a draft translation. The unit stays `pending`.
pub async fn save_draft(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SaveDraftRequest>,
) -> AppResult<impl IntoResponse> {
    let item = fetch_work_item(&state.pool, id).await?;

    lifecycle::authorize(
        &auth.role,
        auth.user_id,
        item.assigned_to,
        TransitionAction::SaveDraft,
    )?;
    lifecycle::validate_target_text(&input.target_text, false)?;
    state_machine::validate_transition(&item.status, STATUS_PENDING)?;

    let updated = WorkItemRepo::save_draft(&state.pool, id, &input.target_text, input.version)
        .await?;
    let item = match updated {
        Some(item) => item,
        None => return Err(guard_miss_error(&state.pool, id, STATUS_PENDING).await),
    };

    tracing::info!(user_id = auth.user_id, work_item_id = id, "Draft saved");

    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/work-items/{id}/submit
///
/// Submit (or resubmit) a unit for review. Requires a non-empty target
/// text; stamps `submitted_at` and places the unit at the tail of the
/// review queue.
pub async fn submit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let item = fetch_work_item(&state.pool, id).await?;

    lifecycle::authorize(
        &auth.role,
        auth.user_id,
        item.assigned_to,
        TransitionAction::Submit,
    )?;
    lifecycle::validate_target_text(&input.target_text, true)?;
    state_machine::validate_transition(&item.status, STATUS_IN_QA)?;

    let updated = WorkItemRepo::submit(&state.pool, id, &input.target_text, input.version).await?;
    let item = match updated {
        Some(item) => item,
        None => return Err(guard_miss_error(&state.pool, id, STATUS_IN_QA).await),
    };

    tracing::info!(
        user_id = auth.user_id,
        work_item_id = id,
        packet_id = item.packet_id,
        "Work item submitted for review"
    );

    Ok(Json(DataResponse { data: item }))
}

/// Fetch a work item or fail with a not-found.
pub(crate) async fn fetch_work_item(pool: &DbPool, id: DbId) -> Result<WorkItem, AppError> {
    WorkItemRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound { entity: "WorkItem", id }.into())
}

/// Diagnose a guarded-update miss.
///
/// The transition was already validated against a snapshot, so a miss means
/// the row changed underneath us (or disappeared). Re-read and report the
/// precise failure: not-found, now-illegal transition, or stale version.
pub(crate) async fn guard_miss_error(pool: &DbPool, id: DbId, target: &str) -> AppError {
    match WorkItemRepo::find_by_id(pool, id).await {
        Ok(Some(current)) => {
            if state_machine::can_transition(&current.status, target) {
                CoreError::StaleWrite {
                    entity: "WorkItem",
                    id,
                }
                .into()
            } else {
                CoreError::InvalidTransition {
                    from: current.status,
                    to: target.to_string(),
                }
                .into()
            }
        }
        Ok(None) => CoreError::NotFound {
            entity: "WorkItem",
            id,
        }
        .into(),
        Err(err) => AppError::Database(err),
    }
}
