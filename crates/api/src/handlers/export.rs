//! Handler for the export gate.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use tarjama_core::export::{validate_filters, ExportFilters};
use tarjama_db::models::export::ExportQuery;
use tarjama_db::repositories::ExportRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/export/approved
///
/// Every approved unit matching the supplied filters, newest review first.
/// Read-only: export never touches unit state.
pub async fn export_approved(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<impl IntoResponse> {
    let filters = ExportFilters {
        translator_id: query.translator_id,
        reviewed_from: query.reviewed_from,
        reviewed_to: query.reviewed_to,
        unit_granularity: query.unit_granularity,
    };
    validate_filters(&filters)?;

    let records = ExportRepo::export_approved(&state.pool, &filters).await?;

    tracing::info!(
        user_id = admin.user_id,
        record_count = records.len(),
        "Approved units exported"
    );

    Ok(Json(DataResponse { data: records }))
}
