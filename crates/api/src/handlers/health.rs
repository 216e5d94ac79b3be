//! Liveness endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /health
///
/// Returns 200 when the service is up and the database answers.
pub async fn health(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    tarjama_db::health_check(&state.pool).await?;
    Ok(Json(DataResponse { data: "ok" }))
}
