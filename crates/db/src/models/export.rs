//! Export gate models: the query parameters and the projected dataset row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tarjama_core::types::{DbId, Timestamp};

/// Query parameters for the approved-unit export. All optional and
/// conjunctive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    pub translator_id: Option<DbId>,
    pub reviewed_from: Option<Timestamp>,
    pub reviewed_to: Option<Timestamp>,
    pub unit_granularity: Option<String>,
}

/// One exported dataset row, projected from an approved work item.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExportRecord {
    pub source_text: String,
    pub target_text: String,
    pub quality_score: i32,
    pub reviewed_at: Timestamp,
    pub translator_id: DbId,
    pub packet_id: DbId,
}
