//! Work item models: one atomic translation unit and the request bodies for
//! the operations that move it through its lifecycle.
//!
//! Every state-changing request carries the `version` the client read, so
//! stale writes are rejected instead of silently winning.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tarjama_core::types::{DbId, Timestamp};

/// A row from the `work_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkItem {
    pub id: DbId,
    pub packet_id: DbId,
    /// 1-based, unique and contiguous within the packet.
    pub sequence_number: i32,
    pub source_text: String,
    pub target_text: String,
    pub status: String,
    pub assigned_to: DbId,
    pub reviewed_by: Option<DbId>,
    pub rejection_reason: Option<String>,
    pub quality_score: Option<i32>,
    /// Optimistic-concurrency counter, incremented on every transition.
    pub version: i32,
    pub created_at: Timestamp,
    pub submitted_at: Option<Timestamp>,
    pub reviewed_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

/// Request body for a draft save.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveDraftRequest {
    pub target_text: String,
    pub version: i32,
}

/// Request body for submitting a unit for review.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    pub target_text: String,
    pub version: i32,
}

/// Request body for an approval decision: the checklist items that passed.
#[derive(Debug, Clone, Deserialize)]
pub struct ApproveRequest {
    pub checklist: Vec<String>,
    pub version: i32,
}

/// Request body for a rejection decision.
#[derive(Debug, Clone, Deserialize)]
pub struct RejectRequest {
    pub reason: String,
    pub version: i32,
}
