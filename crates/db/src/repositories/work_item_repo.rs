//! Repository for the `work_items` table.
//!
//! Every state-changing update is guarded by both the expected current
//! status and the caller's `version`, in the `WHERE` clause of a single
//! `UPDATE`. A guard miss returns `None`; the handler re-fetches the row to
//! tell not-found, illegal-transition, and stale-write apart.

use sqlx::PgPool;
use tarjama_core::lifecycle::{STATUS_IN_QA, TRANSLATOR_WORKABLE_STATUSES};
use tarjama_core::types::DbId;

use crate::models::work_item::WorkItem;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, packet_id, sequence_number, source_text, target_text, status, \
    assigned_to, reviewed_by, rejection_reason, quality_score, version, \
    created_at, submitted_at, reviewed_at, updated_at";

/// Provides lifecycle and listing operations for work items.
pub struct WorkItemRepo;

impl WorkItemRepo {
    /// Find a work item by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_items WHERE id = $1");
        sqlx::query_as::<_, WorkItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// A translator's open workload: units still sitting with them, ordered
    /// by packet and sequence number.
    pub async fn list_assigned(
        pool: &PgPool,
        translator_id: DbId,
    ) -> Result<Vec<WorkItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_items
             WHERE assigned_to = $1 AND status = ANY($2)
             ORDER BY packet_id ASC, sequence_number ASC"
        );
        sqlx::query_as::<_, WorkItem>(&query)
            .bind(translator_id)
            .bind(TRANSLATOR_WORKABLE_STATUSES)
            .fetch_all(pool)
            .await
    }

    /// All units in a packet, in sequence order.
    pub async fn list_for_packet(
        pool: &PgPool,
        packet_id: DbId,
    ) -> Result<Vec<WorkItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_items
             WHERE packet_id = $1
             ORDER BY sequence_number ASC"
        );
        sqlx::query_as::<_, WorkItem>(&query)
            .bind(packet_id)
            .fetch_all(pool)
            .await
    }

    /// The review queue: every `in_qa` unit, oldest submission first.
    ///
    /// This is a live view over current status, re-queried per request; a
    /// decision does not remove the unit from any cached listing.
    pub async fn review_queue(pool: &PgPool) -> Result<Vec<WorkItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_items
             WHERE status = $1
             ORDER BY submitted_at ASC, id ASC"
        );
        sqlx::query_as::<_, WorkItem>(&query)
            .bind(STATUS_IN_QA)
            .fetch_all(pool)
            .await
    }

    /// The unit following `after_id` in review-queue order, or the head of
    /// the queue when `after_id` is `None`. Returns `None` when the queue is
    /// exhausted from that position.
    pub async fn next_in_queue(
        pool: &PgPool,
        after_id: Option<DbId>,
    ) -> Result<Option<WorkItem>, sqlx::Error> {
        match after_id {
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM work_items
                     WHERE status = $1
                     ORDER BY submitted_at ASC, id ASC
                     LIMIT 1"
                );
                sqlx::query_as::<_, WorkItem>(&query)
                    .bind(STATUS_IN_QA)
                    .fetch_optional(pool)
                    .await
            }
            Some(after) => {
                // Position the cursor on the referenced unit's submission
                // time even if it has since left the queue.
                let query = format!(
                    "SELECT {COLUMNS} FROM work_items
                     WHERE status = $1
                       AND (submitted_at, id) > (
                           SELECT submitted_at, id FROM work_items WHERE id = $2
                       )
                     ORDER BY submitted_at ASC, id ASC
                     LIMIT 1"
                );
                sqlx::query_as::<_, WorkItem>(&query)
                    .bind(STATUS_IN_QA)
                    .bind(after)
                    .fetch_optional(pool)
                    .await
            }
        }
    }

    /// Draft save: update `target_text` while the unit stays `pending`.
    ///
    /// Guarded by status and version; returns `None` on a guard miss.
    pub async fn save_draft(
        pool: &PgPool,
        id: DbId,
        target_text: &str,
        version: i32,
    ) -> Result<Option<WorkItem>, sqlx::Error> {
        let query = format!(
            "UPDATE work_items SET
                target_text = $3,
                version = version + 1,
                updated_at = NOW()
             WHERE id = $1 AND version = $2 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkItem>(&query)
            .bind(id)
            .bind(version)
            .bind(target_text)
            .fetch_optional(pool)
            .await
    }

    /// Submit (or resubmit) a unit for review, stamping `submitted_at`.
    ///
    /// Guarded by status and version; returns `None` on a guard miss.
    pub async fn submit(
        pool: &PgPool,
        id: DbId,
        target_text: &str,
        version: i32,
    ) -> Result<Option<WorkItem>, sqlx::Error> {
        let query = format!(
            "UPDATE work_items SET
                target_text = $3,
                status = 'in_qa',
                submitted_at = NOW(),
                version = version + 1,
                updated_at = NOW()
             WHERE id = $1 AND version = $2 AND status IN ('pending', 'rejected')
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkItem>(&query)
            .bind(id)
            .bind(version)
            .bind(target_text)
            .fetch_optional(pool)
            .await
    }

    /// Approve a unit, recording the reviewer and the derived quality score.
    ///
    /// Guarded by status and version; returns `None` on a guard miss.
    pub async fn approve(
        pool: &PgPool,
        id: DbId,
        reviewer_id: DbId,
        quality_score: i32,
        version: i32,
    ) -> Result<Option<WorkItem>, sqlx::Error> {
        let query = format!(
            "UPDATE work_items SET
                status = 'approved',
                reviewed_by = $3,
                quality_score = $4,
                reviewed_at = NOW(),
                version = version + 1,
                updated_at = NOW()
             WHERE id = $1 AND version = $2 AND status = 'in_qa'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkItem>(&query)
            .bind(id)
            .bind(version)
            .bind(reviewer_id)
            .bind(quality_score)
            .fetch_optional(pool)
            .await
    }

    /// Reject a unit with a reason, clearing any score from an earlier
    /// review round. The reason stays on the row through resubmission.
    ///
    /// Guarded by status and version; returns `None` on a guard miss.
    pub async fn reject(
        pool: &PgPool,
        id: DbId,
        reviewer_id: DbId,
        reason: &str,
        version: i32,
    ) -> Result<Option<WorkItem>, sqlx::Error> {
        let query = format!(
            "UPDATE work_items SET
                status = 'rejected',
                reviewed_by = $3,
                rejection_reason = $4,
                quality_score = NULL,
                reviewed_at = NOW(),
                version = version + 1,
                updated_at = NOW()
             WHERE id = $1 AND version = $2 AND status = 'in_qa'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkItem>(&query)
            .bind(id)
            .bind(version)
            .bind(reviewer_id)
            .bind(reason)
            .fetch_optional(pool)
            .await
    }
}
