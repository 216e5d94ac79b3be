//! Repository for the export gate.
//!
//! A single static query: the status predicate is fixed to `approved`, and
//! each optional filter collapses to true when its bind is NULL. The export
//! is read-only and never touches unit state.

use sqlx::PgPool;

use tarjama_core::export::ExportFilters;
use tarjama_core::lifecycle::STATUS_APPROVED;

use crate::models::export::ExportRecord;

/// Provides the approved-unit dataset projection.
pub struct ExportRepo;

impl ExportRepo {
    /// Every approved unit matching all supplied filters, newest review
    /// first, projected to the dataset row shape.
    pub async fn export_approved(
        pool: &PgPool,
        filters: &ExportFilters,
    ) -> Result<Vec<ExportRecord>, sqlx::Error> {
        sqlx::query_as::<_, ExportRecord>(
            "SELECT
                wi.source_text,
                wi.target_text,
                wi.quality_score,
                wi.reviewed_at,
                wi.assigned_to AS translator_id,
                wi.packet_id
             FROM work_items wi
             JOIN work_packets wp ON wp.id = wi.packet_id
             WHERE wi.status = $1
               AND ($2::bigint IS NULL OR wi.assigned_to = $2)
               AND ($3::timestamptz IS NULL OR wi.reviewed_at >= $3)
               AND ($4::timestamptz IS NULL OR wi.reviewed_at <= $4)
               AND ($5::text IS NULL OR wp.unit_granularity = $5)
             ORDER BY wi.reviewed_at DESC, wi.id DESC",
        )
        .bind(STATUS_APPROVED)
        .bind(filters.translator_id)
        .bind(filters.reviewed_from)
        .bind(filters.reviewed_to)
        .bind(filters.unit_granularity.as_deref())
        .fetch_all(pool)
        .await
    }
}
