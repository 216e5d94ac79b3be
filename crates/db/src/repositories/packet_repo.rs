//! Repository for the `work_packets` and `work_packet_translators` tables.

use sqlx::PgPool;
use tarjama_core::distribution::DraftItem;
use tarjama_core::lifecycle::STATUS_PENDING;
use tarjama_core::types::DbId;

use crate::models::work_packet::{NewWorkPacket, PacketTranslator, WorkPacket};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, source_id, template_id, style_tag_id, unit_granularity, \
    status, created_by, created_at";

/// Provides creation and lookup operations for work packets.
pub struct PacketRepo;

impl PacketRepo {
    /// Create a packet together with its roster entries and work items in a
    /// single transaction.
    ///
    /// Either the full item set is persisted with its assignments or none of
    /// it is; a failure part-way through rolls everything back, so a failed
    /// creation can never leave orphaned rows behind.
    pub async fn create_with_items(
        pool: &PgPool,
        packet: &NewWorkPacket,
        roster: &[DbId],
        items: &[DraftItem],
    ) -> Result<WorkPacket, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_packet = format!(
            "INSERT INTO work_packets
                (source_id, template_id, style_tag_id, unit_granularity, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, WorkPacket>(&insert_packet)
            .bind(packet.source_id)
            .bind(packet.template_id)
            .bind(packet.style_tag_id)
            .bind(&packet.unit_granularity)
            .bind(packet.created_by)
            .fetch_one(&mut *tx)
            .await?;

        for (position, translator_id) in roster.iter().enumerate() {
            sqlx::query(
                "INSERT INTO work_packet_translators (packet_id, translator_id, roster_position)
                 VALUES ($1, $2, $3)",
            )
            .bind(created.id)
            .bind(translator_id)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        for item in items {
            sqlx::query(
                "INSERT INTO work_items
                    (packet_id, sequence_number, source_text, status, assigned_to)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(created.id)
            .bind(item.sequence_number)
            .bind(&item.source_text)
            .bind(STATUS_PENDING)
            .bind(item.assigned_to)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Find a packet by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<WorkPacket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_packets WHERE id = $1");
        sqlx::query_as::<_, WorkPacket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all packets, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<WorkPacket>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_packets ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, WorkPacket>(&query).fetch_all(pool).await
    }

    /// The packet's roster in distribution order.
    pub async fn roster(pool: &PgPool, packet_id: DbId) -> Result<Vec<PacketTranslator>, sqlx::Error> {
        sqlx::query_as::<_, PacketTranslator>(
            "SELECT packet_id, translator_id, roster_position
             FROM work_packet_translators
             WHERE packet_id = $1
             ORDER BY roster_position ASC",
        )
        .bind(packet_id)
        .fetch_all(pool)
        .await
    }

    /// Update a packet's status. Returns the updated row, or `None` if no
    /// packet with the given id exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<WorkPacket>, sqlx::Error> {
        let query = format!(
            "UPDATE work_packets SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkPacket>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
