//! Work packet models: one segmentation/distribution job over a source
//! document, plus its ordered translator roster.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tarjama_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `work_packets` table.
///
/// Immutable after creation except for `status`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkPacket {
    pub id: DbId,
    pub source_id: DbId,
    pub template_id: DbId,
    pub style_tag_id: Option<DbId>,
    pub unit_granularity: String,
    pub status: String,
    pub created_by: DbId,
    pub created_at: Timestamp,
}

/// A row from the `work_packet_translators` table: one roster entry.
///
/// `roster_position` is the 0-based order the admin supplied the roster in,
/// which fixes the cyclic distribution mapping.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PacketTranslator {
    pub packet_id: DbId,
    pub translator_id: DbId,
    pub roster_position: i32,
}

/// Request body for packet creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePacketRequest {
    pub source_id: DbId,
    pub template_id: DbId,
    pub unit_granularity: String,
    #[validate(length(min = 1, message = "translator_ids must not be empty"))]
    pub translator_ids: Vec<DbId>,
    pub style_tag_id: Option<DbId>,
}

/// Validated packet fields handed to the repository by the create handler.
#[derive(Debug, Clone)]
pub struct NewWorkPacket {
    pub source_id: DbId,
    pub template_id: DbId,
    pub style_tag_id: Option<DbId>,
    pub unit_granularity: String,
    pub created_by: DbId,
}

/// Request body for packet status updates.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePacketStatusRequest {
    pub status: String,
}

/// Response payload for packet creation: the packet plus how many work
/// items segmentation produced.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedPacket {
    pub packet: WorkPacket,
    pub item_count: usize,
}

/// Response payload for packet detail: the packet with its ordered roster.
#[derive(Debug, Clone, Serialize)]
pub struct PacketDetail {
    pub packet: WorkPacket,
    pub roster: Vec<PacketTranslator>,
}
