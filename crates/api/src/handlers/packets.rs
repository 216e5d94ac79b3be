//! Handlers for work packet creation and management.
//!
//! Packet creation runs the whole front half of the pipeline: catalog and
//! roster lookups, segmentation, round-robin distribution, and a single
//! transaction persisting the packet with its items and roster. A failure at
//! any step leaves nothing behind.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use tarjama_core::distribution::distribute;
use tarjama_core::error::CoreError;
use tarjama_core::packet::validate_packet_status;
use tarjama_core::segmenter::{segment, validate_granularity};
use tarjama_core::types::DbId;
use tarjama_db::models::work_packet::{
    CreatePacketRequest, CreatedPacket, NewWorkPacket, PacketDetail, UpdatePacketStatusRequest,
};
use tarjama_db::repositories::{
    InstructionTemplateRepo, PacketRepo, SourceRepo, StyleTagRepo, UserRepo, WorkItemRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/packets
///
/// Create a packet: segment the source document, distribute the fragments
/// round-robin across the roster, and persist everything atomically.
pub async fn create_packet(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreatePacketRequest>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    validate_granularity(&input.unit_granularity)?;

    // Reference lookups come first: a missing source or template fails the
    // packet before segmentation runs.
    let source = SourceRepo::find_by_id(&state.pool, input.source_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Source",
            id: input.source_id,
        })?;

    InstructionTemplateRepo::find_by_id(&state.pool, input.template_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "InstructionTemplate",
            id: input.template_id,
        })?;

    if let Some(tag_id) = input.style_tag_id {
        StyleTagRepo::find_by_id(&state.pool, tag_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "StyleTag",
                id: tag_id,
            })?;
    }

    let missing = UserRepo::missing_translators(&state.pool, &input.translator_ids).await?;
    if let Some(id) = missing.first() {
        return Err(CoreError::NotFound {
            entity: "Translator",
            id: *id,
        }
        .into());
    }

    let fragments = segment(&source.content, &input.unit_granularity)?;
    if fragments.is_empty() {
        return Err(CoreError::Validation(
            "Segmentation produced no qualifying fragments; the packet was not created"
                .to_string(),
        )
        .into());
    }

    let items = distribute(fragments, &input.translator_ids)?;

    let new_packet = NewWorkPacket {
        source_id: input.source_id,
        template_id: input.template_id,
        style_tag_id: input.style_tag_id,
        unit_granularity: input.unit_granularity.clone(),
        created_by: admin.user_id,
    };
    let packet =
        PacketRepo::create_with_items(&state.pool, &new_packet, &input.translator_ids, &items)
            .await?;

    tracing::info!(
        user_id = admin.user_id,
        packet_id = packet.id,
        item_count = items.len(),
        roster_size = input.translator_ids.len(),
        "Work packet created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedPacket {
                packet,
                item_count: items.len(),
            },
        }),
    ))
}

/// GET /api/v1/packets
///
/// List all packets, newest first.
pub async fn list_packets(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let packets = PacketRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: packets }))
}

/// GET /api/v1/packets/{id}
///
/// Packet detail with its roster in distribution order.
pub async fn get_packet(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let packet = PacketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "WorkPacket",
            id,
        })?;
    let roster = PacketRepo::roster(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: PacketDetail { packet, roster },
    }))
}

/// GET /api/v1/packets/{id}/items
///
/// All units in a packet, in sequence order.
pub async fn list_packet_items(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_packet_exists(&state.pool, id).await?;
    let items = WorkItemRepo::list_for_packet(&state.pool, id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// PUT /api/v1/packets/{id}/status
///
/// Update a packet's status. The packet record is otherwise immutable.
pub async fn update_packet_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePacketStatusRequest>,
) -> AppResult<impl IntoResponse> {
    validate_packet_status(&input.status)?;

    let packet = PacketRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "WorkPacket",
            id,
        })?;

    tracing::info!(
        user_id = admin.user_id,
        packet_id = id,
        status = %input.status,
        "Packet status updated"
    );

    Ok(Json(DataResponse { data: packet }))
}

/// Fail with a not-found unless the packet exists.
pub async fn ensure_packet_exists(
    pool: &tarjama_db::DbPool,
    id: DbId,
) -> Result<(), AppError> {
    PacketRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "WorkPacket",
            id,
        })?;
    Ok(())
}
