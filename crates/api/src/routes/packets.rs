//! Route definitions for work packets.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::packets;
use crate::state::AppState;

/// Work packet routes, registered as `/packets`.
///
/// ```text
/// GET    /                list_packets
/// POST   /                create_packet
/// GET    /{id}            get_packet
/// GET    /{id}/items      list_packet_items
/// PUT    /{id}/status     update_packet_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(packets::list_packets).post(packets::create_packet))
        .route("/{id}", get(packets::get_packet))
        .route("/{id}/items", get(packets::list_packet_items))
        .route("/{id}/status", put(packets::update_packet_status))
}
