//! Well-known work packet status constants.
//!
//! These must match the `work_packets.status` CHECK constraint.

use crate::error::CoreError;

/// Packet is open and its units are being worked.
pub const PACKET_ACTIVE: &str = "active";

/// Every unit in the packet has reached a reviewed state.
pub const PACKET_COMPLETED: &str = "completed";

/// Packet is retired from all working views.
pub const PACKET_ARCHIVED: &str = "archived";

/// All valid packet status values.
pub const VALID_PACKET_STATUSES: &[&str] = &[PACKET_ACTIVE, PACKET_COMPLETED, PACKET_ARCHIVED];

/// Validate that a packet status string is one of the accepted values.
pub fn validate_packet_status(status: &str) -> Result<(), CoreError> {
    if VALID_PACKET_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid packet status '{status}'. Must be one of: {}",
            VALID_PACKET_STATUSES.join(", ")
        )))
    }
}
