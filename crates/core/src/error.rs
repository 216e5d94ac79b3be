//! Domain error type shared by the repository and API layers.

use crate::types::DbId;

/// Domain-level error for the translation pipeline core.
///
/// The API layer maps each variant to an HTTP status and a stable error
/// code; nothing here carries HTTP-specific detail.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or rejected input. No partial state is persisted.
    #[error("{0}")]
    Validation(String),

    /// The requested lifecycle transition is not reachable from the
    /// work item's current status.
    #[error("Illegal transition: '{from}' -> '{to}'")]
    InvalidTransition { from: String, to: String },

    /// The work item changed between read and write; the caller must
    /// re-fetch and retry with the current version.
    #[error("{entity} with id {id} was modified concurrently")]
    StaleWrite { entity: &'static str, id: DbId },

    /// The actor could not be identified.
    #[error("{0}")]
    Unauthorized(String),

    /// The actor is identified but lacks the required role or ownership.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
