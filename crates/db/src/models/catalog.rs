//! Catalog models: source documents, instruction templates, and style tags.
//!
//! These are thin collaborators of the lifecycle engine. A packet references
//! one of each (style tag optionally); beyond find-by-id and list they have
//! no behaviour here.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tarjama_core::types::{DbId, Timestamp};

/// A row from the `sources` table: one uploaded document.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Source {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for registering a source document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSource {
    pub title: String,
    pub content: String,
}

/// A row from the `instruction_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InstructionTemplate {
    pub id: DbId,
    pub name: String,
    pub instructions: String,
    pub created_at: Timestamp,
}

/// DTO for creating an instruction template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInstructionTemplate {
    pub name: String,
    pub instructions: String,
}

/// A row from the `style_tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StyleTag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a style tag.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStyleTag {
    pub name: String,
}
