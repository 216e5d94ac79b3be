//! Repositories for the `sources`, `instruction_templates`, and
//! `style_tags` catalog tables.

use sqlx::PgPool;
use tarjama_core::types::DbId;

use crate::models::catalog::{
    CreateInstructionTemplate, CreateSource, CreateStyleTag, InstructionTemplate, Source,
    StyleTag,
};

const SOURCE_COLUMNS: &str = "id, title, content, created_at";
const TEMPLATE_COLUMNS: &str = "id, name, instructions, created_at";
const STYLE_TAG_COLUMNS: &str = "id, name, created_at";

/// Provides operations for source documents.
pub struct SourceRepo;

impl SourceRepo {
    /// Insert a new source document, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSource) -> Result<Source, sqlx::Error> {
        let query = format!(
            "INSERT INTO sources (title, content) VALUES ($1, $2) RETURNING {SOURCE_COLUMNS}"
        );
        sqlx::query_as::<_, Source>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a source by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Source>, sqlx::Error> {
        let query = format!("SELECT {SOURCE_COLUMNS} FROM sources WHERE id = $1");
        sqlx::query_as::<_, Source>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Provides operations for instruction templates.
pub struct InstructionTemplateRepo;

impl InstructionTemplateRepo {
    /// Insert a new template, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateInstructionTemplate,
    ) -> Result<InstructionTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO instruction_templates (name, instructions)
             VALUES ($1, $2)
             RETURNING {TEMPLATE_COLUMNS}"
        );
        sqlx::query_as::<_, InstructionTemplate>(&query)
            .bind(&input.name)
            .bind(&input.instructions)
            .fetch_one(pool)
            .await
    }

    /// Find a template by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InstructionTemplate>, sqlx::Error> {
        let query = format!("SELECT {TEMPLATE_COLUMNS} FROM instruction_templates WHERE id = $1");
        sqlx::query_as::<_, InstructionTemplate>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

/// Provides operations for style tags.
pub struct StyleTagRepo;

impl StyleTagRepo {
    /// Insert a new style tag, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStyleTag) -> Result<StyleTag, sqlx::Error> {
        let query =
            format!("INSERT INTO style_tags (name) VALUES ($1) RETURNING {STYLE_TAG_COLUMNS}");
        sqlx::query_as::<_, StyleTag>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a style tag by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StyleTag>, sqlx::Error> {
        let query = format!("SELECT {STYLE_TAG_COLUMNS} FROM style_tags WHERE id = $1");
        sqlx::query_as::<_, StyleTag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
