//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - `Deserialize` request DTOs for the operations that touch the table

pub mod catalog;
pub mod export;
pub mod user;
pub mod work_item;
pub mod work_packet;
