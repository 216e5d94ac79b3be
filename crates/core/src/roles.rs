//! Well-known role name constants.
//!
//! These must match the `users.role` CHECK constraint seeded by the
//! migrations and the `role` claim issued by the identity service.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_TRANSLATOR: &str = "translator";
pub const ROLE_REVIEWER: &str = "reviewer";
