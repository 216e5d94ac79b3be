//! Identity boundary: JWT validation.
//!
//! Token issuance belongs to the external identity service; this module
//! only validates bearer tokens and extracts the acting user's id and role.

pub mod jwt;
