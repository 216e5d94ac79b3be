//! Request handlers, grouped by resource.

pub mod export;
pub mod health;
pub mod packets;
pub mod review;
pub mod work_items;
