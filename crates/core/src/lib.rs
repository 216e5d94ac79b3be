//! Pure domain logic for the tarjama translation pipeline.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API, and any future CLI tooling. It owns the
//! segmentation rules, the round-robin distribution function, the work-item
//! lifecycle state machine with its authorization table, review scoring,
//! and export filter validation.

pub mod distribution;
pub mod error;
pub mod export;
pub mod lifecycle;
pub mod packet;
pub mod review;
pub mod roles;
pub mod segmenter;
pub mod types;
