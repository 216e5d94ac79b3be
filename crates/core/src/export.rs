//! Export gate filter validation.
//!
//! The export query itself lives in the repository layer; this module owns
//! the filter value object and the rules for a well-formed filter set. Only
//! terminally approved units are ever exported, regardless of filters.

use crate::error::CoreError;
use crate::segmenter::validate_granularity;
use crate::types::{DbId, Timestamp};

/// Optional filters narrowing the set of approved units to export.
///
/// All fields are conjunctive; an empty filter set exports every approved
/// unit.
#[derive(Debug, Clone, Default)]
pub struct ExportFilters {
    /// Only units translated by this user.
    pub translator_id: Option<DbId>,
    /// Inclusive lower bound on `reviewed_at`.
    pub reviewed_from: Option<Timestamp>,
    /// Inclusive upper bound on `reviewed_at`.
    pub reviewed_to: Option<Timestamp>,
    /// Only units from packets with this unit granularity.
    pub unit_granularity: Option<String>,
}

/// Validate a filter set before running the export query.
pub fn validate_filters(filters: &ExportFilters) -> Result<(), CoreError> {
    if let Some(granularity) = &filters.unit_granularity {
        validate_granularity(granularity)?;
    }

    if let (Some(from), Some(to)) = (filters.reviewed_from, filters.reviewed_to) {
        if from > to {
            return Err(CoreError::Validation(format!(
                "Invalid review date range: {from} is after {to}"
            )));
        }
    }

    Ok(())
}
