//! Review checklist constants, validation, and quality score derivation.
//!
//! A reviewer records pass/fail against a fixed checklist; approval converts
//! the checked fraction into an integer 1-5 quality score. Exported datasets
//! depend on the stability of that derivation, so it lives here as part of
//! the contract rather than in the API layer.

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// The translation is an accurate rendering of the source.
pub const CHECK_ACCURACY: &str = "accuracy";

/// The original meaning is preserved.
pub const CHECK_MEANING: &str = "meaning";

/// The target dialect is used correctly.
pub const CHECK_DIALECT: &str = "dialect";

/// The translation reads fluently.
pub const CHECK_FLUENCY: &str = "fluency";

/// The fixed review checklist, in display order.
pub const CHECKLIST_ITEMS: &[&str] =
    &[CHECK_ACCURACY, CHECK_MEANING, CHECK_DIALECT, CHECK_FLUENCY];

/// Lowest assignable quality score.
pub const MIN_QUALITY_SCORE: i32 = 1;

/// Highest assignable quality score.
pub const MAX_QUALITY_SCORE: i32 = 5;

/// Maximum length for a rejection reason.
pub const MAX_REJECTION_REASON_LENGTH: usize = 2_000;

/* --------------------------------------------------------------------------
Validation and scoring
-------------------------------------------------------------------------- */

/// Validate the checked-item list submitted with an approval.
///
/// Every entry must be a known checklist item and appear at most once. An
/// empty list is allowed and yields the floor score.
pub fn validate_checklist(checked: &[String]) -> Result<(), CoreError> {
    for (i, item) in checked.iter().enumerate() {
        if !CHECKLIST_ITEMS.contains(&item.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown checklist item '{item}'. Must be one of: {}",
                CHECKLIST_ITEMS.join(", ")
            )));
        }
        if checked[..i].iter().any(|earlier| earlier == item) {
            return Err(CoreError::Validation(format!(
                "Duplicate checklist item '{item}'"
            )));
        }
    }
    Ok(())
}

/// Derive the 1-5 quality score from the number of checked items.
///
/// `round((checked / total) * 5)`, clamped into the valid score range so a
/// fully unchecked list still yields the floor score of 1.
pub fn derive_quality_score(checked: usize) -> i32 {
    let total = CHECKLIST_ITEMS.len();
    let ratio = checked as f64 / total as f64;
    let score = (ratio * MAX_QUALITY_SCORE as f64).round() as i32;
    score.clamp(MIN_QUALITY_SCORE, MAX_QUALITY_SCORE)
}

/// Validate a rejection reason: required, non-empty, bounded.
pub fn validate_rejection_reason(reason: &str) -> Result<(), CoreError> {
    if reason.trim().is_empty() {
        return Err(CoreError::Validation(
            "A rejection must include a non-empty reason".to_string(),
        ));
    }
    if reason.len() > MAX_REJECTION_REASON_LENGTH {
        return Err(CoreError::Validation(format!(
            "Rejection reason exceeds maximum length of {MAX_REJECTION_REASON_LENGTH} characters"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
