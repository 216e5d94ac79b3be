//! Round-robin distribution of translation fragments across a roster.
//!
//! The mapping is a pure function of fragment order, roster order, and roster
//! size: fragment `i` goes to `roster[i mod len]` with 1-based sequence number
//! `i + 1`. Workload, skill, and availability are deliberately not consulted;
//! fairness here means equal count, not equal effort.

use crate::error::CoreError;
use crate::types::DbId;

/// A work item as produced by distribution, before persistence assigns ids
/// and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftItem {
    /// 1-based position within the packet; fixes review and display order.
    pub sequence_number: i32,
    pub source_text: String,
    pub assigned_to: DbId,
}

/// Map ordered fragments onto a translator roster.
///
/// Fails on an empty roster or a duplicate roster member; no partial output
/// is produced. Every fragment receives exactly one assignee.
pub fn distribute(fragments: Vec<String>, roster: &[DbId]) -> Result<Vec<DraftItem>, CoreError> {
    if roster.is_empty() {
        return Err(CoreError::Validation(
            "At least one translator is required to distribute a packet".to_string(),
        ));
    }

    for (i, id) in roster.iter().enumerate() {
        if roster[..i].contains(id) {
            return Err(CoreError::Validation(format!(
                "Duplicate translator {id} in roster"
            )));
        }
    }

    let items = fragments
        .into_iter()
        .enumerate()
        .map(|(index, source_text)| DraftItem {
            sequence_number: index as i32 + 1,
            source_text,
            assigned_to: roster[index % roster.len()],
        })
        .collect();

    Ok(items)
}
