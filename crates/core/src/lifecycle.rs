//! Work-item lifecycle: status vocabulary, state machine, and the
//! role/transition authorization table.
//!
//! Every status change in the system goes through [`state_machine`] and
//! [`authorize`]; handlers never compare status or role strings ad hoc, so
//! the tables here are the single source of truth for what is legal.

use crate::error::CoreError;
use crate::roles::{ROLE_ADMIN, ROLE_REVIEWER, ROLE_TRANSLATOR};

/* --------------------------------------------------------------------------
Status constants
-------------------------------------------------------------------------- */

/// Newly created, waiting for its translator.
pub const STATUS_PENDING: &str = "pending";

/// Reserved for fine-grained tracking of in-flight edits. No operation
/// currently writes this status; it exists in the vocabulary and in
/// assigned-work listings only.
pub const STATUS_IN_PROGRESS: &str = "in_progress";

/// Submitted and waiting in the review queue.
pub const STATUS_IN_QA: &str = "in_qa";

/// Terminal: approved units are eligible for export and can never be
/// edited or re-reviewed.
pub const STATUS_APPROVED: &str = "approved";

/// Reworkable: rejected units return to their translator and may be
/// resubmitted.
pub const STATUS_REJECTED: &str = "rejected";

/// All valid work-item status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_IN_PROGRESS,
    STATUS_IN_QA,
    STATUS_APPROVED,
    STATUS_REJECTED,
];

/// Statuses in which a unit still sits with its assigned translator.
pub const TRANSLATOR_WORKABLE_STATUSES: &[&str] =
    &[STATUS_PENDING, STATUS_IN_PROGRESS, STATUS_REJECTED];

/// Maximum length for a translated target text.
pub const MAX_TARGET_TEXT_LENGTH: usize = 50_000;

/// Returns `true` if the status has no outgoing transitions.
pub fn is_terminal(status: &str) -> bool {
    status == STATUS_APPROVED
}

/// Validate a target text for draft save or submission.
///
/// Submission additionally requires the text to be non-empty; a draft may
/// be saved empty.
pub fn validate_target_text(text: &str, for_submission: bool) -> Result<(), CoreError> {
    if for_submission && text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Target text must not be empty when submitting for review".to_string(),
        ));
    }
    if text.len() > MAX_TARGET_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Target text exceeds maximum length of {MAX_TARGET_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

/* --------------------------------------------------------------------------
State machine
-------------------------------------------------------------------------- */

pub mod state_machine {
    use super::*;

    /// Returns the set of valid target statuses reachable from `from_status`.
    ///
    /// The `pending -> pending` self-loop is the draft save. `approved` is
    /// terminal and returns an empty slice, as does the reserved
    /// `in_progress` status and any unknown input.
    pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
        match from_status {
            // Pending -> Pending (draft save), InQa (submit)
            STATUS_PENDING => &[STATUS_PENDING, STATUS_IN_QA],
            // InQa -> Approved, Rejected (review decision)
            STATUS_IN_QA => &[STATUS_APPROVED, STATUS_REJECTED],
            // Rejected -> InQa (resubmit)
            STATUS_REJECTED => &[STATUS_IN_QA],
            // Terminal, reserved, or unknown: no transitions allowed
            _ => &[],
        }
    }

    /// Check whether a transition from `from` to `to` is valid.
    pub fn can_transition(from: &str, to: &str) -> bool {
        valid_transitions(from).contains(&to)
    }

    /// Validate a state transition, failing with both statuses named so the
    /// caller can see why the request was rejected.
    pub fn validate_transition(from: &str, to: &str) -> Result<(), CoreError> {
        if can_transition(from, to) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    }
}

/* --------------------------------------------------------------------------
Authorization table
-------------------------------------------------------------------------- */

/// The operations that move a work item through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    /// Update `target_text` while the unit stays `pending`.
    SaveDraft,
    /// Move `pending` or `rejected` to `in_qa`.
    Submit,
    /// Move `in_qa` to `approved`.
    Approve,
    /// Move `in_qa` to `rejected`.
    Reject,
}

impl TransitionAction {
    /// Stable name used in log fields and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            TransitionAction::SaveDraft => "save_draft",
            TransitionAction::Submit => "submit",
            TransitionAction::Approve => "approve",
            TransitionAction::Reject => "reject",
        }
    }
}

/// The (role, action) authorization table.
///
/// Translator actions additionally require ownership (the actor must be the
/// unit's assigned translator), which [`authorize`] checks when the caller
/// passes the assignment.
pub fn action_allowed(role: &str, action: TransitionAction) -> bool {
    match action {
        TransitionAction::SaveDraft | TransitionAction::Submit => {
            role == ROLE_TRANSLATOR || role == ROLE_ADMIN
        }
        TransitionAction::Approve | TransitionAction::Reject => {
            role == ROLE_REVIEWER || role == ROLE_ADMIN
        }
    }
}

/// Authorize an actor for a lifecycle action against a specific unit.
///
/// `assigned_to` is consulted only for translator actions: draft save and
/// submit must come from the unit's own translator, regardless of role.
pub fn authorize(
    role: &str,
    actor_id: crate::types::DbId,
    assigned_to: crate::types::DbId,
    action: TransitionAction,
) -> Result<(), CoreError> {
    if !action_allowed(role, action) {
        return Err(CoreError::Forbidden(format!(
            "Role '{role}' may not {} a work item",
            action.name()
        )));
    }

    let needs_ownership = matches!(
        action,
        TransitionAction::SaveDraft | TransitionAction::Submit
    );
    if needs_ownership && actor_id != assigned_to {
        return Err(CoreError::Forbidden(format!(
            "Only the assigned translator may {} this work item",
            action.name()
        )));
    }

    Ok(())
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::state_machine::*;
    use super::*;

    use crate::error::CoreError;

    // -- valid transitions --------------------------------------------------

    #[test]
    fn pending_to_pending_draft_save() {
        assert!(can_transition(STATUS_PENDING, STATUS_PENDING));
    }

    #[test]
    fn pending_to_in_qa() {
        assert!(can_transition(STATUS_PENDING, STATUS_IN_QA));
    }

    #[test]
    fn in_qa_to_approved() {
        assert!(can_transition(STATUS_IN_QA, STATUS_APPROVED));
    }

    #[test]
    fn in_qa_to_rejected() {
        assert!(can_transition(STATUS_IN_QA, STATUS_REJECTED));
    }

    #[test]
    fn rejected_to_in_qa_resubmit() {
        assert!(can_transition(STATUS_REJECTED, STATUS_IN_QA));
    }

    // -- terminal and reserved states ---------------------------------------

    #[test]
    fn approved_has_no_transitions() {
        assert!(valid_transitions(STATUS_APPROVED).is_empty());
        assert!(is_terminal(STATUS_APPROVED));
    }

    #[test]
    fn in_progress_has_no_transitions() {
        assert!(valid_transitions(STATUS_IN_PROGRESS).is_empty());
        assert!(!is_terminal(STATUS_IN_PROGRESS));
    }

    #[test]
    fn unknown_status_has_no_transitions() {
        assert!(valid_transitions("archived").is_empty());
    }

    #[test]
    fn only_approved_is_terminal() {
        for status in VALID_STATUSES {
            assert_eq!(is_terminal(status), *status == STATUS_APPROVED);
        }
    }

    // -- invalid transitions ------------------------------------------------

    #[test]
    fn pending_to_approved_invalid() {
        assert!(!can_transition(STATUS_PENDING, STATUS_APPROVED));
    }

    #[test]
    fn pending_to_rejected_invalid() {
        assert!(!can_transition(STATUS_PENDING, STATUS_REJECTED));
    }

    #[test]
    fn approved_to_in_qa_invalid() {
        assert!(!can_transition(STATUS_APPROVED, STATUS_IN_QA));
    }

    #[test]
    fn approved_to_approved_invalid() {
        assert!(!can_transition(STATUS_APPROVED, STATUS_APPROVED));
    }

    #[test]
    fn rejected_to_approved_invalid() {
        assert!(!can_transition(STATUS_REJECTED, STATUS_APPROVED));
    }

    #[test]
    fn in_qa_to_pending_invalid() {
        assert!(!can_transition(STATUS_IN_QA, STATUS_PENDING));
    }

    #[test]
    fn validate_transition_names_both_statuses() {
        let err = validate_transition(STATUS_APPROVED, STATUS_IN_QA).unwrap_err();
        assert_matches!(&err, CoreError::InvalidTransition { from, to }
            if from == STATUS_APPROVED && to == STATUS_IN_QA);
        let msg = err.to_string();
        assert!(msg.contains(STATUS_APPROVED));
        assert!(msg.contains(STATUS_IN_QA));
    }

    // -- target text validation ---------------------------------------------

    #[test]
    fn empty_target_text_allowed_for_draft() {
        assert!(validate_target_text("", false).is_ok());
    }

    #[test]
    fn empty_target_text_rejected_for_submission() {
        assert!(validate_target_text("   ", true).is_err());
    }

    #[test]
    fn oversized_target_text_rejected() {
        let text = "x".repeat(MAX_TARGET_TEXT_LENGTH + 1);
        assert!(validate_target_text(&text, false).is_err());
    }

    // -- authorization table ------------------------------------------------

    #[test]
    fn translator_may_save_and_submit() {
        assert!(action_allowed(ROLE_TRANSLATOR, TransitionAction::SaveDraft));
        assert!(action_allowed(ROLE_TRANSLATOR, TransitionAction::Submit));
    }

    #[test]
    fn translator_may_not_review() {
        assert!(!action_allowed(ROLE_TRANSLATOR, TransitionAction::Approve));
        assert!(!action_allowed(ROLE_TRANSLATOR, TransitionAction::Reject));
    }

    #[test]
    fn reviewer_may_review_but_not_submit() {
        assert!(action_allowed(ROLE_REVIEWER, TransitionAction::Approve));
        assert!(action_allowed(ROLE_REVIEWER, TransitionAction::Reject));
        assert!(!action_allowed(ROLE_REVIEWER, TransitionAction::Submit));
        assert!(!action_allowed(ROLE_REVIEWER, TransitionAction::SaveDraft));
    }

    #[test]
    fn admin_may_do_everything_role_wise() {
        for action in [
            TransitionAction::SaveDraft,
            TransitionAction::Submit,
            TransitionAction::Approve,
            TransitionAction::Reject,
        ] {
            assert!(action_allowed(ROLE_ADMIN, action));
        }
    }

    #[test]
    fn submit_requires_ownership_even_for_admin() {
        let err = authorize(ROLE_ADMIN, 1, 2, TransitionAction::Submit).unwrap_err();
        assert!(err.to_string().contains("assigned translator"));
    }

    #[test]
    fn assigned_translator_is_authorized_to_submit() {
        assert!(authorize(ROLE_TRANSLATOR, 5, 5, TransitionAction::Submit).is_ok());
    }

    #[test]
    fn reviewer_needs_no_ownership_to_approve() {
        assert!(authorize(ROLE_REVIEWER, 1, 2, TransitionAction::Approve).is_ok());
    }

    #[test]
    fn translator_approving_is_forbidden() {
        let err = authorize(ROLE_TRANSLATOR, 5, 5, TransitionAction::Approve).unwrap_err();
        assert!(err.to_string().contains("may not approve"));
    }
}
