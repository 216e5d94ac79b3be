//! Integration tests for the guarded lifecycle updates: status+version
//! guards, queue ordering, and rejection history.

use sqlx::PgPool;
use tarjama_core::distribution::distribute;
use tarjama_core::lifecycle::{STATUS_IN_QA, STATUS_PENDING, STATUS_REJECTED};
use tarjama_core::types::DbId;
use tarjama_db::models::catalog::{CreateInstructionTemplate, CreateSource};
use tarjama_db::models::user::CreateUser;
use tarjama_db::models::work_item::WorkItem;
use tarjama_db::models::work_packet::NewWorkPacket;
use tarjama_db::repositories::{
    InstructionTemplateRepo, PacketRepo, SourceRepo, UserRepo, WorkItemRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str, role: &str) -> DbId {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            display_name: username.to_string(),
            role: role.to_string(),
        },
    )
    .await
    .expect("user creation should succeed")
    .id
}

/// Seed a packet with `n` fragments assigned to a single translator and
/// return the stored items in sequence order.
async fn seed_items(pool: &PgPool, translator: DbId, n: usize) -> Vec<WorkItem> {
    let admin = seed_user(pool, &format!("admin_{n}"), "admin").await;

    let source = SourceRepo::create(
        pool,
        &CreateSource {
            title: "doc".to_string(),
            content: "irrelevant".to_string(),
        },
    )
    .await
    .unwrap();
    let template = InstructionTemplateRepo::create(
        pool,
        &CreateInstructionTemplate {
            name: "tpl".to_string(),
            instructions: "Translate faithfully.".to_string(),
        },
    )
    .await
    .unwrap();

    let fragments: Vec<String> = (1..=n).map(|i| format!("source fragment {i}")).collect();
    let items = distribute(fragments, &[translator]).unwrap();

    let packet = PacketRepo::create_with_items(
        pool,
        &NewWorkPacket {
            source_id: source.id,
            template_id: template.id,
            style_tag_id: None,
            unit_granularity: "sentence".to_string(),
            created_by: admin,
        },
        &[translator],
        &items,
    )
    .await
    .unwrap();

    WorkItemRepo::list_for_packet(pool, packet.id).await.unwrap()
}

// ---------------------------------------------------------------------------
// Draft save and submit guards
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn save_draft_keeps_pending_and_bumps_version(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let items = seed_items(&pool, t1, 1).await;
    let item = &items[0];

    let updated = WorkItemRepo::save_draft(&pool, item.id, "draft text", item.version)
        .await
        .unwrap()
        .expect("guard should pass");

    assert_eq!(updated.status, STATUS_PENDING);
    assert_eq!(updated.target_text, "draft text");
    assert_eq!(updated.version, item.version + 1);
    assert!(updated.submitted_at.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn stale_version_misses_the_guard(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let items = seed_items(&pool, t1, 1).await;
    let item = &items[0];

    let first = WorkItemRepo::save_draft(&pool, item.id, "first", item.version)
        .await
        .unwrap();
    assert!(first.is_some());

    // Reusing the old version must not win.
    let second = WorkItemRepo::save_draft(&pool, item.id, "second", item.version)
        .await
        .unwrap();
    assert!(second.is_none());

    let current = WorkItemRepo::find_by_id(&pool, item.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.target_text, "first");
}

#[sqlx::test(migrations = "./migrations")]
async fn submit_sets_status_and_submitted_at(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let items = seed_items(&pool, t1, 1).await;
    let item = &items[0];

    let updated = WorkItemRepo::submit(&pool, item.id, "translated text", item.version)
        .await
        .unwrap()
        .expect("guard should pass");

    assert_eq!(updated.status, STATUS_IN_QA);
    assert!(updated.submitted_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn save_draft_refused_once_submitted(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let items = seed_items(&pool, t1, 1).await;
    let item = &items[0];

    let submitted = WorkItemRepo::submit(&pool, item.id, "translated", item.version)
        .await
        .unwrap()
        .unwrap();

    let draft = WorkItemRepo::save_draft(&pool, item.id, "late edit", submitted.version)
        .await
        .unwrap();
    assert!(draft.is_none());
}

// ---------------------------------------------------------------------------
// Review decisions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn approve_records_reviewer_and_score(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let reviewer = seed_user(&pool, "r1", "reviewer").await;
    let items = seed_items(&pool, t1, 1).await;
    let item = &items[0];

    let submitted = WorkItemRepo::submit(&pool, item.id, "translated", item.version)
        .await
        .unwrap()
        .unwrap();

    let approved = WorkItemRepo::approve(&pool, item.id, reviewer, 4, submitted.version)
        .await
        .unwrap()
        .expect("guard should pass");

    assert_eq!(approved.status, "approved");
    assert_eq!(approved.reviewed_by, Some(reviewer));
    assert_eq!(approved.quality_score, Some(4));
    assert!(approved.reviewed_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn approve_refused_unless_in_qa(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let reviewer = seed_user(&pool, "r1", "reviewer").await;
    let items = seed_items(&pool, t1, 1).await;
    let item = &items[0];

    // Still pending: the status guard must miss.
    let result = WorkItemRepo::approve(&pool, item.id, reviewer, 5, item.version)
        .await
        .unwrap();
    assert!(result.is_none());

    let current = WorkItemRepo::find_by_id(&pool, item.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.status, STATUS_PENDING);
}

#[sqlx::test(migrations = "./migrations")]
async fn rejection_reason_survives_resubmission(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let reviewer = seed_user(&pool, "r1", "reviewer").await;
    let items = seed_items(&pool, t1, 1).await;
    let item = &items[0];

    let submitted = WorkItemRepo::submit(&pool, item.id, "first attempt", item.version)
        .await
        .unwrap()
        .unwrap();

    let rejected = WorkItemRepo::reject(
        &pool,
        item.id,
        reviewer,
        "wrong dialect",
        submitted.version,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(rejected.status, STATUS_REJECTED);
    assert_eq!(rejected.rejection_reason.as_deref(), Some("wrong dialect"));
    assert_eq!(rejected.quality_score, None);

    // Resubmission keeps the reason on the record as history.
    let resubmitted = WorkItemRepo::submit(&pool, item.id, "second attempt", rejected.version)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resubmitted.status, STATUS_IN_QA);
    assert_eq!(
        resubmitted.rejection_reason.as_deref(),
        Some("wrong dialect")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_reviewers_second_decision_loses(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let r1 = seed_user(&pool, "r1", "reviewer").await;
    let r2 = seed_user(&pool, "r2", "reviewer").await;
    let items = seed_items(&pool, t1, 1).await;
    let item = &items[0];

    let submitted = WorkItemRepo::submit(&pool, item.id, "translated", item.version)
        .await
        .unwrap()
        .unwrap();

    // Both reviewers read the same version; only the first write lands.
    let first = WorkItemRepo::approve(&pool, item.id, r1, 5, submitted.version)
        .await
        .unwrap();
    assert!(first.is_some());

    let second = WorkItemRepo::reject(&pool, item.id, r2, "disagree", submitted.version)
        .await
        .unwrap();
    assert!(second.is_none());

    let current = WorkItemRepo::find_by_id(&pool, item.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.status, "approved");
    assert_eq!(current.reviewed_by, Some(r1));
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn review_queue_is_fifo_by_submission(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let items = seed_items(&pool, t1, 3).await;

    // Submit out of sequence order: 3, then 1, then 2.
    for index in [2usize, 0, 1] {
        let item = &items[index];
        WorkItemRepo::submit(&pool, item.id, "translated", item.version)
            .await
            .unwrap()
            .unwrap();
    }

    let queue = WorkItemRepo::review_queue(&pool).await.unwrap();
    let ids: Vec<_> = queue.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![items[2].id, items[0].id, items[1].id]);

    // Cursor stepping follows the same order and exhausts cleanly.
    let head = WorkItemRepo::next_in_queue(&pool, None).await.unwrap().unwrap();
    assert_eq!(head.id, items[2].id);

    let second = WorkItemRepo::next_in_queue(&pool, Some(head.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(second.id, items[0].id);

    let third = WorkItemRepo::next_in_queue(&pool, Some(second.id))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(third.id, items[1].id);

    let exhausted = WorkItemRepo::next_in_queue(&pool, Some(third.id)).await.unwrap();
    assert!(exhausted.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_assigned_excludes_in_qa_and_approved(pool: PgPool) {
    let t1 = seed_user(&pool, "t1", "translator").await;
    let reviewer = seed_user(&pool, "r1", "reviewer").await;
    let items = seed_items(&pool, t1, 3).await;

    // Item 1 stays pending. Item 2 goes to review. Item 3 is rejected back.
    WorkItemRepo::submit(&pool, items[1].id, "translated", items[1].version)
        .await
        .unwrap()
        .unwrap();
    let third = WorkItemRepo::submit(&pool, items[2].id, "translated", items[2].version)
        .await
        .unwrap()
        .unwrap();
    WorkItemRepo::reject(&pool, third.id, reviewer, "needs rework", third.version)
        .await
        .unwrap()
        .unwrap();

    let assigned = WorkItemRepo::list_assigned(&pool, t1).await.unwrap();
    let ids: Vec<_> = assigned.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![items[0].id, items[2].id]);
}
